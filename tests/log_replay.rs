//! Log Replay Determinism Tests
//!
//! Replaying emitted log lines in order against an empty or
//! snapshot-seeded state must reconstruct the same state as applying the
//! actions directly in memory, with tombstones taking precedence over any
//! earlier entry for the same id.

use linedb::record::DataObject;
use linedb::schema::{schemify, Schema};
use linedb::value::Value;
use linedb::wal::{
    apply, convert_to_log, parse_log_line, replay, ActionValues, CollectionState, LogEntry,
    UpdateValues,
};

fn users_schema() -> Schema {
    schemify("users::name:string,age:number").unwrap()
}

/// Runs a mutation sequence through the textual log and directly in
/// memory, returning both final states.
fn run_both_paths(
    schema: &Schema,
    actions: Vec<ActionValues>,
) -> (CollectionState, CollectionState) {
    let mut log_lines = Vec::new();
    let mut direct = CollectionState::new();

    for action in actions {
        let lines = convert_to_log(schema, &action).unwrap();
        for line in &lines {
            // The direct path applies the decoded entry immediately
            apply(&mut direct, parse_log_line(schema, line).unwrap());
        }
        log_lines.extend(lines);
    }

    let replayed = replay(schema, &log_lines, CollectionState::new()).unwrap();
    (direct, replayed)
}

#[test]
fn test_replay_equals_direct_application() {
    let schema = users_schema();
    let actions = vec![
        ActionValues::insert(DataObject::new(1).with_field("name", "Ann").with_field("age", 30i64)),
        ActionValues::insert(DataObject::new(2).with_field("name", "Bo").with_field("age", 41i64)),
        ActionValues::update(UpdateValues::new(1).with_field("age", 31i64)),
        ActionValues::remove(2),
        ActionValues::insert(DataObject::new(3).with_field("name", "Cy")),
        ActionValues::update(UpdateValues::new(3).with_field("age", 7i64)),
    ];

    let (direct, replayed) = run_both_paths(&schema, actions);
    assert_eq!(direct, replayed);
    assert_eq!(replayed.len(), 2);
    assert_eq!(replayed[&1].field("age"), Some(&Value::Int(31)));
    assert_eq!(replayed[&3].field("age"), Some(&Value::Int(7)));
}

#[test]
fn test_tombstone_precedence_over_earlier_insert() {
    let schema = users_schema();
    let actions = vec![
        ActionValues::insert(DataObject::new(5).with_field("name", "Ann").with_field("age", 1i64)),
        ActionValues::update(UpdateValues::new(5).with_field("age", 2i64)),
        ActionValues::remove(5),
    ];

    let (direct, replayed) = run_both_paths(&schema, actions);
    assert_eq!(direct, replayed);
    assert!(!replayed.contains_key(&5));
}

#[test]
fn test_tombstone_before_any_insert() {
    let schema = users_schema();
    let lines = convert_to_log(&schema, &ActionValues::remove(9)).unwrap();
    let state = replay(&schema, &lines, CollectionState::new()).unwrap();
    assert!(state.is_empty());
}

#[test]
fn test_replay_over_snapshot_seed() {
    let schema = users_schema();

    // Seed as if recovered from a snapshot
    let mut seed = CollectionState::new();
    let ann = DataObject::new(1).with_field("name", "Ann").with_field("age", 30i64);
    seed.insert(1, ann);

    let mut log_lines = Vec::new();
    log_lines.extend(
        convert_to_log(&schema, &ActionValues::update(UpdateValues::new(1).with_field("age", 31i64)))
            .unwrap(),
    );
    log_lines.extend(
        convert_to_log(
            &schema,
            &ActionValues::insert(DataObject::new(2).with_field("name", "Bo").with_field("age", 41i64)),
        )
        .unwrap(),
    );

    let state = replay(&schema, &log_lines, seed).unwrap();
    assert_eq!(state.len(), 2);
    assert_eq!(state[&1].field("age"), Some(&Value::Int(31)));
    assert_eq!(state[&1].field("name"), Some(&Value::from("Ann")));
}

#[test]
fn test_update_line_shape() {
    let schema = users_schema();
    let lines = convert_to_log(
        &schema,
        &ActionValues::update(UpdateValues::new(1).with_field("age", 31i64)),
    )
    .unwrap();
    assert_eq!(lines, vec!["update,1,age:31"]);
}

#[test]
fn test_update_clearing_field_survives_replay() {
    let schema = users_schema();
    let mut log_lines = Vec::new();
    log_lines.extend(
        convert_to_log(
            &schema,
            &ActionValues::insert(DataObject::new(1).with_field("name", "Ann").with_field("age", 30i64)),
        )
        .unwrap(),
    );
    log_lines.extend(
        convert_to_log(
            &schema,
            &ActionValues::update(UpdateValues::new(1).with_field("age", Value::Null)),
        )
        .unwrap(),
    );

    let state = replay(&schema, &log_lines, CollectionState::new()).unwrap();
    assert!(state[&1].field("age").is_none());
}

#[test]
fn test_replay_with_delimiter_heavy_values() {
    let schema = schemify("notes::body:string").unwrap();
    let body = "line one\nline two, with commas\\and slashes";
    let actions = vec![ActionValues::insert(DataObject::new(1).with_field("body", body))];

    let (direct, replayed) = run_both_paths(&schema, actions);
    assert_eq!(direct, replayed);
    assert_eq!(replayed[&1].field("body"), Some(&Value::from(body)));
}

#[test]
fn test_log_entry_accessors() {
    let schema = users_schema();
    let entry = parse_log_line(&schema, "remove,4").unwrap();
    assert_eq!(entry, LogEntry::Remove(4));
    assert_eq!(entry.id(), 4);
}
