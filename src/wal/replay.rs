//! Log replay
//!
//! Folds log lines over a collection state, reconstructing the state the
//! writer observed. Replay is deterministic: the same lines in the same
//! order over the same seed always produce the same state.

use std::collections::BTreeMap;

use crate::record::DataObject;
use crate::schema::Schema;
use crate::value::Value;

use super::errors::LogResult;
use super::reader::parse_log_line;
use super::record::LogEntry;

/// In-memory collection state keyed by record id
pub type CollectionState = BTreeMap<u64, DataObject>;

/// Applies one decoded entry to the state.
///
/// Insert and update are last-writer-wins per id; an update targeting an
/// id not yet present creates the record from the partial field set. A
/// `Null` update value clears that field. A tombstone drops any prior
/// state for the id, whether or not the id exists yet.
pub fn apply(state: &mut CollectionState, entry: LogEntry) {
    match entry {
        LogEntry::Insert(obj) => {
            state.insert(obj.id, obj);
        }
        LogEntry::Update(update) => {
            let record = state
                .entry(update.id)
                .or_insert_with(|| DataObject::new(update.id));
            for (name, value) in update.fields {
                match value {
                    Value::Null => {
                        record.fields.remove(&name);
                    }
                    value => {
                        record.fields.insert(name, value);
                    }
                }
            }
        }
        LogEntry::Remove(id) => {
            state.remove(&id);
        }
    }
}

/// Replays log lines in order over a seed state.
///
/// The seed is empty for a fresh collection, or snapshot-derived for
/// recovery after compaction.
///
/// # Errors
///
/// Fails on the first undecodable line; the returned error names it. No
/// partial state is returned.
pub fn replay(schema: &Schema, lines: &[String], seed: CollectionState) -> LogResult<CollectionState> {
    let mut state = seed;
    for line in lines {
        let entry = parse_log_line(schema, line)?;
        apply(&mut state, entry);
    }
    Ok(state)
}

#[cfg(test)]
mod tests {
    use crate::schema::schemify;
    use crate::wal::record::UpdateValues;

    use super::*;

    fn users_schema() -> Schema {
        schemify("users::name:string,age:number").unwrap()
    }

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_replay_insert_then_update() {
        let schema = users_schema();
        let state = replay(
            &schema,
            &lines(&["insert,1,Ann,30", "update,1,age:31"]),
            CollectionState::new(),
        )
        .unwrap();

        assert_eq!(state.len(), 1);
        let record = &state[&1];
        assert_eq!(record.field("name"), Some(&Value::from("Ann")));
        assert_eq!(record.field("age"), Some(&Value::Int(31)));
    }

    #[test]
    fn test_tombstone_removes_earlier_insert() {
        let schema = users_schema();
        let state = replay(
            &schema,
            &lines(&["insert,1,Ann,30", "insert,2,Bo,41", "remove,1"]),
            CollectionState::new(),
        )
        .unwrap();

        assert!(!state.contains_key(&1));
        assert!(state.contains_key(&2));
    }

    #[test]
    fn test_tombstone_for_unknown_id_is_noop() {
        let schema = users_schema();
        let state = replay(&schema, &lines(&["remove,7"]), CollectionState::new()).unwrap();
        assert!(state.is_empty());
    }

    #[test]
    fn test_update_creates_missing_record() {
        let schema = users_schema();
        let state = replay(&schema, &lines(&["update,4,age:12"]), CollectionState::new()).unwrap();

        let record = &state[&4];
        assert_eq!(record.field("age"), Some(&Value::Int(12)));
        assert!(record.field("name").is_none());
    }

    #[test]
    fn test_update_null_clears_field() {
        let schema = users_schema();
        let state = replay(
            &schema,
            &lines(&["insert,1,Ann,30", "update,1,age:\\0"]),
            CollectionState::new(),
        )
        .unwrap();

        assert!(state[&1].field("age").is_none());
        assert_eq!(state[&1].field("name"), Some(&Value::from("Ann")));
    }

    #[test]
    fn test_last_writer_wins_per_id() {
        let schema = users_schema();
        let state = replay(
            &schema,
            &lines(&["insert,1,Ann,30", "insert,1,Bo,41"]),
            CollectionState::new(),
        )
        .unwrap();

        assert_eq!(state[&1].field("name"), Some(&Value::from("Bo")));
    }

    #[test]
    fn test_replay_matches_direct_application() {
        let schema = users_schema();

        // Direct, in-memory mutation
        let mut direct = CollectionState::new();
        apply(
            &mut direct,
            LogEntry::Insert(DataObject::new(1).with_field("name", "Ann").with_field("age", 30i64)),
        );
        apply(
            &mut direct,
            LogEntry::Update(UpdateValues::new(1).with_field("age", 31i64)),
        );
        apply(&mut direct, LogEntry::Remove(2));

        // The same actions through the textual log
        let replayed = replay(
            &schema,
            &lines(&["insert,1,Ann,30", "update,1,age:31", "remove,2"]),
            CollectionState::new(),
        )
        .unwrap();

        assert_eq!(direct, replayed);
    }

    #[test]
    fn test_replay_stops_on_undecodable_line() {
        let schema = users_schema();
        let result = replay(
            &schema,
            &lines(&["insert,1,Ann,30", "garbage line"]),
            CollectionState::new(),
        );
        assert!(result.is_err());
    }
}
