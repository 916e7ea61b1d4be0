//! Append-only log line production

use crate::record::{escape_field, obj_to_str, NULL_TOKEN};
use crate::schema::Schema;
use crate::value::{value_to_str, Value};

use super::errors::{LogError, LogResult};
use super::record::{ActionKind, ActionValues, UpdateValues};

/// Serializes one mutation event into append-only log lines.
///
/// One logical action yields exactly one line; every structural character
/// inside encoded fields is escaped, so an action never spans lines.
///
/// - insert: `insert,<id>,<full positional record>`
/// - update: `update,<id>,<name>:<value>,...` with changed fields only,
///   in schema-declared order
/// - remove: `remove,<id>` with no payload
///
/// # Errors
///
/// Returns `AmbiguousAction`/`EmptyAction` when the bundle does not carry
/// exactly one action, `UnknownProp` when an update names an undeclared
/// property, and propagates encoding failures from the codec layers.
pub fn convert_to_log(schema: &Schema, actions: &ActionValues) -> LogResult<Vec<String>> {
    let line = match actions.kind()? {
        ActionKind::Insert => {
            // kind() guarantees the slot is set
            let obj = actions.input.as_ref().ok_or(LogError::EmptyAction)?;
            let body = obj_to_str(&schema.props, &obj.fields)?;
            format!("{},{},{}", ActionKind::Insert.as_token(), obj.id, body)
        }
        ActionKind::Update => {
            let update = actions.update.as_ref().ok_or(LogError::EmptyAction)?;
            format!(
                "{},{},{}",
                ActionKind::Update.as_token(),
                update.id,
                update_pairs(schema, update)?
            )
        }
        ActionKind::Remove => {
            let id = actions.remove.ok_or(LogError::EmptyAction)?;
            format!("{},{}", ActionKind::Remove.as_token(), id)
        }
    };
    Ok(vec![line])
}

/// Changed fields as `name:value` pairs in schema-declared order.
fn update_pairs(schema: &Schema, update: &UpdateValues) -> LogResult<String> {
    if update.fields.is_empty() {
        return Err(LogError::EmptyAction);
    }
    for name in update.fields.keys() {
        if schema.prop(name).is_none() {
            return Err(LogError::UnknownProp(name.clone()));
        }
    }

    let mut pairs = Vec::with_capacity(update.fields.len());
    for prop in &schema.props {
        let value = match update.fields.get(&prop.name) {
            Some(value) => value,
            None => continue,
        };
        let encoded = match value {
            Value::Null => NULL_TOKEN.to_string(),
            value => escape_field(&value_to_str(prop.data_type, value)?),
        };
        pairs.push(format!("{}:{}", prop.name, encoded));
    }
    Ok(pairs.join(","))
}

#[cfg(test)]
mod tests {
    use crate::record::DataObject;
    use crate::schema::schemify;

    use super::*;

    fn users_schema() -> Schema {
        schemify("users::name:string,age:number").unwrap()
    }

    #[test]
    fn test_insert_line_carries_full_record() {
        let schema = users_schema();
        let obj = DataObject::new(1).with_field("name", "Ann").with_field("age", 30i64);

        let lines = convert_to_log(&schema, &ActionValues::insert(obj)).unwrap();
        assert_eq!(lines, vec!["insert,1,Ann,30"]);
    }

    #[test]
    fn test_update_line_carries_changed_fields_only() {
        let schema = users_schema();
        let update = UpdateValues::new(1).with_field("age", 31i64);

        let lines = convert_to_log(&schema, &ActionValues::update(update)).unwrap();
        assert_eq!(lines, vec!["update,1,age:31"]);
    }

    #[test]
    fn test_update_pairs_follow_schema_order() {
        let schema = users_schema();
        let update = UpdateValues::new(2)
            .with_field("age", 31i64)
            .with_field("name", "Bo");

        let lines = convert_to_log(&schema, &ActionValues::update(update)).unwrap();
        assert_eq!(lines, vec!["update,2,name:Bo,age:31"]);
    }

    #[test]
    fn test_update_null_clears_field() {
        let schema = users_schema();
        let update = UpdateValues::new(1).with_field("age", Value::Null);

        let lines = convert_to_log(&schema, &ActionValues::update(update)).unwrap();
        assert_eq!(lines, vec!["update,1,age:\\0"]);
    }

    #[test]
    fn test_remove_line_is_tombstone_only() {
        let schema = users_schema();
        let lines = convert_to_log(&schema, &ActionValues::remove(9)).unwrap();
        assert_eq!(lines, vec!["remove,9"]);
    }

    #[test]
    fn test_unknown_prop_rejected() {
        let schema = users_schema();
        let update = UpdateValues::new(1).with_field("phantom", "x");

        let err = convert_to_log(&schema, &ActionValues::update(update)).unwrap_err();
        assert_eq!(err, LogError::UnknownProp("phantom".into()));
    }

    #[test]
    fn test_empty_update_rejected() {
        let schema = users_schema();
        let err = convert_to_log(&schema, &ActionValues::update(UpdateValues::new(1)))
            .unwrap_err();
        assert_eq!(err, LogError::EmptyAction);
    }

    #[test]
    fn test_ambiguous_bundle_rejected() {
        let schema = users_schema();
        let actions = ActionValues {
            input: Some(DataObject::new(1)),
            remove: Some(1),
            ..ActionValues::default()
        };
        assert_eq!(
            convert_to_log(&schema, &actions).unwrap_err(),
            LogError::AmbiguousAction
        );
    }

    #[test]
    fn test_insert_escapes_separators_in_values() {
        let schema = users_schema();
        let obj = DataObject::new(3).with_field("name", "a,b").with_field("age", 1i64);

        let lines = convert_to_log(&schema, &ActionValues::insert(obj)).unwrap();
        assert_eq!(lines, vec!["insert,3,a\\,b,1"]);
    }
}
