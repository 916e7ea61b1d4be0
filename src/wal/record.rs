//! Log action types

use std::collections::BTreeMap;

use crate::record::DataObject;
use crate::value::Value;

use super::errors::{LogError, LogResult};

/// Kind of a logged mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// New record with a full field set
    Insert,
    /// Changed fields only, targeting an existing id
    Update,
    /// Tombstone for an id
    Remove,
}

impl ActionKind {
    /// Returns the log-line token for this kind
    pub fn as_token(self) -> &'static str {
        match self {
            ActionKind::Insert => "insert",
            ActionKind::Update => "update",
            ActionKind::Remove => "remove",
        }
    }

    /// Parses a log-line token, returning None for unknown tokens
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "insert" => Some(ActionKind::Insert),
            "update" => Some(ActionKind::Update),
            "remove" => Some(ActionKind::Remove),
            _ => None,
        }
    }
}

/// Partial field set targeting one record id.
///
/// A `Null` field value clears that field on replay.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateValues {
    /// Target record id
    pub id: u64,
    /// Changed fields only
    pub fields: BTreeMap<String, Value>,
}

impl UpdateValues {
    /// Create an empty update targeting the given id
    pub fn new(id: u64) -> Self {
        Self {
            id,
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field insertion
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }
}

/// A tagged bundle describing one mutation event.
///
/// Exactly one of the three slots is meaningful per event; the constructors
/// keep the others empty, and `kind` enforces the contract.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActionValues {
    /// New record, for insert
    pub input: Option<DataObject>,
    /// Partial field set plus target id, for update
    pub update: Option<UpdateValues>,
    /// Target id, for remove
    pub remove: Option<u64>,
}

impl ActionValues {
    /// Bundle an insert of a full record
    pub fn insert(obj: DataObject) -> Self {
        Self {
            input: Some(obj),
            ..Self::default()
        }
    }

    /// Bundle an update of changed fields
    pub fn update(update: UpdateValues) -> Self {
        Self {
            update: Some(update),
            ..Self::default()
        }
    }

    /// Bundle a removal by id
    pub fn remove(id: u64) -> Self {
        Self {
            remove: Some(id),
            ..Self::default()
        }
    }

    /// Resolves which action this bundle carries.
    ///
    /// # Errors
    ///
    /// Returns `LogError::AmbiguousAction` when more than one slot is set,
    /// `LogError::EmptyAction` when none is.
    pub fn kind(&self) -> LogResult<ActionKind> {
        let set = self.input.is_some() as u8
            + self.update.is_some() as u8
            + self.remove.is_some() as u8;
        match set {
            0 => Err(LogError::EmptyAction),
            1 => {
                if self.input.is_some() {
                    Ok(ActionKind::Insert)
                } else if self.update.is_some() {
                    Ok(ActionKind::Update)
                } else {
                    Ok(ActionKind::Remove)
                }
            }
            _ => Err(LogError::AmbiguousAction),
        }
    }
}

/// One decoded log line
#[derive(Debug, Clone, PartialEq)]
pub enum LogEntry {
    /// Full record insertion
    Insert(DataObject),
    /// Partial field update
    Update(UpdateValues),
    /// Tombstone
    Remove(u64),
}

impl LogEntry {
    /// Returns the action kind of this entry
    pub fn kind(&self) -> ActionKind {
        match self {
            LogEntry::Insert(_) => ActionKind::Insert,
            LogEntry::Update(_) => ActionKind::Update,
            LogEntry::Remove(_) => ActionKind::Remove,
        }
    }

    /// Returns the record id this entry targets
    pub fn id(&self) -> u64 {
        match self {
            LogEntry::Insert(obj) => obj.id,
            LogEntry::Update(update) => update.id,
            LogEntry::Remove(id) => *id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_kind_tokens_roundtrip() {
        for kind in [ActionKind::Insert, ActionKind::Update, ActionKind::Remove] {
            assert_eq!(ActionKind::from_token(kind.as_token()), Some(kind));
        }
        assert_eq!(ActionKind::from_token("upsert"), None);
    }

    #[test]
    fn test_constructors_set_exactly_one_slot() {
        assert_eq!(
            ActionValues::insert(DataObject::new(1)).kind().unwrap(),
            ActionKind::Insert
        );
        assert_eq!(
            ActionValues::update(UpdateValues::new(1)).kind().unwrap(),
            ActionKind::Update
        );
        assert_eq!(ActionValues::remove(1).kind().unwrap(), ActionKind::Remove);
    }

    #[test]
    fn test_ambiguous_bundle_rejected() {
        let actions = ActionValues {
            input: Some(DataObject::new(1)),
            remove: Some(1),
            ..ActionValues::default()
        };
        assert_eq!(actions.kind().unwrap_err(), LogError::AmbiguousAction);
    }

    #[test]
    fn test_empty_bundle_rejected() {
        assert_eq!(
            ActionValues::default().kind().unwrap_err(),
            LogError::EmptyAction
        );
    }

    #[test]
    fn test_entry_id() {
        assert_eq!(LogEntry::Remove(9).id(), 9);
        assert_eq!(LogEntry::Insert(DataObject::new(4)).id(), 4);
        assert_eq!(LogEntry::Update(UpdateValues::new(2)).id(), 2);
    }
}
