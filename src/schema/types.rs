//! Schema type definitions

use serde::{Deserialize, Serialize};

use crate::value::DataType;

/// One typed property declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropDef {
    /// Property name, unique within its schema
    pub name: String,
    /// Declared primitive kind
    pub data_type: DataType,
}

impl PropDef {
    /// Create a property declaration
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// Compiled schema: a named, ordered set of typed property declarations.
///
/// `props` is a `Vec`, not a map: declaration order determines the
/// positional encoding of record lines and must survive every transform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Collection name, unique per store
    pub name: String,
    /// Property declarations in declared order
    pub props: Vec<PropDef>,
}

impl Schema {
    /// Create a schema from a name and ordered declarations
    pub fn new(name: impl Into<String>, props: Vec<PropDef>) -> Self {
        Self {
            name: name.into(),
            props,
        }
    }

    /// Looks up a declaration by property name
    pub fn prop(&self, name: &str) -> Option<&PropDef> {
        self.props.iter().find(|p| p.name == name)
    }

    /// Number of declared properties, the record-line field count
    pub fn arity(&self) -> usize {
        self.props.len()
    }

    /// Canonical textual form, the inverse of `schemify`.
    ///
    /// This is the header line the snapshot writer emits.
    pub fn to_line(&self) -> String {
        let decls: Vec<String> = self
            .props
            .iter()
            .map(|p| format!("{}:{}", p.name, p.data_type.type_name()))
            .collect();
        format!("{}::{}", self.name, decls.join(","))
    }
}
