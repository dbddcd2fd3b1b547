use crate::model::{Field, Index};
use serde::{Deserialize, Serialize};

///
/// Entity
///
/// A structured model with fields and indexes, stored in a datasource.
/// Invariants (unique field names, at most one identifier) are enforced
/// by `validate`, not by construction.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Entity {
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub indexes: Vec<Index>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Entity {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            indexes: Vec::new(),
            comment: None,
        }
    }

    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// The entity's identifier field, if one has been defined yet.
    #[must_use]
    pub fn identifier_field(&self) -> Option<&Field> {
        self.fields.iter().find(|f| f.is_identifier())
    }

    #[must_use]
    pub fn get_index(&self, name: &str) -> Option<&Index> {
        self.indexes.iter().find(|i| i.name == name)
    }
}
