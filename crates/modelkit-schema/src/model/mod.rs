//! Schema model definitions.
//!
//! These are the plain descriptor shapes the console edits and persists:
//! entities with fields and indexes, enums, and native query models. They
//! carry no behavior beyond accessors; resolution lives in `resolve`,
//! invariants in `validate`.

mod entity;
mod field;
mod index;
mod query;
mod r#enum;
mod value;

pub use entity::Entity;
pub use field::{
    Bound, EnumRef, Field, FieldKind, FieldValidator, Generator, GeneratorRule, GeneratorScope,
    IdentifierStrategy, Relation, RuleKind, ScalarKind, ValidatorRule,
};
pub use index::{Direction, Index, IndexField};
pub use query::NativeQuery;
pub use r#enum::Enum;
pub use value::Value;

use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// ModelKind
///
/// Discriminator for anything storable as a "model" in a datasource.
///

#[derive(Clone, Copy, Debug, Display, Deserialize, Eq, PartialEq, Serialize)]
pub enum ModelKind {
    #[display("entity")]
    Entity,

    #[display("enum")]
    Enum,

    #[display("native query")]
    NativeQuery,
}

///
/// Model
///
/// A storable datasource model. The datasource's full model list is what
/// relation and enum references resolve against.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Model {
    Entity(Entity),
    Enum(Enum),
    NativeQuery(NativeQuery),
}

impl Model {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Entity(entity) => &entity.name,
            Self::Enum(enumeration) => &enumeration.name,
            Self::NativeQuery(query) => &query.name,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ModelKind {
        match self {
            Self::Entity(_) => ModelKind::Entity,
            Self::Enum(_) => ModelKind::Enum,
            Self::NativeQuery(_) => ModelKind::NativeQuery,
        }
    }

    #[must_use]
    pub const fn as_entity(&self) -> Option<&Entity> {
        match self {
            Self::Entity(entity) => Some(entity),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_enum(&self) -> Option<&Enum> {
        match self {
            Self::Enum(enumeration) => Some(enumeration),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_native_query(&self) -> Option<&NativeQuery> {
        match self {
            Self::NativeQuery(query) => Some(query),
            _ => None,
        }
    }
}

///
/// ModelList
///
/// Borrowing view over a caller-owned model snapshot. Lookups are
/// kind-filtered: a relation can never resolve against an enum that
/// happens to share the name.
///

#[derive(Clone, Copy, Debug)]
pub struct ModelList<'a> {
    models: &'a [Model],
}

impl<'a> ModelList<'a> {
    #[must_use]
    pub const fn new(models: &'a [Model]) -> Self {
        Self { models }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'a Model> {
        self.models.iter().find(|m| m.name() == name)
    }

    #[must_use]
    pub fn get_entity(&self, name: &str) -> Option<&'a Entity> {
        self.models
            .iter()
            .find_map(|m| m.as_entity().filter(|e| e.name == name))
    }

    #[must_use]
    pub fn get_enum(&self, name: &str) -> Option<&'a Enum> {
        self.models
            .iter()
            .find_map(|m| m.as_enum().filter(|e| e.name == name))
    }

    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'a, Model> {
        self.models.iter()
    }
}

impl<'a> IntoIterator for &ModelList<'a> {
    type Item = &'a Model;
    type IntoIter = std::slice::Iter<'a, Model>;

    fn into_iter(self) -> Self::IntoIter {
        self.models.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_fixtures::{customer_entity, status_enum};

    use super::*;

    #[test]
    fn lookups_are_kind_filtered() {
        let models = vec![
            Model::Entity(customer_entity()),
            Model::Enum(status_enum("customer")),
        ];
        let list = ModelList::new(&models);

        // Both models share the name; each lookup sees only its own kind.
        assert!(list.get_entity("customer").is_some());
        assert!(list.get_enum("customer").is_some());
        assert!(list.get_enum("nope").is_none());
        assert_eq!(list.get("customer").map(Model::kind), Some(ModelKind::Entity));
    }
}
