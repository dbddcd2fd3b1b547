//! Shared fixtures for unit tests across the crate.

use crate::{
    model::{
        Direction, Entity, Enum, Field, FieldKind, IdentifierStrategy, Index, IndexField,
        ScalarKind,
    },
    registry::{DEFAULT_STRING_LENGTH, ScalarType, scalar_template},
};

/// Bare text draft.
pub fn field(name: &str) -> Field {
    Field::draft(name)
}

pub fn string_field(name: &str) -> Field {
    Field {
        kind: FieldKind::Scalar(ScalarKind::String {
            length: DEFAULT_STRING_LENGTH,
        }),
        ..Field::draft(name)
    }
}

pub fn int_field(name: &str) -> Field {
    Field {
        kind: FieldKind::Scalar(scalar_template(ScalarType::Int)),
        ..Field::draft(name)
    }
}

pub fn id_field(name: &str) -> Field {
    Field {
        kind: FieldKind::Identifier {
            strategy: IdentifierStrategy::AutoIncrement,
        },
        unique: true,
        nullable: false,
        ..Field::draft(name)
    }
}

/// Entity "customer" with an identifier, two scalars, and one index.
pub fn customer_entity() -> Entity {
    Entity {
        name: "customer".to_string(),
        fields: vec![id_field("id"), string_field("email"), int_field("visits")],
        indexes: vec![Index {
            name: "by_email".to_string(),
            fields: vec![IndexField {
                field: "email".to_string(),
                direction: Direction::Asc,
            }],
            unique: true,
        }],
        comment: None,
    }
}

pub fn status_enum(name: &str) -> Enum {
    Enum::new(name, ["active", "suspended", "closed"])
}
