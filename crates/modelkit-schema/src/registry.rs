//! Closed catalog of field kinds and their default attribute templates.
//!
//! The catalog is fixed and exhaustive by construction: every kind the
//! console offers is enumerated here, so a string-keyed lookup that misses
//! is a caller bug, not user input, and panics loudly.

use crate::{
    model::{EnumRef, FieldKind, IdentifierStrategy, Relation, RuleKind, ScalarKind},
    resolve::KindSelector,
};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Default length seeded for new string fields.
pub const DEFAULT_STRING_LENGTH: u32 = 255;

/// Default precision seeded for new decimal fields.
pub const DEFAULT_DECIMAL_PRECISION: u8 = 10;

/// Default scale seeded for new decimal fields.
pub const DEFAULT_DECIMAL_SCALE: u8 = 2;

///
/// ScalarType
///
/// Bare scalar discriminants, without their per-kind attributes.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum ScalarType {
    #[display("bigint")]
    BigInt,

    #[display("boolean")]
    Boolean,

    #[display("date")]
    Date,

    #[display("datetime")]
    DateTime,

    #[display("decimal")]
    Decimal,

    #[display("int")]
    Int,

    #[display("json")]
    Json,

    #[display("string")]
    String,

    #[display("text")]
    Text,
}

impl ScalarType {
    pub const ALL: [Self; 9] = [
        Self::String,
        Self::Text,
        Self::Int,
        Self::BigInt,
        Self::Decimal,
        Self::Boolean,
        Self::Date,
        Self::DateTime,
        Self::Json,
    ];

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "string" => Some(Self::String),
            "text" => Some(Self::Text),
            "int" => Some(Self::Int),
            "bigint" => Some(Self::BigInt),
            "decimal" => Some(Self::Decimal),
            "boolean" => Some(Self::Boolean),
            "date" => Some(Self::Date),
            "datetime" => Some(Self::DateTime),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Seed the default attributes for a bare scalar type.
#[must_use]
pub const fn scalar_template(ty: ScalarType) -> ScalarKind {
    match ty {
        ScalarType::String => ScalarKind::String {
            length: DEFAULT_STRING_LENGTH,
        },
        ScalarType::Text => ScalarKind::Text,
        ScalarType::Int => ScalarKind::Int,
        ScalarType::BigInt => ScalarKind::BigInt,
        ScalarType::Decimal => ScalarKind::Decimal {
            precision: DEFAULT_DECIMAL_PRECISION,
            scale: DEFAULT_DECIMAL_SCALE,
        },
        ScalarType::Boolean => ScalarKind::Boolean,
        ScalarType::Date => ScalarKind::Date,
        ScalarType::DateTime => ScalarKind::DateTime,
        ScalarType::Json => ScalarKind::Json,
    }
}

/// Seed the default attribute template for a selected kind.
///
/// Relation and enum targets are carried over as data; whether they exist
/// in the datasource is the resolver's concern, not the registry's.
#[must_use]
pub fn initial_attributes(selector: &KindSelector) -> FieldKind {
    match selector {
        KindSelector::Identifier => FieldKind::Identifier {
            strategy: IdentifierStrategy::AutoIncrement,
        },
        KindSelector::Scalar(ty) => FieldKind::Scalar(scalar_template(*ty)),
        KindSelector::Relation { entity } => FieldKind::Relation(Relation {
            to: entity.clone(),
            local_field: None,
            foreign_field: None,
            multiple: false,
            cascade_delete: false,
        }),
        KindSelector::EnumRef { enum_name } => FieldKind::EnumRef(EnumRef {
            to: enum_name.clone(),
            multiple: false,
        }),
    }
}

/// Which validator rules may attach to a field of this kind.
///
/// String fields take regex rules; numeric and temporal scalars take
/// min/max/range. Everything else, including identifiers, relations, and
/// enum references, takes none in the current catalog.
#[must_use]
pub const fn applicable_rules(kind: &FieldKind) -> &'static [RuleKind] {
    match kind {
        FieldKind::Scalar(ScalarKind::String { .. }) => &[RuleKind::Regex],
        FieldKind::Scalar(
            ScalarKind::Int
            | ScalarKind::BigInt
            | ScalarKind::Decimal { .. }
            | ScalarKind::Date
            | ScalarKind::DateTime,
        ) => &[RuleKind::Min, RuleKind::Max, RuleKind::Range],
        _ => &[],
    }
}

/// Whether min/max/range bounds for this kind must be temporal.
#[must_use]
pub const fn takes_temporal_bounds(kind: &FieldKind) -> bool {
    matches!(
        kind,
        FieldKind::Scalar(ScalarKind::Date | ScalarKind::DateTime)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_template_seeds_default_length() {
        let kind = initial_attributes(&KindSelector::Scalar(ScalarType::String));
        assert_eq!(
            kind,
            FieldKind::Scalar(ScalarKind::String {
                length: DEFAULT_STRING_LENGTH
            })
        );
    }

    #[test]
    fn decimal_template_seeds_precision_and_scale() {
        let kind = initial_attributes(&KindSelector::Scalar(ScalarType::Decimal));
        assert_eq!(
            kind,
            FieldKind::Scalar(ScalarKind::Decimal {
                precision: DEFAULT_DECIMAL_PRECISION,
                scale: DEFAULT_DECIMAL_SCALE,
            })
        );
    }

    #[test]
    fn relation_template_leaves_endpoints_unset() {
        let kind = initial_attributes(&KindSelector::Relation {
            entity: "customer".to_string(),
        });
        let FieldKind::Relation(relation) = kind else {
            panic!("expected relation kind");
        };

        assert_eq!(relation.to, "customer");
        assert!(relation.local_field.is_none());
        assert!(relation.foreign_field.is_none());
        assert!(!relation.multiple);
        assert!(!relation.cascade_delete);
    }

    #[test]
    fn every_scalar_name_round_trips() {
        for ty in ScalarType::ALL {
            assert_eq!(ScalarType::from_name(&ty.to_string()), Some(ty));
        }
    }

    #[test]
    fn applicability_table_matches_catalog() {
        let string = FieldKind::Scalar(scalar_template(ScalarType::String));
        assert_eq!(applicable_rules(&string), &[RuleKind::Regex]);

        let date = FieldKind::Scalar(ScalarKind::Date);
        assert_eq!(
            applicable_rules(&date),
            &[RuleKind::Min, RuleKind::Max, RuleKind::Range]
        );
        assert!(takes_temporal_bounds(&date));

        let json = FieldKind::Scalar(ScalarKind::Json);
        assert!(applicable_rules(&json).is_empty());

        let id = FieldKind::Identifier {
            strategy: IdentifierStrategy::AutoIncrement,
        };
        assert!(applicable_rules(&id).is_empty());
    }
}
