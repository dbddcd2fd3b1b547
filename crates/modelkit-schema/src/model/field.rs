use crate::model::Value;
use serde::{Deserialize, Serialize};
use std::ops::Not;
use time::{Date, PrimitiveDateTime};

///
/// Field
///
/// A named, typed attribute of an entity. Kind-specific attributes live
/// inside [`FieldKind`] so they cannot coexist with the wrong kind.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub unique: bool,

    #[serde(default = "default_nullable")]
    pub nullable: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    /// Single generator slot: attaching a new one replaces the old.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generator: Option<Generator>,

    /// Ordered: position is evaluation order and is preserved on edit.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<FieldValidator>,
}

const fn default_nullable() -> bool {
    true
}

impl Field {
    /// Fresh draft with the default text kind; the resolver reseeds it.
    #[must_use]
    pub fn draft(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Scalar(ScalarKind::Text),
            unique: false,
            nullable: true,
            comment: None,
            default: None,
            generator: None,
            validators: Vec::new(),
        }
    }

    #[must_use]
    pub const fn is_identifier(&self) -> bool {
        matches!(self.kind, FieldKind::Identifier { .. })
    }

    /// Rendering hint for the console UI, derived from the kind so it
    /// cannot drift from it.
    #[must_use]
    pub const fn concrete_type(&self) -> &'static str {
        match &self.kind {
            FieldKind::Identifier { .. } => "identifier",
            FieldKind::Scalar(scalar) => scalar.concrete_type(),
            FieldKind::Relation(_) => "relation",
            FieldKind::EnumRef(_) => "enum",
        }
    }

    /// Replace the generator slot, returning the previous occupant.
    pub fn set_generator(&mut self, generator: Generator) -> Option<Generator> {
        self.generator.replace(generator)
    }

    pub fn clear_generator(&mut self) -> Option<Generator> {
        self.generator.take()
    }

    /// Append a validator at the end of the evaluation order.
    pub fn add_validator(&mut self, validator: FieldValidator) {
        self.validators.push(validator);
    }

    /// Remove the validator at `position`, keeping the rest in order.
    pub fn remove_validator(&mut self, position: usize) -> Option<FieldValidator> {
        if position < self.validators.len() {
            Some(self.validators.remove(position))
        } else {
            None
        }
    }
}

///
/// FieldKind
///
/// Closed catalog of field kinds. The source represented these as ad-hoc
/// strings ("relation:<name>"); here each kind carries exactly its own
/// attributes.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum FieldKind {
    Identifier { strategy: IdentifierStrategy },
    Scalar(ScalarKind),
    Relation(Relation),
    EnumRef(EnumRef),
}

///
/// IdentifierStrategy
/// Where identifier values originate.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum IdentifierStrategy {
    #[default]
    AutoIncrement,

    /// Supplied by the caller on insert; no generation.
    Assigned,
}

///
/// ScalarKind
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum ScalarKind {
    String { length: u32 },
    Text,
    Int,
    BigInt,
    Decimal { precision: u8, scale: u8 },
    Boolean,
    Date,
    DateTime,
    Json,
}

impl ScalarKind {
    #[must_use]
    pub const fn concrete_type(&self) -> &'static str {
        match self {
            Self::String { .. } => "string",
            Self::Text => "text",
            Self::Int => "int",
            Self::BigInt => "bigint",
            Self::Decimal { .. } => "decimal",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Json => "json",
        }
    }
}

///
/// Relation
///
/// Reference to another entity. `local_field`/`foreign_field` are `None`
/// only in drafts; validation requires both set and existing on their
/// respective sides.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Relation {
    pub to: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_field: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign_field: Option<String>,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub multiple: bool,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub cascade_delete: bool,
}

///
/// EnumRef
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct EnumRef {
    pub to: String,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub multiple: bool,
}

///
/// Generator
///
/// Write-time value producer attached to a field. At most one per field,
/// held in a structural `Option` slot. Execution is out of scope.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Generator {
    pub rule: GeneratorRule,
    pub scope: GeneratorScope,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum GeneratorRule {
    Fixed { value: Value },
    Named { name: String },
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum GeneratorScope {
    OnInsert,
    EveryWrite,
}

///
/// FieldValidator
///
/// Write-time rule attached to a field, with a user-facing message.
/// Which rules attach to which kinds is the registry's applicability
/// table; execution is out of scope.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FieldValidator {
    pub rule: ValidatorRule,
    pub message: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum ValidatorRule {
    Regex { pattern: String },
    Min { bound: Bound },
    Max { bound: Bound },
    Range { min: Bound, max: Bound },
}

impl ValidatorRule {
    #[must_use]
    pub const fn kind(&self) -> RuleKind {
        match self {
            Self::Regex { .. } => RuleKind::Regex,
            Self::Min { .. } => RuleKind::Min,
            Self::Max { .. } => RuleKind::Max,
            Self::Range { .. } => RuleKind::Range,
        }
    }

    /// Bounds carried by this rule, in declaration order.
    #[must_use]
    pub fn bounds(&self) -> Vec<&Bound> {
        match self {
            Self::Regex { .. } => Vec::new(),
            Self::Min { bound } | Self::Max { bound } => vec![bound],
            Self::Range { min, max } => vec![min, max],
        }
    }
}

///
/// RuleKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RuleKind {
    Regex,
    Min,
    Max,
    Range,
}

///
/// Bound
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Bound {
    Int(i64),
    Number(f64),
    Date(Date),
    DateTime(PrimitiveDateTime),
}

impl Bound {
    #[must_use]
    pub const fn is_temporal(&self) -> bool {
        matches!(self, Self::Date(_) | Self::DateTime(_))
    }
}
