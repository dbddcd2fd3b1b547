use crate::model::ModelKind;
use std::fmt;
use thiserror::Error as ThisError;

///
/// ValidationError
///
/// Structural failure of a draft descriptor. Never fatal: the editor stays
/// open and the user corrects and resubmits. Conflicts and dangling
/// references carry their own variants so callers can branch on them.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ValidationError {
    #[error("{target}: {message}")]
    Invalid { target: Target, message: String },

    #[error(transparent)]
    Conflict(#[from] ConflictError),

    #[error(transparent)]
    Reference(#[from] ReferenceNotFound),
}

impl ValidationError {
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }
}

///
/// Target
///
/// What a validation failure is about, by schema object kind and name.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Target {
    Entity(String),
    Field(String),
    Index(String),
    Enum(String),
    NativeQuery(String),
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entity(name) => write!(f, "entity '{name}'"),
            Self::Field(name) => write!(f, "field '{name}'"),
            Self::Index(name) => write!(f, "index '{name}'"),
            Self::Enum(name) => write!(f, "enum '{name}'"),
            Self::NativeQuery(name) => write!(f, "native query '{name}'"),
        }
    }
}

///
/// ConflictError
///
/// A closed-world collision: duplicate names, or a second identifier field.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ConflictError {
    #[error("a field named '{name}' already exists on this entity")]
    DuplicateField { name: String },

    #[error("entity already has an identifier field '{existing}'")]
    SecondIdentifier { existing: String },

    #[error("an index named '{name}' already exists on this entity")]
    DuplicateIndex { name: String },
}

///
/// ReferenceNotFound
///
/// A relation/enum selector pointed at a model absent from the supplied
/// snapshot. The snapshot is caller-owned; re-snapshot and retry.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("no {expected} named '{name}' in the datasource model list")]
pub struct ReferenceNotFound {
    pub name: String,
    pub expected: ModelKind,
}

///
/// ErrorList
///
/// Flat accumulator for structural issues on a single target. Rules add
/// messages as they fail; `result` collapses them into one
/// [`ValidationError::Invalid`] so every problem is reported at once.
///

#[derive(Debug, Default)]
pub struct ErrorList {
    messages: Vec<String>,
}

impl ErrorList {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    pub fn add(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn result(self, target: Target) -> Result<(), ValidationError> {
        if self.messages.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::Invalid {
                target,
                message: self.messages.join("; "),
            })
        }
    }
}

///
/// err!
/// Format a message into an [`ErrorList`].
///

#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {
        $errs.add(format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_list_collapses_all_issues() {
        let mut errs = ErrorList::new();
        err!(errs, "first");
        err!(errs, "second {}", 2);

        let err = errs.result(Target::Field("a".to_string())).unwrap_err();
        assert_eq!(err.to_string(), "field 'a': first; second 2");
    }

    #[test]
    fn empty_error_list_is_ok() {
        let errs = ErrorList::new();
        assert!(errs.result(Target::Enum("e".to_string())).is_ok());
    }
}
