use crate::params;
use serde::{Deserialize, Serialize};

///
/// NativeQuery
///
/// A named raw query statement stored alongside entities and enums. The
/// statement may contain `${name}` placeholders; downstream execution
/// prompts for their values.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NativeQuery {
    pub name: String,
    pub statement: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl NativeQuery {
    #[must_use]
    pub fn new(name: impl Into<String>, statement: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            statement: statement.into(),
            comment: None,
        }
    }

    /// Placeholder names in first-seen order.
    #[must_use]
    pub fn parameters(&self) -> Vec<String> {
        params::extract_parameters(&self.statement)
    }
}
