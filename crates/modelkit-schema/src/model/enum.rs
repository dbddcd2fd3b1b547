use serde::{Deserialize, Serialize};

///
/// Enum
///
/// A named set of allowed string elements, referencable by fields.
/// Elements must be non-empty, unique, and at least two; see `validate`.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Enum {
    pub name: String,
    pub elements: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Enum {
    #[must_use]
    pub fn new(name: impl Into<String>, elements: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            elements: elements.into_iter().map(Into::into).collect(),
            comment: None,
        }
    }

    #[must_use]
    pub fn contains(&self, element: &str) -> bool {
        self.elements.iter().any(|e| e == element)
    }
}
