use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display},
    ops::Not,
};

///
/// Index
///
/// An ordered set of entity fields with a uniqueness flag.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Index {
    pub name: String,
    pub fields: Vec<IndexField>,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub unique: bool,
}

impl Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = self
            .fields
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        if self.unique {
            write!(f, "UNIQUE ({fields})")
        } else {
            write!(f, "({fields})")
        }
    }
}

///
/// IndexField
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct IndexField {
    pub field: String,

    /// Omitted in payloads means ascending.
    #[serde(default)]
    pub direction: Direction,
}

impl Display for IndexField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Direction::Asc => write!(f, "{}", self.field),
            Direction::Desc => write!(f, "{} DESC", self.field),
        }
    }
}

///
/// Direction
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}
