//! Core metamodel engine for the ModelKit admin console: schema descriptors,
//! the field-kind registry and resolver, constraint validation, and
//! native-query parameter extraction.
//!
//! Everything here is pure and synchronous. Callers pass in caller-owned
//! snapshots of the current entity's fields and the datasource's model list;
//! persistence lives behind the collaborator traits in `modelkit-console`.

pub mod error;

pub mod model;
pub mod params;
pub mod registry;
pub mod resolve;
pub mod validate;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No accumulators, stores, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        err,
        error::{ConflictError, ReferenceNotFound, Target, ValidationError},
        model::*,
        registry::ScalarType,
        resolve::KindSelector,
    };
    pub use serde::{Deserialize, Serialize};
}
