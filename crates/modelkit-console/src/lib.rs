//! Editor-facing surface of the ModelKit metamodel engine.
//!
//! The core in `modelkit-schema` is pure; this crate owns the seams around
//! it: the asynchronous persistence collaborator ([`store::ModelStore`]),
//! the optional trace sink ([`trace::SchemaTraceSink`]), and the
//! [`editor::EntityEditor`] session that drives resolve, validate, persist.

pub mod editor;
pub mod store;
pub mod trace;

pub use editor::{EditorError, EntityEditor};
