//! Editor tracing boundary.
//!
//! Tracing is optional, injected by the caller, and must not affect
//! editing semantics.

///
/// SchemaTraceSink
///

pub trait SchemaTraceSink {
    fn on_event(&self, event: SchemaTraceEvent);
}

///
/// SchemaTraceEvent
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SchemaTraceEvent {
    /// A field kind selection resolved into a normalized draft.
    Resolved {
        field: String,
        concrete_type: &'static str,
    },

    /// A draft failed validation and was not sent to the store.
    Rejected { target: String, reason: String },

    /// A normalized descriptor was persisted by the collaborator.
    Persisted { op: PersistOp, name: String },
}

///
/// PersistOp
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PersistOp {
    Create,
    Modify,
    Drop,
}
