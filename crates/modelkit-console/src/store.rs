//! Persistence collaborator boundary.
//!
//! Every method accepts an already-validated, normalized descriptor and
//! returns the server-persisted form. Transport failures are surfaced
//! verbatim and never retried here; the caller decides whether to retry.

use modelkit_schema::model::{Field, Index, Model};
use thiserror::Error as ThisError;

///
/// StoreError
///
/// A transport-level failure raised by the backend collaborator.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("model store failure: {message}")]
pub struct StoreError {
    pub message: String,
}

impl StoreError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

///
/// ModelStore
///
/// Asynchronous CRUD collaborator for datasource models. Field and index
/// edits address the record by its original name so renames round-trip.
///

#[allow(async_fn_in_trait)]
pub trait ModelStore {
    async fn list_models(&self, datasource: &str) -> Result<Vec<Model>, StoreError>;

    async fn create_model(&self, datasource: &str, model: Model) -> Result<Model, StoreError>;
    async fn modify_model(
        &self,
        datasource: &str,
        original: &str,
        model: Model,
    ) -> Result<Model, StoreError>;
    async fn drop_model(&self, datasource: &str, name: &str) -> Result<(), StoreError>;

    async fn create_field(
        &self,
        datasource: &str,
        entity: &str,
        field: Field,
    ) -> Result<Field, StoreError>;
    async fn modify_field(
        &self,
        datasource: &str,
        entity: &str,
        original: &str,
        field: Field,
    ) -> Result<Field, StoreError>;
    async fn drop_field(
        &self,
        datasource: &str,
        entity: &str,
        field: &str,
    ) -> Result<(), StoreError>;

    async fn create_index(
        &self,
        datasource: &str,
        entity: &str,
        index: Index,
    ) -> Result<Index, StoreError>;
    async fn modify_index(
        &self,
        datasource: &str,
        entity: &str,
        original: &str,
        index: Index,
    ) -> Result<Index, StoreError>;
    async fn drop_index(
        &self,
        datasource: &str,
        entity: &str,
        index: &str,
    ) -> Result<(), StoreError>;
}
