//! Draft-editing session.
//!
//! An [`EntityEditor`] holds the datasource name, the current model-list
//! snapshot, and an optional trace sink, and drives every edit through
//! resolve → validate → persist. The in-memory snapshot is replaced only
//! after the store confirms a write, never optimistically.

use crate::{
    store::{ModelStore, StoreError},
    trace::{PersistOp, SchemaTraceEvent, SchemaTraceSink},
};
use modelkit_schema::{
    error::{ReferenceNotFound, ValidationError},
    model::{Entity, Enum, Field, Index, Model, ModelList, NativeQuery},
    resolve::{KindSelector, resolve_field_kind},
    validate,
};
use thiserror::Error as ThisError;

///
/// EditorError
///

#[derive(Debug, ThisError)]
pub enum EditorError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Reference(#[from] ReferenceNotFound),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("no entity named '{name}' in the current snapshot")]
    UnknownEntity { name: String },
}

///
/// EntityEditor
///
/// The model-list snapshot is caller-visible state: a stale snapshot can
/// validate a reference that no longer exists server-side, so callers
/// should [`refresh`](Self::refresh) before resolving relation or enum
/// references. That race is accepted, not remedied here.
///

pub struct EntityEditor<S> {
    store: S,
    datasource: String,
    models: Vec<Model>,
    trace: Option<Box<dyn SchemaTraceSink>>,
}

impl<S: ModelStore> EntityEditor<S> {
    #[must_use]
    pub fn new(store: S, datasource: impl Into<String>) -> Self {
        Self {
            store,
            datasource: datasource.into(),
            models: Vec::new(),
            trace: None,
        }
    }

    #[must_use]
    pub fn with_trace(mut self, sink: Box<dyn SchemaTraceSink>) -> Self {
        self.trace = Some(sink);
        self
    }

    /// Re-snapshot the datasource's model list.
    pub async fn refresh(&mut self) -> Result<(), EditorError> {
        self.models = self.store.list_models(&self.datasource).await?;
        Ok(())
    }

    #[must_use]
    pub fn models(&self) -> ModelList<'_> {
        ModelList::new(&self.models)
    }

    fn entity(&self, name: &str) -> Result<&Entity, EditorError> {
        self.models().get_entity(name).ok_or_else(|| {
            EditorError::UnknownEntity {
                name: name.to_string(),
            }
        })
    }

    /// Resolve a kind selection for a field of `entity` into a new draft.
    pub fn change_field_kind(
        &self,
        entity: &str,
        field: &Field,
        selector: &KindSelector,
    ) -> Result<Field, EditorError> {
        let current_fields = &self.entity(entity)?.fields;

        match resolve_field_kind(field, selector, current_fields, &self.models()) {
            Ok(resolved) => {
                self.trace(SchemaTraceEvent::Resolved {
                    field: resolved.name.clone(),
                    concrete_type: resolved.concrete_type(),
                });
                Ok(resolved)
            }
            Err(err) => {
                self.trace_rejected(&field.name, &err);
                Err(err.into())
            }
        }
    }

    /// Validate and persist a field draft. `original` is the field's name
    /// before the edit; `None` creates a new field.
    pub async fn save_field(
        &mut self,
        entity: &str,
        original: Option<&str>,
        field: Field,
    ) -> Result<Field, EditorError> {
        let validated = {
            let owner = self.entity(entity)?;
            let siblings: Vec<Field> = owner
                .fields
                .iter()
                .filter(|f| Some(f.name.as_str()) != original)
                .cloned()
                .collect();

            match validate::validate_field(&field, &siblings, &self.models()) {
                Ok(validated) => validated,
                Err(err) => {
                    self.trace_rejected(&field.name, &err);
                    return Err(err.into());
                }
            }
        };

        let (op, persisted) = match original {
            Some(original) => (
                PersistOp::Modify,
                self.store
                    .modify_field(&self.datasource, entity, original, validated)
                    .await?,
            ),
            None => (
                PersistOp::Create,
                self.store
                    .create_field(&self.datasource, entity, validated)
                    .await?,
            ),
        };

        self.apply_field(entity, original, persisted.clone());
        self.trace(SchemaTraceEvent::Persisted {
            op,
            name: persisted.name.clone(),
        });

        Ok(persisted)
    }

    /// Validate and persist an index draft. `original` is the index name
    /// before the edit; excluding it from the collision set is what lets
    /// renames through.
    pub async fn save_index(
        &mut self,
        entity: &str,
        original: Option<&str>,
        index: Index,
    ) -> Result<Index, EditorError> {
        let validated = {
            let owner = self.entity(entity)?;
            let others: Vec<Index> = owner
                .indexes
                .iter()
                .filter(|i| Some(i.name.as_str()) != original)
                .cloned()
                .collect();

            match validate::validate_index(&index, &owner.fields, &others) {
                Ok(validated) => validated,
                Err(err) => {
                    self.trace_rejected(&index.name, &err);
                    return Err(err.into());
                }
            }
        };

        let (op, persisted) = match original {
            Some(original) => (
                PersistOp::Modify,
                self.store
                    .modify_index(&self.datasource, entity, original, validated)
                    .await?,
            ),
            None => (
                PersistOp::Create,
                self.store
                    .create_index(&self.datasource, entity, validated)
                    .await?,
            ),
        };

        self.apply_index(entity, original, persisted.clone());
        self.trace(SchemaTraceEvent::Persisted {
            op,
            name: persisted.name.clone(),
        });

        Ok(persisted)
    }

    /// Validate and persist a whole new entity.
    pub async fn create_entity(&mut self, entity: Entity) -> Result<Entity, EditorError> {
        let validated = match validate::validate_entity(&entity, &self.models()) {
            Ok(validated) => validated,
            Err(err) => {
                self.trace_rejected(&entity.name, &err);
                return Err(err.into());
            }
        };

        let persisted = self
            .store
            .create_model(&self.datasource, Model::Entity(validated))
            .await?;
        let name = persisted.name().to_string();

        self.models.push(persisted.clone());
        self.trace(SchemaTraceEvent::Persisted {
            op: PersistOp::Create,
            name,
        });

        match persisted {
            Model::Entity(entity) => Ok(entity),
            _ => Err(StoreError::new("store returned a different model kind").into()),
        }
    }

    /// Validate and persist an enum draft.
    pub async fn save_enum(
        &mut self,
        original: Option<&str>,
        model: Enum,
    ) -> Result<Enum, EditorError> {
        let validated = match validate::validate_enum(&model) {
            Ok(validated) => validated,
            Err(err) => {
                self.trace_rejected(&model.name, &err);
                return Err(err.into());
            }
        };

        let persisted = self.persist_model(original, Model::Enum(validated)).await?;

        match persisted {
            Model::Enum(model) => Ok(model),
            _ => Err(StoreError::new("store returned a different model kind").into()),
        }
    }

    /// Validate and persist a native-query draft.
    pub async fn save_native_query(
        &mut self,
        original: Option<&str>,
        query: NativeQuery,
    ) -> Result<NativeQuery, EditorError> {
        let validated = match validate::validate_native_query(&query) {
            Ok(validated) => validated,
            Err(err) => {
                self.trace_rejected(&query.name, &err);
                return Err(err.into());
            }
        };

        let persisted = self
            .persist_model(original, Model::NativeQuery(validated))
            .await?;

        match persisted {
            Model::NativeQuery(query) => Ok(query),
            _ => Err(StoreError::new("store returned a different model kind").into()),
        }
    }

    /// Drop a model. Relation/EnumRef fields elsewhere that pointed at it
    /// are left as they are; re-validating them will surface the dangling
    /// reference.
    pub async fn drop_model(&mut self, name: &str) -> Result<(), EditorError> {
        self.store.drop_model(&self.datasource, name).await?;

        self.models.retain(|m| m.name() != name);
        self.trace(SchemaTraceEvent::Persisted {
            op: PersistOp::Drop,
            name: name.to_string(),
        });

        Ok(())
    }

    pub async fn drop_field(&mut self, entity: &str, field: &str) -> Result<(), EditorError> {
        self.entity(entity)?;
        self.store
            .drop_field(&self.datasource, entity, field)
            .await?;

        if let Some(owner) = self.entity_mut(entity) {
            owner.fields.retain(|f| f.name != field);
        }
        self.trace(SchemaTraceEvent::Persisted {
            op: PersistOp::Drop,
            name: field.to_string(),
        });

        Ok(())
    }

    pub async fn drop_index(&mut self, entity: &str, index: &str) -> Result<(), EditorError> {
        self.entity(entity)?;
        self.store
            .drop_index(&self.datasource, entity, index)
            .await?;

        if let Some(owner) = self.entity_mut(entity) {
            owner.indexes.retain(|i| i.name != index);
        }
        self.trace(SchemaTraceEvent::Persisted {
            op: PersistOp::Drop,
            name: index.to_string(),
        });

        Ok(())
    }

    async fn persist_model(
        &mut self,
        original: Option<&str>,
        model: Model,
    ) -> Result<Model, EditorError> {
        let (op, persisted) = match original {
            Some(original) => (
                PersistOp::Modify,
                self.store
                    .modify_model(&self.datasource, original, model)
                    .await?,
            ),
            None => (
                PersistOp::Create,
                self.store.create_model(&self.datasource, model).await?,
            ),
        };

        match original {
            Some(original) => {
                if let Some(slot) = self.models.iter_mut().find(|m| m.name() == original) {
                    *slot = persisted.clone();
                }
            }
            None => self.models.push(persisted.clone()),
        }

        self.trace(SchemaTraceEvent::Persisted {
            op,
            name: persisted.name().to_string(),
        });

        Ok(persisted)
    }

    fn entity_mut(&mut self, name: &str) -> Option<&mut Entity> {
        self.models.iter_mut().find_map(|m| match m {
            Model::Entity(entity) if entity.name == name => Some(entity),
            _ => None,
        })
    }

    fn apply_field(&mut self, entity: &str, original: Option<&str>, field: Field) {
        let Some(owner) = self.entity_mut(entity) else {
            return;
        };

        match original.and_then(|o| owner.fields.iter().position(|f| f.name == o)) {
            Some(position) => owner.fields[position] = field,
            None => owner.fields.push(field),
        }
    }

    fn apply_index(&mut self, entity: &str, original: Option<&str>, index: Index) {
        let Some(owner) = self.entity_mut(entity) else {
            return;
        };

        match original.and_then(|o| owner.indexes.iter().position(|i| i.name == o)) {
            Some(position) => owner.indexes[position] = index,
            None => owner.indexes.push(index),
        }
    }

    fn trace(&self, event: SchemaTraceEvent) {
        if let Some(sink) = &self.trace {
            sink.on_event(event);
        }
    }

    fn trace_rejected(&self, target: &str, reason: &impl std::fmt::Display) {
        self.trace(SchemaTraceEvent::Rejected {
            target: target.to_string(),
            reason: reason.to_string(),
        });
    }
}
