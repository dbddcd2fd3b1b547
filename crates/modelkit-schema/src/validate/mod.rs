//! Constraint validation.
//!
//! Every draft passes through here before persistence. Validators are
//! pure: the entity's sibling fields and the datasource model snapshot are
//! supplied as arguments. `Ok` carries the normalized descriptor; nothing
//! here is fatal to the process.

mod r#enum;
mod field;
mod index;
mod query;

pub use field::validate_field;
pub use index::validate_index;
pub use query::validate_native_query;
pub use r#enum::validate_enum;

use crate::{
    error::ValidationError,
    model::{Entity, ModelList},
};

/// Validate a whole entity draft before it is created.
///
/// Runs every field against its siblings and every index against the
/// others, so closed-world invariants (unique names, a single identifier)
/// hold across the entity.
pub fn validate_entity(
    entity: &Entity,
    models: &ModelList<'_>,
) -> Result<Entity, ValidationError> {
    let mut normalized = Entity {
        name: entity.name.clone(),
        fields: Vec::with_capacity(entity.fields.len()),
        indexes: Vec::with_capacity(entity.indexes.len()),
        comment: entity.comment.clone(),
    };

    for (position, field) in entity.fields.iter().enumerate() {
        let siblings: Vec<_> = entity
            .fields
            .iter()
            .enumerate()
            .filter(|(other, _)| *other != position)
            .map(|(_, f)| f.clone())
            .collect();

        normalized
            .fields
            .push(validate_field(field, &siblings, models)?);
    }

    for (position, index) in entity.indexes.iter().enumerate() {
        let others: Vec<_> = entity
            .indexes
            .iter()
            .enumerate()
            .filter(|(other, _)| *other != position)
            .map(|(_, i)| i.clone())
            .collect();

        normalized
            .indexes
            .push(validate_index(index, &entity.fields, &others)?);
    }

    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use crate::{
        error::{ConflictError, ValidationError},
        model::{Model, ModelList},
        test_fixtures::{customer_entity, id_field, string_field},
    };

    use super::*;

    #[test]
    fn valid_entity_passes_whole() {
        let entity = customer_entity();
        let models = vec![Model::Entity(entity.clone())];

        let normalized = validate_entity(&entity, &ModelList::new(&models)).unwrap();
        assert_eq!(normalized, entity);
    }

    #[test]
    fn second_identifier_is_rejected_at_entity_level() {
        let mut entity = customer_entity();
        entity.fields.push(id_field("other_id"));
        let models = vec![Model::Entity(customer_entity())];

        let err = validate_entity(&entity, &ModelList::new(&models)).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Conflict(ConflictError::SecondIdentifier { .. })
        ));
    }

    #[test]
    fn duplicate_field_names_are_rejected_at_entity_level() {
        let mut entity = customer_entity();
        entity.fields.push(string_field("email"));
        let models = vec![Model::Entity(customer_entity())];

        let err = validate_entity(&entity, &ModelList::new(&models)).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Conflict(ConflictError::DuplicateField { .. })
        ));
    }
}
