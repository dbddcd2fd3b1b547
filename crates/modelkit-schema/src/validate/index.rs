use crate::{
    err,
    error::{ConflictError, ErrorList, Target, ValidationError},
    model::{Field, Index},
};

/// Validate an index draft against the owning entity's fields and the
/// entity's other indexes.
///
/// `other_indexes` must exclude the index under edit (exclusion is by
/// identity, not by name, so renames keep working); the editor handles
/// that by position.
pub fn validate_index(
    index: &Index,
    entity_fields: &[Field],
    other_indexes: &[Index],
) -> Result<Index, ValidationError> {
    if other_indexes.iter().any(|i| i.name == index.name) {
        return Err(ConflictError::DuplicateIndex {
            name: index.name.clone(),
        }
        .into());
    }

    let mut errs = ErrorList::new();

    if index.fields.is_empty() {
        err!(errs, "index must cover at least one field");
    }

    for index_field in &index.fields {
        if !entity_fields.iter().any(|f| f.name == index_field.field) {
            err!(
                errs,
                "field '{}' does not exist on the entity",
                index_field.field
            );
        }
    }

    errs.result(Target::Index(index.name.clone()))?;

    Ok(index.clone())
}

#[cfg(test)]
mod tests {
    use crate::{
        model::{Direction, IndexField},
        test_fixtures::customer_entity,
    };

    use super::*;

    fn index(name: &str, fields: &[&str]) -> Index {
        Index {
            name: name.to_string(),
            fields: fields
                .iter()
                .map(|f| IndexField {
                    field: (*f).to_string(),
                    direction: Direction::Asc,
                })
                .collect(),
            unique: false,
        }
    }

    #[test]
    fn empty_field_list_is_invalid() {
        let entity = customer_entity();
        let err = validate_index(&index("by_nothing", &[]), &entity.fields, &[]).unwrap_err();
        assert!(matches!(err, ValidationError::Invalid { .. }));
    }

    #[test]
    fn unknown_field_is_invalid() {
        let entity = customer_entity();
        let err =
            validate_index(&index("by_ghost", &["ghost"]), &entity.fields, &[]).unwrap_err();
        assert!(err.to_string().contains("'ghost'"));
    }

    #[test]
    fn duplicate_name_is_a_conflict() {
        let entity = customer_entity();
        let err = validate_index(
            &index("by_email", &["email"]),
            &entity.fields,
            &entity.indexes,
        )
        .unwrap_err();

        assert_eq!(
            err,
            ValidationError::Conflict(ConflictError::DuplicateIndex {
                name: "by_email".to_string()
            })
        );
    }

    #[test]
    fn rename_passes_when_edited_index_is_excluded() {
        let entity = customer_entity();

        // Renaming by_email -> by_mail: the edited index is not in `other_indexes`.
        let renamed = index("by_mail", &["email"]);
        assert!(validate_index(&renamed, &entity.fields, &[]).is_ok());
    }

    #[test]
    fn multi_field_index_with_known_fields_passes() {
        let entity = customer_entity();
        let candidate = index("by_email_visits", &["email", "visits"]);

        let normalized =
            validate_index(&candidate, &entity.fields, &entity.indexes).unwrap();
        assert_eq!(normalized, candidate);
    }
}
