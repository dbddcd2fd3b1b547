use crate::{
    err,
    error::{ConflictError, ErrorList, ReferenceNotFound, Target, ValidationError},
    model::{Field, FieldKind, ModelKind, ModelList, Relation, ScalarKind},
    registry,
};

/// Validate a field draft against its sibling fields and the datasource
/// model snapshot.
///
/// `entity_fields` must exclude the field under edit, so renames compare
/// against the right set. The normalized result forces identifier fields
/// to `unique = true, nullable = false` regardless of input, and is
/// idempotent: re-validating the output yields an identical field.
pub fn validate_field(
    field: &Field,
    entity_fields: &[Field],
    models: &ModelList<'_>,
) -> Result<Field, ValidationError> {
    // Closed-world conflicts come first so callers can branch on them.
    if !field.name.is_empty() && entity_fields.iter().any(|f| f.name == field.name) {
        return Err(ConflictError::DuplicateField {
            name: field.name.clone(),
        }
        .into());
    }

    if field.is_identifier()
        && let Some(existing) = entity_fields.iter().find(|f| f.is_identifier())
    {
        return Err(ConflictError::SecondIdentifier {
            existing: existing.name.clone(),
        }
        .into());
    }

    let mut errs = ErrorList::new();

    if field.name.trim().is_empty() {
        err!(errs, "name must not be empty");
    }

    match &field.kind {
        FieldKind::Relation(relation) => {
            validate_relation(relation, field, entity_fields, models, &mut errs)?;
        }
        FieldKind::EnumRef(enum_ref) => {
            if models.get_enum(&enum_ref.to).is_none() {
                return Err(ReferenceNotFound {
                    name: enum_ref.to.clone(),
                    expected: ModelKind::Enum,
                }
                .into());
            }
        }
        FieldKind::Scalar(ScalarKind::String { length }) => {
            if *length == 0 {
                err!(errs, "string length must be at least 1");
            }
        }
        FieldKind::Scalar(ScalarKind::Decimal { precision, scale }) => {
            if *precision == 0 {
                err!(errs, "decimal precision must be at least 1");
            }
            if scale > precision {
                err!(errs, "decimal scale {scale} exceeds precision {precision}");
            }
        }
        _ => {}
    }

    validate_attachments(field, &mut errs);

    errs.result(Target::Field(field.name.clone()))?;

    Ok(normalize(field))
}

// Relation endpoints must be set and exist on their respective sides.
fn validate_relation(
    relation: &Relation,
    field: &Field,
    entity_fields: &[Field],
    models: &ModelList<'_>,
    errs: &mut ErrorList,
) -> Result<(), ValidationError> {
    let Some(target) = models.get_entity(&relation.to) else {
        return Err(ReferenceNotFound {
            name: relation.to.clone(),
            expected: ModelKind::Entity,
        }
        .into());
    };

    match &relation.local_field {
        None => err!(errs, "relation is missing its local field"),
        Some(local) => {
            let exists =
                local == &field.name || entity_fields.iter().any(|f| &f.name == local);
            if !exists {
                err!(errs, "local field '{local}' does not exist on this entity");
            }
        }
    }

    match &relation.foreign_field {
        None => err!(errs, "relation is missing its foreign field"),
        Some(foreign) => {
            if target.get_field(foreign).is_none() {
                err!(
                    errs,
                    "foreign field '{foreign}' does not exist on entity '{}'",
                    target.name
                );
            }
        }
    }

    Ok(())
}

// Each attached validator must fit the kind's applicability table and
// carry bounds of the matching family.
fn validate_attachments(field: &Field, errs: &mut ErrorList) {
    let applicable = registry::applicable_rules(&field.kind);
    let temporal = registry::takes_temporal_bounds(&field.kind);

    for (position, validator) in field.validators.iter().enumerate() {
        let rule = validator.rule.kind();

        if !applicable.contains(&rule) {
            err!(
                errs,
                "validator {} ({rule:?}) does not apply to a {} field",
                position + 1,
                field.concrete_type()
            );
            continue;
        }

        if validator.message.trim().is_empty() {
            err!(errs, "validator {} is missing its message", position + 1);
        }

        for bound in validator.rule.bounds() {
            if bound.is_temporal() != temporal {
                err!(
                    errs,
                    "validator {} has a bound of the wrong type for a {} field",
                    position + 1,
                    field.concrete_type()
                );
            }
        }
    }
}

// Identifier flags are forced, everything else passes through as given.
fn normalize(field: &Field) -> Field {
    let mut normalized = field.clone();

    if normalized.is_identifier() {
        normalized.unique = true;
        normalized.nullable = false;
    }

    normalized
}
