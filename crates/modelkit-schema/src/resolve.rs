//! Field kind resolution.
//!
//! Turns a user-chosen kind selection into a normalized field draft, given
//! snapshots of the current entity's fields and the datasource's model
//! list. Pure: no transport, no ambient state.

use crate::{
    error::ReferenceNotFound,
    model::{Field, FieldKind, ModelKind, ModelList, Relation},
    registry::{self, ScalarType},
};
use serde::{Deserialize, Serialize};

///
/// KindSelector
///
/// A parsed kind selection: a bare kind name, or a compound
/// `relation:<entity>` / `enum:<name>` form.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum KindSelector {
    Identifier,
    Scalar(ScalarType),
    Relation { entity: String },
    EnumRef { enum_name: String },
}

impl KindSelector {
    /// Parse a raw selector string.
    ///
    /// Compound targets (`relation:Customer`) are carried as data and
    /// checked by [`resolve_field_kind`]. A bare kind name outside the
    /// closed catalog is a caller bug and panics.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if let Some(entity) = raw.strip_prefix("relation:") {
            return Self::Relation {
                entity: entity.to_string(),
            };
        }
        if let Some(enum_name) = raw.strip_prefix("enum:") {
            return Self::EnumRef {
                enum_name: enum_name.to_string(),
            };
        }

        match raw {
            "id" | "identifier" => Self::Identifier,
            other => ScalarType::from_name(other).map_or_else(
                || panic!("unknown field kind '{other}': the kind catalog is closed"),
                Self::Scalar,
            ),
        }
    }
}

/// Resolve a kind selection into a normalized field.
///
/// `name` and `comment` survive a kind change, as do the kind-agnostic
/// `unique`/`nullable` flags. Everything typed against the previous kind
/// (default value, generator, validators, kind attributes) is discarded
/// and reseeded from the registry template.
///
/// For relation selectors the target must exist in `models` as an entity,
/// and `local_field` defaults to the current entity's identifier field if
/// one exists; it is left unset, never guessed, otherwise. The resolver
/// will happily produce a second identifier candidate; validation blocks
/// its persistence.
pub fn resolve_field_kind(
    field: &Field,
    selector: &KindSelector,
    current_fields: &[Field],
    models: &ModelList<'_>,
) -> Result<Field, ReferenceNotFound> {
    let kind = match selector {
        KindSelector::Relation { entity } => {
            if models.get_entity(entity).is_none() {
                return Err(ReferenceNotFound {
                    name: entity.clone(),
                    expected: ModelKind::Entity,
                });
            }

            FieldKind::Relation(seed_relation(entity, current_fields))
        }
        KindSelector::EnumRef { enum_name } => {
            if models.get_enum(enum_name).is_none() {
                return Err(ReferenceNotFound {
                    name: enum_name.clone(),
                    expected: ModelKind::Enum,
                });
            }

            registry::initial_attributes(selector)
        }
        KindSelector::Identifier | KindSelector::Scalar(_) => {
            registry::initial_attributes(selector)
        }
    };

    Ok(Field {
        name: field.name.clone(),
        kind,
        unique: field.unique,
        nullable: field.nullable,
        comment: field.comment.clone(),
        default: None,
        generator: None,
        validators: Vec::new(),
    })
}

// Seed a relation template, defaulting the local endpoint to the entity's
// identifier field when one already exists.
fn seed_relation(entity: &str, current_fields: &[Field]) -> Relation {
    let local_field = current_fields
        .iter()
        .find(|f| f.is_identifier())
        .map(|f| f.name.clone());

    Relation {
        to: entity.to_string(),
        local_field,
        foreign_field: None,
        multiple: false,
        cascade_delete: false,
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        model::{Model, ScalarKind},
        test_fixtures::{customer_entity, field, id_field, status_enum, string_field},
    };

    use super::*;

    fn snapshot() -> Vec<Model> {
        vec![
            Model::Entity(customer_entity()),
            Model::Enum(status_enum("status")),
        ]
    }

    #[test]
    fn parses_bare_and_compound_selectors() {
        assert_eq!(KindSelector::parse("id"), KindSelector::Identifier);
        assert_eq!(
            KindSelector::parse("decimal"),
            KindSelector::Scalar(ScalarType::Decimal)
        );
        assert_eq!(
            KindSelector::parse("relation:customer"),
            KindSelector::Relation {
                entity: "customer".to_string()
            }
        );
        assert_eq!(
            KindSelector::parse("enum:status"),
            KindSelector::EnumRef {
                enum_name: "status".to_string()
            }
        );
    }

    #[test]
    #[should_panic(expected = "unknown field kind 'uuid'")]
    fn unknown_bare_kind_panics() {
        let _ = KindSelector::parse("uuid");
    }

    #[test]
    fn relation_resolves_iff_entity_exists() {
        let models = snapshot();
        let list = ModelList::new(&models);
        let draft = field("owner");

        let resolved = resolve_field_kind(
            &draft,
            &KindSelector::parse("relation:customer"),
            &[],
            &list,
        );
        assert!(resolved.is_ok());

        let missing = resolve_field_kind(
            &draft,
            &KindSelector::parse("relation:invoice"),
            &[],
            &list,
        )
        .unwrap_err();
        assert_eq!(missing.name, "invoice");
        assert_eq!(missing.expected, ModelKind::Entity);
    }

    #[test]
    fn enum_ref_does_not_resolve_against_entity_of_same_name() {
        let models = vec![Model::Entity(customer_entity())];
        let list = ModelList::new(&models);

        let err = resolve_field_kind(
            &field("state"),
            &KindSelector::parse("enum:customer"),
            &[],
            &list,
        )
        .unwrap_err();
        assert_eq!(err.expected, ModelKind::Enum);
    }

    #[test]
    fn kind_change_preserves_name_and_comment_and_swaps_attributes() {
        let models = snapshot();
        let list = ModelList::new(&models);

        let mut draft = string_field("owner");
        draft.comment = Some("who holds it".to_string());
        draft.unique = true;

        let resolved = resolve_field_kind(
            &draft,
            &KindSelector::parse("relation:customer"),
            &[id_field("id")],
            &list,
        )
        .unwrap();

        assert_eq!(resolved.name, "owner");
        assert_eq!(resolved.comment.as_deref(), Some("who holds it"));
        assert!(resolved.unique);

        // String-specific attributes are gone; relation attributes are in.
        let FieldKind::Relation(relation) = &resolved.kind else {
            panic!("expected relation kind");
        };
        assert_eq!(relation.to, "customer");
        assert_eq!(relation.local_field.as_deref(), Some("id"));
        assert!(relation.foreign_field.is_none());
    }

    #[test]
    fn local_field_stays_unset_without_an_identifier() {
        let models = snapshot();
        let list = ModelList::new(&models);

        let resolved = resolve_field_kind(
            &field("owner"),
            &KindSelector::parse("relation:customer"),
            &[string_field("label")],
            &list,
        )
        .unwrap();

        let FieldKind::Relation(relation) = &resolved.kind else {
            panic!("expected relation kind");
        };
        assert!(relation.local_field.is_none());
    }

    #[test]
    fn scalar_resolution_discards_typed_attachments() {
        let models = snapshot();
        let list = ModelList::new(&models);

        let mut draft = string_field("score");
        draft.default = Some(crate::model::Value::Text("n/a".to_string()));

        let resolved =
            resolve_field_kind(&draft, &KindSelector::parse("int"), &[], &list).unwrap();

        assert_eq!(resolved.kind, FieldKind::Scalar(ScalarKind::Int));
        assert!(resolved.default.is_none());
        assert!(resolved.validators.is_empty());
    }
}
