use crate::{
    err,
    error::{ErrorList, Target, ValidationError},
    model::Enum,
};
use std::collections::BTreeSet;

/// Validate an enum draft.
///
/// At least two elements, each non-empty after trimming, no duplicates
/// (case-sensitive). The normalized result carries the trimmed elements.
pub fn validate_enum(model: &Enum) -> Result<Enum, ValidationError> {
    let mut errs = ErrorList::new();

    let trimmed: Vec<String> = model
        .elements
        .iter()
        .map(|e| e.trim().to_string())
        .collect();

    if trimmed.len() < 2 {
        err!(errs, "enum needs at least two elements");
    }

    let mut seen = BTreeSet::new();
    for (position, element) in trimmed.iter().enumerate() {
        if element.is_empty() {
            err!(errs, "element {} is empty", position + 1);
        } else if !seen.insert(element.as_str()) {
            err!(errs, "duplicate element '{element}'");
        }
    }

    errs.result(Target::Enum(model.name.clone()))?;

    Ok(Enum {
        name: model.name.clone(),
        elements: trimmed,
        comment: model.comment.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_distinct_elements_pass() {
        let normalized = validate_enum(&Enum::new("status", ["on", "off"])).unwrap();
        assert_eq!(normalized.elements, vec!["on", "off"]);
    }

    #[test]
    fn fewer_than_two_elements_fail() {
        assert!(validate_enum(&Enum::new("status", ["only"])).is_err());
        assert!(validate_enum(&Enum::new("status", Vec::<String>::new())).is_err());
    }

    #[test]
    fn whitespace_only_element_fails() {
        let err = validate_enum(&Enum::new("status", ["on", "   "])).unwrap_err();
        assert!(err.to_string().contains("element 2 is empty"));
    }

    #[test]
    fn duplicates_are_case_sensitive() {
        // Different case is allowed...
        assert!(validate_enum(&Enum::new("status", ["On", "on"])).is_ok());

        // ...but equal trimmed values are not.
        let err = validate_enum(&Enum::new("status", ["on", " on "])).unwrap_err();
        assert!(err.to_string().contains("duplicate element 'on'"));
    }

    #[test]
    fn normalization_trims_elements() {
        let normalized = validate_enum(&Enum::new("status", [" on", "off "])).unwrap();
        assert_eq!(normalized.elements, vec!["on", "off"]);
    }
}
