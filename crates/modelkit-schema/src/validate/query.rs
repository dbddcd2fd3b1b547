use crate::{
    err,
    error::{ErrorList, Target, ValidationError},
    model::NativeQuery,
};

/// Validate a native-query draft.
///
/// The statement must be non-empty (whitespace-only counts as empty).
/// Parameter binding happens at execution time and is out of scope, so
/// there is no further static rule.
pub fn validate_native_query(query: &NativeQuery) -> Result<NativeQuery, ValidationError> {
    let mut errs = ErrorList::new();

    if query.statement.trim().is_empty() {
        err!(errs, "statement must not be empty");
    }

    errs.result(Target::NativeQuery(query.name.clone()))?;

    Ok(query.clone())
}
