//! Native-query placeholder extraction.

/// Extract `${name}` placeholder names from a statement.
///
/// Single left-to-right pass. A token is `${`, one or more non-`}`
/// characters, then `}`. Names are deduplicated by first occurrence and
/// returned in first-seen order. Empty (`${}`) and unterminated
/// placeholders are ignored.
#[must_use]
pub fn extract_parameters(statement: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    let mut rest = statement;

    while let Some(start) = rest.find("${") {
        let after = &rest[start + 2..];

        let Some(end) = after.find('}') else {
            break;
        };

        let name = &after[..end];
        if !name.is_empty() && !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }

        rest = &after[end + 1..];
    }

    names
}
