//! Python identifier rules.
//!
//! Package and namespace names end up as directories that Python imports,
//! so they must follow the lexical rules of a Python identifier and must not
//! collide with a keyword. Only ASCII identifiers are produced.

use crate::domain::error::{DomainError, DomainResult};

/// Python 3 reserved words (soft keywords such as `match` are allowed).
pub const RESERVED_WORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

/// Whether `name` is a legal, non-reserved Python identifier.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let starts_ok = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');

    starts_ok
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !RESERVED_WORDS.contains(&name)
}

/// Turn an arbitrary project name into a package identifier.
///
/// Surrounding whitespace is dropped, `-` and spaces become `_`, anything
/// outside `[_a-zA-Z0-9]` is removed and the result is lowercased.
///
/// # Errors
///
/// [`DomainError::InvalidIdentifier`] when the cleaned string still is not a
/// valid identifier (empty, leading digit, or a keyword such as `def`).
pub fn make_valid_identifier(name: &str) -> DomainResult<String> {
    let candidate: String = name
        .trim()
        .chars()
        .map(|c| if c == '-' || c == ' ' { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect::<String>()
        .to_ascii_lowercase();

    if is_valid_identifier(&candidate) {
        Ok(candidate)
    } else {
        Err(DomainError::invalid_identifier(
            name,
            "cannot be converted to a valid identifier",
        ))
    }
}

/// Expand a dotted namespace into every namespace package it implies.
///
/// `"com.blue_yonder"` yields `["com", "com.blue_yonder"]`.
pub fn prepare_namespace(namespace: &str) -> DomainResult<Vec<String>> {
    let mut prepared = Vec::new();
    let mut current = String::new();

    for segment in namespace.split('.') {
        if !is_valid_identifier(segment) {
            return Err(DomainError::invalid_identifier(
                namespace,
                format!("namespace segment '{segment}' is not a valid identifier"),
            ));
        }
        if !current.is_empty() {
            current.push('.');
        }
        current.push_str(segment);
        prepared.push(current.clone());
    }

    Ok(prepared)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_identifiers() {
        for bad in [
            "has whitespace",
            "has-hyphen",
            "has_special_char$",
            "1starts_with_digit",
            "",
            "def",
            "None",
        ] {
            assert!(!is_valid_identifier(bad), "accepted: {bad:?}");
        }
    }

    #[test]
    fn accepts_valid_identifiers() {
        for good in ["normal_variable_name", "_private_var", "_with_number1", "match"] {
            assert!(is_valid_identifier(good), "rejected: {good:?}");
        }
    }

    #[test]
    fn make_valid_identifier_cleans_names() {
        assert_eq!(make_valid_identifier("has whitespaces ").unwrap(), "has_whitespaces");
        assert_eq!(make_valid_identifier("has-hyphon").unwrap(), "has_hyphon");
        assert_eq!(make_valid_identifier("special chars%").unwrap(), "special_chars");
        assert_eq!(make_valid_identifier("UpperCase").unwrap(), "uppercase");
        assert_eq!(make_valid_identifier("my-project").unwrap(), "my_project");
    }

    #[test]
    fn make_valid_identifier_rejects_keywords() {
        let err = make_valid_identifier("def").unwrap_err();
        assert!(matches!(err, DomainError::InvalidIdentifier { ref name, .. } if name == "def"));
    }

    #[test]
    fn make_valid_identifier_rejects_leading_digit_and_empty() {
        assert!(make_valid_identifier("1st-project").is_err());
        assert!(make_valid_identifier("%%%").is_err());
    }

    #[test]
    fn derived_identifiers_are_valid_and_lowercase() {
        for name in ["My-Project", "Data Science Kit", "x", "Py3_Tools", "__dunder__"] {
            let id = make_valid_identifier(name).unwrap();
            assert!(is_valid_identifier(&id), "{name} -> {id}");
            assert_eq!(id, id.to_lowercase());
        }
    }

    #[test]
    fn prepare_namespace_expands_levels() {
        assert_eq!(prepare_namespace("com").unwrap(), vec!["com"]);
        assert_eq!(
            prepare_namespace("com.blue_yonder").unwrap(),
            vec!["com", "com.blue_yonder"]
        );
    }

    #[test]
    fn prepare_namespace_rejects_invalid_segment() {
        assert!(matches!(
            prepare_namespace("com.blue-yonder"),
            Err(DomainError::InvalidIdentifier { .. })
        ));
        assert!(prepare_namespace("com..x").is_err());
    }
}
