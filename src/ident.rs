//! SQL identifier validation
//!
//! Table and column names are spliced into SQL text, so they are checked
//! once when a model is defined. Only plain identifiers matching
//! `[A-Za-z_][A-Za-z0-9_]*` are accepted; dotted names are not supported.
//! Builders always emit names double-quoted, so keywords such as `order`
//! work as column names.

use crate::error::Error;
use crate::error::Result;

pub(crate) fn is_valid(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Validates `name` and returns it as an owned identifier.
pub(crate) fn parse(name: &str) -> Result<String> {
    if is_valid(name) { Ok(name.to_string()) } else { Err(Error::InvalidIdentifier(name.to_string())) }
}

/// Renders `name` as a double-quoted SQL identifier, doubling any embedded
/// quote.
pub(crate) fn quote(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    out.push('"');
    for c in name.chars() {
        if c == '"' {
            out.push('"');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// Quotes each name and joins them with `, `.
pub(crate) fn quote_list<S: AsRef<str>>(names: &[S]) -> String {
    names.iter().map(|n| quote(n.as_ref())).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_identifiers() {
        for name in ["users", "_private", "user_id", "Table2", "a"] {
            assert!(is_valid(name), "{name} should be valid");
        }
    }

    #[test]
    fn test_rejects_empty() {
        assert!(!is_valid(""));
        assert!(matches!(parse(""), Err(Error::InvalidIdentifier(_))));
    }

    #[test]
    fn test_rejects_leading_digit() {
        assert!(!is_valid("1users"));
    }

    #[test]
    fn test_rejects_sql_fragments() {
        for name in ["users; DROP TABLE users", "name = 1 OR 1", "a.b", "\"quoted\"", "id--", "na me"] {
            assert!(!is_valid(name), "{name} should be rejected");
        }
    }

    #[test]
    fn test_rejects_non_ascii() {
        assert!(!is_valid("naïve"));
    }

    #[test]
    fn test_parse_returns_owned_name() {
        assert_eq!(parse("email").unwrap(), "email");
    }

    #[test]
    fn test_quote_wraps_keywords() {
        assert_eq!(quote("order"), "\"order\"");
        assert_eq!(quote("select"), "\"select\"");
    }

    #[test]
    fn test_quote_escapes_embedded_quote() {
        assert_eq!(quote("we\"ird"), "\"we\"\"ird\"");
    }

    #[test]
    fn test_quote_list() {
        let columns = vec!["id".to_string(), "order".to_string()];
        assert_eq!(quote_list(&columns), "\"id\", \"order\"");
    }
}
