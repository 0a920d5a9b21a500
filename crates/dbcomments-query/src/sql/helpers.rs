use sea_query::{PostgresQueryBuilder, QueryBuilder, Value};

use crate::error::QueryError;

/// Quote a Postgres identifier, doubling embedded double quotes.
pub fn quote_ident(ident: &str) -> Result<String, QueryError> {
    if ident.is_empty() {
        return Err(QueryError::EmptyIdentifier);
    }
    if ident.contains('\0') {
        return Err(QueryError::NulInIdentifier(ident.to_string()));
    }
    Ok(format!("\"{}\"", ident.replace('"', "\"\"")))
}

/// Render a string as an escaped Postgres literal.
///
/// Utility statements such as `COMMENT` take no server-side parameters, so
/// bound values are inlined with the query builder's escaping.
pub fn quote_literal(value: &str) -> String {
    PostgresQueryBuilder.value_to_string(&Value::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("users", "\"users\"")]
    #[case("People_Person", "\"People_Person\"")]
    #[case("weird\"name", "\"weird\"\"name\"")]
    #[case("with space", "\"with space\"")]
    fn test_quote_ident(#[case] ident: &str, #[case] expected: &str) {
        assert_eq!(quote_ident(ident).unwrap(), expected);
    }

    #[test]
    fn test_quote_ident_rejects_empty() {
        assert_eq!(quote_ident(""), Err(QueryError::EmptyIdentifier));
    }

    #[test]
    fn test_quote_ident_rejects_nul() {
        assert_eq!(
            quote_ident("a\0b"),
            Err(QueryError::NulInIdentifier("a\0b".into()))
        );
    }

    #[test]
    fn test_quote_literal_plain() {
        assert_eq!(quote_literal("Age | in years"), "'Age | in years'");
        assert_eq!(quote_literal(""), "''");
    }

    #[test]
    fn test_quote_literal_escapes_quotes() {
        let literal = quote_literal("it's; DROP TABLE users; --");
        assert!(literal.ends_with('\''));
        assert!(!literal.contains("'it's;"));
    }
}
