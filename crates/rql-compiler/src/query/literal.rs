//! Quoting and escaping of literals and identifiers.
//!
//! Every value that ends up inside a SQL fragment passes through one of these
//! functions; nothing from the AST is spliced in raw.

use crate::error::RqlError;

/// Escape character used in generated `LIKE ... ESCAPE` clauses.
pub const LIKE_ESCAPE: char = '\\';

/// Wraps `value` in `quote`, doubling embedded quotes. With `escape_backslash`
/// backslashes are doubled as well, for engines that treat `\` as an escape
/// inside string literals.
pub fn quote_string(value: &str, quote: char, escape_backslash: bool) -> Result<String, RqlError> {
    if value.contains('\0') {
        return Err(RqlError::invalid_literal(value, "contains a NUL character"));
    }

    let mut out = String::with_capacity(value.len() + 2);
    out.push(quote);
    for c in value.chars() {
        if c == quote {
            out.push(quote);
        } else if escape_backslash && c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push(quote);
    Ok(out)
}

/// Escapes `LIKE` wildcards so the value only matches itself.
pub fn escape_like(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if c == LIKE_ESCAPE || c == '%' || c == '_' {
            out.push(LIKE_ESCAPE);
        }
        out.push(c);
    }
    out
}

/// Parses an integer list element and re-emits it in canonical form.
pub fn integer_literal(raw: &str) -> Result<String, RqlError> {
    raw.trim()
        .parse::<i64>()
        .map(|n| n.to_string())
        .map_err(|_| RqlError::invalid_literal(raw, "not a 64-bit integer"))
}

/// Accepts a row count or offset that fits a signed 64-bit integer.
pub fn bigint_literal(value: u64) -> Result<String, RqlError> {
    i64::try_from(value)
        .map(|n| n.to_string())
        .map_err(|_| RqlError::invalid_literal(value.to_string(), "exceeds the bigint range"))
}

/// `-?digits(.digits)?([eE][+-]?digits)?`
pub fn is_numeric_literal(raw: &str) -> bool {
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    let unsigned = raw.strip_prefix('-').unwrap_or(raw);
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(pos) => (&unsigned[..pos], Some(&unsigned[pos + 1..])),
        None => (unsigned, None),
    };
    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (mantissa, None),
    };

    all_digits(int_part)
        && frac_part.is_none_or(all_digits)
        && exponent.is_none_or(|e| all_digits(e.strip_prefix(['+', '-']).unwrap_or(e)))
}

/// Parses the boolean keywords accepted as plain values.
pub fn parse_boolean(raw: &str) -> Option<bool> {
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_plain_identifier(ident: &str) -> bool {
    let mut chars = ident.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Quotes each dot-separated segment of `ident` that is not a plain name.
/// An empty name or an empty segment cannot be expressed as an identifier.
pub fn quote_identifier(ident: &str, open: char, close: char) -> Result<String, RqlError> {
    ident
        .split('.')
        .map(|segment| {
            if segment.is_empty() {
                Err(RqlError::invalid_literal(ident, "empty identifier"))
            } else if is_plain_identifier(segment) {
                Ok(segment.to_string())
            } else {
                let mut quoted = String::with_capacity(segment.len() + 2);
                quoted.push(open);
                for c in segment.chars() {
                    if c == close {
                        quoted.push(close);
                    }
                    quoted.push(c);
                }
                quoted.push(close);
                Ok(quoted)
            }
        })
        .collect::<Result<Vec<_>, _>>()
        .map(|segments| segments.join("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_string_doubles_quotes() {
        assert_eq!(quote_string("O'Hara", '\'', false).unwrap(), "'O''Hara'");
        assert_eq!(quote_string(r"a\b", '\'', false).unwrap(), r"'a\b'");
        assert_eq!(quote_string(r"a\b", '\'', true).unwrap(), r"'a\\b'");
    }

    #[test]
    fn test_quote_string_rejects_nul() {
        let err = quote_string("a\0b", '\'', false).unwrap_err();
        assert!(matches!(err, RqlError::InvalidLiteral { .. }));
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("100%_done"), r"100\%\_done");
        assert_eq!(escape_like(r"c:\tmp"), r"c:\\tmp");
        assert_eq!(escape_like("plain"), "plain");
    }

    #[test]
    fn test_integer_literal() {
        assert_eq!(integer_literal(" 42 ").unwrap(), "42");
        assert_eq!(integer_literal("-7").unwrap(), "-7");
        assert_eq!(integer_literal("+7").unwrap(), "7");
        assert!(integer_literal("1,000").is_err());
        assert!(integer_literal("1; DROP TABLE x").is_err());
    }

    #[test]
    fn test_numeric_literal() {
        for ok in ["0", "42", "-3.14", "1e10", "2.5E-3"] {
            assert!(is_numeric_literal(ok), "{ok}");
        }
        for bad in ["", "-", "1.", ".5", "1e", "NaN", "inf", "1 OR 1=1", "0x10"] {
            assert!(!is_numeric_literal(bad), "{bad}");
        }
    }

    #[test]
    fn test_parse_boolean() {
        assert_eq!(parse_boolean("TRUE"), Some(true));
        assert_eq!(parse_boolean("false"), Some(false));
        assert_eq!(parse_boolean("yes"), None);
    }

    #[test]
    fn test_quote_identifier() {
        assert_eq!(quote_identifier("name", '"', '"').unwrap(), "name");
        assert_eq!(quote_identifier("c.name", '"', '"').unwrap(), "c.name");
        assert_eq!(quote_identifier("first name", '"', '"').unwrap(), r#""first name""#);
        assert_eq!(quote_identifier("t.order date", '`', '`').unwrap(), "t.`order date`");
        assert_eq!(quote_identifier(r#"a"b"#, '"', '"').unwrap(), r#""a""b""#);
    }

    #[test]
    fn test_quote_identifier_rejects_empty_segments() {
        for bad in ["", "a.", ".a", "a..b"] {
            assert!(
                matches!(
                    quote_identifier(bad, '"', '"'),
                    Err(RqlError::InvalidLiteral { .. })
                ),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_bigint_literal() {
        assert_eq!(bigint_literal(42).unwrap(), "42");
        assert_eq!(bigint_literal(i64::MAX as u64).unwrap(), i64::MAX.to_string());
        assert!(bigint_literal(i64::MAX as u64 + 1).is_err());
    }
}
