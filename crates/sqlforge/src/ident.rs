//! Identifier and raw-literal validation.
//!
//! Parameter names and alias names must match `[A-Za-z_][A-Za-z0-9_]*`;
//! raw numeric literal text must match `-?digits(.digits)?`. Both checks run
//! at construction time so a bad name never reaches the renderer.

use crate::error::{SqlError, SqlResult};

/// Validate a bare SQL identifier (no quoting, no dots).
pub(crate) fn ensure_identifier(name: &str) -> SqlResult<()> {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return Err(SqlError::InvalidIdentifier(name.to_string())),
    }
    if chars.all(|c| c == '_' || c.is_ascii_alphanumeric()) {
        Ok(())
    } else {
        Err(SqlError::InvalidIdentifier(name.to_string()))
    }
}

/// Validate raw numeric literal text: an optional sign, an integer part, and
/// an optional fractional part.
pub(crate) fn ensure_numeric(text: &str) -> SqlResult<()> {
    let body = text.strip_prefix('-').unwrap_or(text);
    let (int_part, frac_part) = match body.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (body, None),
    };
    let digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    if digits(int_part) && frac_part.is_none_or(digits) {
        Ok(())
    } else {
        Err(SqlError::InvalidLiteral(text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_simple() {
        assert!(ensure_identifier("email").is_ok());
        assert!(ensure_identifier("_hidden").is_ok());
        assert!(ensure_identifier("order_count2").is_ok());
    }

    #[test]
    fn identifier_rejects_empty() {
        assert!(ensure_identifier("").is_err());
    }

    #[test]
    fn identifier_rejects_leading_digit() {
        assert!(ensure_identifier("1email").is_err());
    }

    #[test]
    fn identifier_rejects_punctuation() {
        assert!(ensure_identifier("e-mail").is_err());
        assert!(ensure_identifier("a.b").is_err());
        assert!(ensure_identifier("name ").is_err());
    }

    #[test]
    fn numeric_integers_and_decimals() {
        assert!(ensure_numeric("0").is_ok());
        assert!(ensure_numeric("42").is_ok());
        assert!(ensure_numeric("-1").is_ok());
        assert!(ensure_numeric("3.14").is_ok());
        assert!(ensure_numeric("-0.5").is_ok());
    }

    #[test]
    fn numeric_rejects_malformed() {
        assert!(ensure_numeric("").is_err());
        assert!(ensure_numeric(".5").is_err());
        assert!(ensure_numeric("1.").is_err());
        assert!(ensure_numeric("1.2.3").is_err());
        assert!(ensure_numeric("1e5").is_err());
        assert!(ensure_numeric("abc").is_err());
    }
}
