//! Typed parsing of path and query parameters
//!
//! Every numeric parameter goes through [`parse_param`], so a value that is
//! not a 64-bit integer always becomes a 400 with no further validation.
//! Negative or very large values are passed through untouched.

use crate::error::{Result, ServerError};

/// Parse `raw` as an `i64`, naming `field` in the error
pub fn parse_param(field: &str, raw: &str) -> Result<i64> {
    raw.parse::<i64>()
        .map_err(|_| ServerError::BadRequest(format!("{} must be an integer, got {:?}", field, raw)))
}

/// Like [`parse_param`], treating a missing value as unparsable
pub fn required_param(field: &str, raw: Option<&str>) -> Result<i64> {
    let raw = raw.ok_or_else(|| ServerError::BadRequest(format!("{} is required", field)))?;
    parse_param(field, raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_integers() {
        assert_eq!(parse_param("id", "42").unwrap(), 42);
        assert_eq!(parse_param("id", "-7").unwrap(), -7);
        assert_eq!(parse_param("id", "+3").unwrap(), 3);
        assert_eq!(
            parse_param("id", "9223372036854775807").unwrap(),
            i64::MAX
        );
    }

    #[test]
    fn test_rejects_non_numeric() {
        for raw in ["abc", "", "1.5", " 1", "1 ", "0x10", "9223372036854775808"] {
            assert!(
                matches!(parse_param("id", raw), Err(ServerError::BadRequest(_))),
                "{:?} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_missing_is_bad_request() {
        assert!(matches!(
            required_param("start", None),
            Err(ServerError::BadRequest(_))
        ));
        assert_eq!(required_param("start", Some("5")).unwrap(), 5);
    }
}
