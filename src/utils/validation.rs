use crate::utils::error::{ChangeError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Reads the integer at the start of `raw`, ignoring whatever follows it.
///
/// Leading whitespace and one `+`/`-` sign are accepted, so `" 7 "` is 7,
/// `"10abc"` is 10 and `"3.5"` is 3. Returns `None` when no digit follows the
/// sign or the digits do not fit in an `i64`.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let text = raw.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Parses a raw amount string into a positive whole number of minor units.
///
/// Only the leading integer counts (`"12abc"` is 12); a missing, non-numeric
/// or non-positive amount is rejected with [`ChangeError::InvalidAmount`].
pub fn parse_amount(raw: &str) -> Result<i64> {
    match parse_leading_int(raw) {
        Some(value) if value > 0 => Ok(value),
        _ => Err(ChangeError::InvalidAmount {
            input: raw.to_string(),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: i64, min_value: i64) -> Result<()> {
    if value < min_value {
        return Err(ChangeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ChangeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ChangeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.iter().any(|candidate| candidate.eq_ignore_ascii_case(value)) {
        return Ok(());
    }
    Err(ChangeError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("87").unwrap(), 87);
        assert_eq!(parse_amount("  250 ").unwrap(), 250);
        assert!(matches!(
            parse_amount("0"),
            Err(ChangeError::InvalidAmount { .. })
        ));
        assert!(matches!(
            parse_amount("-5"),
            Err(ChangeError::InvalidAmount { .. })
        ));
        assert!(matches!(
            parse_amount("abc"),
            Err(ChangeError::InvalidAmount { .. })
        ));
        assert!(matches!(
            parse_amount(""),
            Err(ChangeError::InvalidAmount { .. })
        ));
        assert_eq!(parse_amount("8.7").unwrap(), 8);
        assert_eq!(parse_amount("12abc").unwrap(), 12);
        assert!(parse_amount("-").is_err());
        assert!(parse_amount("99999999999999999999").is_err());
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("10abc"), Some(10));
        assert_eq!(parse_leading_int("3.5"), Some(3));
        assert_eq!(parse_leading_int(" 7 "), Some(7));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("+4"), Some(4));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("- 3"), None);
        assert_eq!(parse_leading_int(""), None);
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("max_amount", 5, 1).is_ok());
        assert!(validate_positive_number("max_amount", 0, 1).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("delay_ms", 600u64, 0, 10_000).is_ok());
        assert!(validate_range("delay_ms", 10_001u64, 0, 10_000).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("format", "JSON", &["text", "json", "csv"]).is_ok());
        assert!(validate_one_of("format", "xml", &["text", "json", "csv"]).is_err());
        assert!(validate_non_empty_string("currency", "  ").is_err());
    }
}
