use crate::utils::error::{CalcError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Parses operand text the way the keypad display holds it.
///
/// Surrounding whitespace is ignored. Non-numeric text and values that do
/// not parse to a finite number (`inf`, `NaN`) are rejected as invalid input.
pub fn parse_operand(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::invalid_input(text)),
    }
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_operand() {
        assert_eq!(parse_operand("12").unwrap(), 12.0);
        assert_eq!(parse_operand(" 3.5 ").unwrap(), 3.5);
        assert_eq!(parse_operand("-0.25").unwrap(), -0.25);
        assert_eq!(parse_operand("1.").unwrap(), 1.0);
    }

    #[test]
    fn test_parse_operand_rejects_garbage() {
        for text in ["", "abc", "1.2.3", "inf", "NaN", "1e999"] {
            match parse_operand(text) {
                Err(CalcError::InvalidInput { input }) => assert_eq!(input, text),
                other => panic!("expected InvalidInput for {:?}, got {:?}", text, other),
            }
        }
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("display.precision", 4, 0, 15).is_ok());
        assert!(validate_range("display.precision", 16, 0, 15).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("logging.level", "info", &LOG_LEVELS).is_ok());
        assert!(validate_one_of("logging.level", "loud", &LOG_LEVELS).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("display.default_text", "0").is_ok());
        assert!(validate_non_empty_string("display.default_text", "  ").is_err());
    }
}
