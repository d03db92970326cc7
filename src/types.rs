//! Shared numeric primitives

use crate::error::{OmnicalcError, Result};

/// Money/amount type
pub type Amount = f64;

/// Round to `digits` fractional digits
///
/// All public results go through this so displayed and tested values agree.
pub fn round_dp(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}

/// Parse a raw widget string into a positive finite amount
///
/// Rejects empty input, non-numeric input, non-finite values and
/// non-positive values with `InvalidAmount`.
pub fn parse_amount(input: &str) -> Result<Amount> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(OmnicalcError::InvalidAmount("empty input".to_string()));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| OmnicalcError::InvalidAmount(trimmed.to_string()))?;

    validate_amount(value)
}

/// Check that an already-parsed amount is finite and strictly positive
pub fn validate_amount(value: f64) -> Result<Amount> {
    if !value.is_finite() {
        return Err(OmnicalcError::InvalidAmount(format!(
            "amount must be finite, got: {}",
            value
        )));
    }
    if value <= 0.0 {
        return Err(OmnicalcError::InvalidAmount(format!(
            "amount must be positive, got: {}",
            value
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_dp() {
        assert_eq!(round_dp(1.23456789, 2), 1.23);
        assert_eq!(round_dp(1.235, 2), 1.24);
        assert_eq!(round_dp(3.2808398950131233, 6), 3.280840);
        assert_eq!(round_dp(100.0, 2), 100.0);
    }

    #[test]
    fn test_parse_amount_valid() {
        assert_eq!(parse_amount("100").unwrap(), 100.0);
        assert_eq!(parse_amount(" 1.5 ").unwrap(), 1.5);
    }

    #[test]
    fn test_parse_amount_invalid() {
        assert!(parse_amount("").is_err());
        assert!(parse_amount("   ").is_err());
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("NaN").is_err());
        assert!(parse_amount("inf").is_err());
        assert!(parse_amount("-5").is_err());
        assert!(parse_amount("0").is_err());
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount(f64::NAN).is_err());
        assert!(validate_amount(f64::INFINITY).is_err());
        assert!(validate_amount(-1.0).is_err());
        assert!(validate_amount(0.0).is_err());
        assert_eq!(validate_amount(2.5).unwrap(), 2.5);
    }
}
