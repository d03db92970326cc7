//! Systematic Investment Plan (SIP) maturity value
//!
//! Future value of a fixed monthly contribution at compound interest,
//! treated as an annuity-due: every contribution compounds for one extra
//! period compared to an ordinary annuity.

use crate::error::{OmnicalcError, Result};
use crate::types::round_dp;
use serde::{Deserialize, Serialize};

/// Recurring investment input terms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentTerms {
    pub monthly_contribution: f64,
    /// Annual interest rate in percent, e.g. 12.0 for 12%
    pub annual_rate_percent: f64,
    pub term_years: u32,
}

impl InvestmentTerms {
    pub fn new(monthly_contribution: f64, annual_rate_percent: f64, term_years: u32) -> Self {
        Self {
            monthly_contribution,
            annual_rate_percent,
            term_years,
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.monthly_contribution.is_finite() || self.monthly_contribution <= 0.0 {
            return Err(OmnicalcError::InvalidInput(format!(
                "monthly contribution must be positive, got: {}",
                self.monthly_contribution
            )));
        }
        if !self.annual_rate_percent.is_finite() || self.annual_rate_percent < 0.0 {
            return Err(OmnicalcError::InvalidInput(format!(
                "annual rate must be non-negative, got: {}",
                self.annual_rate_percent
            )));
        }
        if self.term_years == 0 {
            return Err(OmnicalcError::InvalidInput(
                "term must be at least one year".to_string(),
            ));
        }
        Ok(())
    }
}

/// Compute the maturity value of a recurring monthly investment
///
/// `FV = P * (((1+r)^n - 1) / r) * (1+r)` with the monthly rate
/// `r = annual/100/12` and `n = years * 12`. A zero rate reduces to the
/// plain sum of contributions. Result rounded to 2 fractional digits.
pub fn compute_sip(terms: &InvestmentTerms) -> Result<f64> {
    terms.validate()?;

    // Month count in f64 from the start; `term_years * 12` in u32 would
    // overflow for extreme terms.
    let n = f64::from(terms.term_years) * 12.0;
    let monthly_rate = terms.annual_rate_percent / 100.0 / 12.0;

    let future_value = if monthly_rate == 0.0 {
        terms.monthly_contribution * n
    } else {
        let growth = (1.0 + monthly_rate).powf(n);
        terms.monthly_contribution * ((growth - 1.0) / monthly_rate) * (1.0 + monthly_rate)
    };

    if !future_value.is_finite() {
        return Err(OmnicalcError::InvalidInput(format!(
            "terms produce a non-finite future value: {:?}",
            terms
        )));
    }

    Ok(round_dp(future_value, 2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_one_year_plan() {
        // 1000/month at 12% for a year: r = 0.01, n = 12.
        let fv = compute_sip(&InvestmentTerms::new(1000.0, 12.0, 1)).unwrap();
        assert_relative_eq!(fv, 12_809.33, epsilon = 0.01);
    }

    #[test]
    fn test_annuity_due_beats_plain_sum() {
        let fv = compute_sip(&InvestmentTerms::new(1000.0, 12.0, 1)).unwrap();
        // Must exceed the undiscounted contributions and the ordinary
        // annuity value (12682.50), since each payment compounds one
        // extra period.
        assert!(fv > 12_000.0);
        assert!(fv > 12_682.50);
    }

    #[test]
    fn test_zero_rate_plan() {
        let fv = compute_sip(&InvestmentTerms::new(500.0, 0.0, 2)).unwrap();
        assert_eq!(fv, 12_000.0);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            compute_sip(&InvestmentTerms::new(-1.0, 12.0, 1)).unwrap_err(),
            OmnicalcError::InvalidInput(_)
        ));
        assert!(matches!(
            compute_sip(&InvestmentTerms::new(0.0, 12.0, 1)).unwrap_err(),
            OmnicalcError::InvalidInput(_)
        ));
        assert!(matches!(
            compute_sip(&InvestmentTerms::new(1000.0, -1.0, 1)).unwrap_err(),
            OmnicalcError::InvalidInput(_)
        ));
        assert!(matches!(
            compute_sip(&InvestmentTerms::new(1000.0, 12.0, 0)).unwrap_err(),
            OmnicalcError::InvalidInput(_)
        ));
    }

    #[test]
    fn test_extreme_term_is_rejected_not_overflowed() {
        // 400M years: the month count exceeds u32::MAX and the compounding
        // factor exceeds f64 range; both must surface as a typed error.
        let err = compute_sip(&InvestmentTerms::new(1000.0, 12.0, 400_000_000)).unwrap_err();
        assert!(matches!(err, OmnicalcError::InvalidInput(_)));
    }

    #[test]
    fn test_longer_terms_grow_faster_than_linear() {
        let one = compute_sip(&InvestmentTerms::new(1000.0, 12.0, 1)).unwrap();
        let two = compute_sip(&InvestmentTerms::new(1000.0, 12.0, 2)).unwrap();
        assert!(two > 2.0 * one);
    }
}
