//! Equated Monthly Installment (EMI)
//!
//! Fixed periodic payment fully amortizing a loan over its term.

use crate::error::{OmnicalcError, Result};
use crate::types::round_dp;
use serde::{Deserialize, Serialize};

/// Loan input terms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: f64,
    /// Annual interest rate in percent, e.g. 10.0 for 10%
    pub annual_rate_percent: f64,
    pub term_months: u32,
}

impl LoanTerms {
    pub fn new(principal: f64, annual_rate_percent: f64, term_months: u32) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term_months,
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.principal.is_finite() || self.principal <= 0.0 {
            return Err(OmnicalcError::InvalidInput(format!(
                "principal must be positive, got: {}",
                self.principal
            )));
        }
        if !self.annual_rate_percent.is_finite() || self.annual_rate_percent < 0.0 {
            return Err(OmnicalcError::InvalidInput(format!(
                "annual rate must be non-negative, got: {}",
                self.annual_rate_percent
            )));
        }
        if self.term_months == 0 {
            return Err(OmnicalcError::InvalidInput(
                "term must be at least one month".to_string(),
            ));
        }
        Ok(())
    }
}

/// EMI computation result, all figures rounded to 2 fractional digits
///
/// Totals derive from the rounded installment so the three figures are
/// mutually consistent as displayed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmiBreakdown {
    pub installment: f64,
    pub total_interest: f64,
    pub total_payment: f64,
}

/// Compute the monthly installment and totals for a loan
///
/// `installment = P * r * (1+r)^n / ((1+r)^n - 1)` with the monthly rate
/// `r = annual/100/12`. A zero rate would divide by zero, so it is
/// special-cased to straight division of the principal.
pub fn compute_emi(terms: &LoanTerms) -> Result<EmiBreakdown> {
    terms.validate()?;

    let n = f64::from(terms.term_months);
    let monthly_rate = terms.annual_rate_percent / 100.0 / 12.0;

    let installment = if monthly_rate == 0.0 {
        terms.principal / n
    } else {
        let growth = (1.0 + monthly_rate).powf(n);
        terms.principal * monthly_rate * growth / (growth - 1.0)
    };

    // Extreme terms overflow the compounding factor to inf, turning the
    // quotient into NaN; classify instead of leaking it.
    if !installment.is_finite() {
        return Err(OmnicalcError::InvalidInput(format!(
            "terms produce a non-finite installment: {:?}",
            terms
        )));
    }

    let installment = round_dp(installment, 2);
    let total_payment = round_dp(installment * n, 2);
    let total_interest = round_dp(total_payment - terms.principal, 2);

    Ok(EmiBreakdown {
        installment,
        total_interest,
        total_payment,
    })
}
