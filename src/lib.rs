//! # Omnicalc
//!
//! Unified conversion and financial-calculation engine: currency conversion
//! through a pluggable exchange-rate provider, table-driven unit conversion
//! (length, weight, volume, speed, temperature) and closed-form EMI/SIP
//! calculators.
//!
//! The crate is the computational core behind a conversion UI. It accepts
//! plain primitive inputs, returns a success value or a typed error, and has
//! no dependency on any rendering or event-dispatch technology.
//!
//! ## Example
//!
//! ```rust
//! use omnicalc::prelude::*;
//!
//! // Unit conversion: 100 cm -> m
//! let meters = units::convert(UnitFamily::Length, "cm", "m", 100.0).unwrap();
//! assert_eq!(meters, 1.0);
//!
//! // Loan installment for 100k at 10% over a year
//! let emi = compute_emi(&LoanTerms::new(100_000.0, 10.0, 12)).unwrap();
//! assert!(emi.installment > 8000.0);
//! ```

pub mod converter;
pub mod currency;
pub mod error;
pub mod finance;
pub mod rates;
pub mod types;
pub mod units;

pub mod prelude {
    //! Commonly used types and traits
    pub use crate::converter::{ConvertedAmount, CurrencyConverter, RequestGuard};
    pub use crate::currency::Currency;
    pub use crate::error::{OmnicalcError, Result};
    pub use crate::finance::{compute_emi, compute_sip, EmiBreakdown, InvestmentTerms, LoanTerms};
    pub use crate::rates::{InMemoryRateProvider, RateProvider};
    pub use crate::units::{self, TempUnit, UnitFamily};

    #[cfg(feature = "http")]
    pub use crate::rates::ExchangeHostProvider;
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_lib_compile() {
        // Smoke test to ensure library compiles
    }
}
