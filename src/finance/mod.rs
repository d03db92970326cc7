//! Financial calculators - loan amortization (EMI) and recurring
//! investment maturity (SIP)
//!
//! Pure closed-form arithmetic; no I/O, fully deterministic.

pub mod loan;
pub mod sip;

pub use loan::{compute_emi, EmiBreakdown, LoanTerms};
pub use sip::{compute_sip, InvestmentTerms};
