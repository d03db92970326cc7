//! Currency conversion front door
//!
//! Validates amounts, delegates the rate lookup to an injected
//! [`RateProvider`] and rounds results to 2 fractional digits. One provider
//! request per call; no retry, no caching.

use crate::currency::Currency;
use crate::error::Result;
use crate::rates::RateProvider;
use crate::types::{parse_amount, round_dp, validate_amount, Amount};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// A completed currency conversion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConvertedAmount {
    pub amount: Amount,
    pub from: Currency,
    pub to: Currency,
    /// Converted amount, rounded to 2 fractional digits
    pub converted: Amount,
}

impl fmt::Display for ConvertedAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} = {:.2} {}",
            self.amount, self.from, self.converted, self.to
        )
    }
}

/// Issues monotonically increasing tickets so overlapping in-flight
/// conversions can detect that a newer request has superseded them.
#[derive(Debug, Default)]
pub struct RequestGuard {
    latest: AtomicU64,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the next ticket, marking all earlier tickets stale
    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// True if `ticket` is still the most recently issued one
    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }
}

/// Currency converter over an injected rate provider
pub struct CurrencyConverter {
    provider: Arc<dyn RateProvider>,
    guard: RequestGuard,
}

impl CurrencyConverter {
    pub fn new(provider: Arc<dyn RateProvider>) -> Self {
        Self {
            provider,
            guard: RequestGuard::new(),
        }
    }

    /// Convert `amount` units of `from` into `to`
    ///
    /// Fails with `InvalidAmount` before any provider traffic when the
    /// amount is non-finite or non-positive.
    pub async fn convert(
        &self,
        amount: f64,
        from: Currency,
        to: Currency,
    ) -> Result<ConvertedAmount> {
        let amount = validate_amount(amount)?;
        let converted = self.provider.convert(from, to, amount).await?;

        Ok(ConvertedAmount {
            amount,
            from,
            to,
            converted: round_dp(converted, 2),
        })
    }

    /// Convert from raw widget strings
    pub async fn convert_str(&self, amount: &str, from: &str, to: &str) -> Result<ConvertedAmount> {
        let amount = parse_amount(amount)?;
        let from = Currency::from_code(from)?;
        let to = Currency::from_code(to)?;
        self.convert(amount, from, to).await
    }

    /// Convert one unit of `from` into `to`
    pub async fn quick_convert(&self, from: Currency, to: Currency) -> Result<ConvertedAmount> {
        self.convert(1.0, from, to).await
    }

    /// Convert, dropping the result if a newer request was issued meanwhile
    ///
    /// Returns `Ok(None)` when this call was superseded while its provider
    /// request was in flight, so overlapping clicks never display out of
    /// order. Errors from superseded calls are dropped as well.
    pub async fn convert_latest(
        &self,
        amount: f64,
        from: Currency,
        to: Currency,
    ) -> Result<Option<ConvertedAmount>> {
        let ticket = self.guard.issue();
        let result = self.convert(amount, from, to).await;

        if !self.guard.is_current(ticket) {
            log::debug!("dropping stale conversion result for {}/{}", from, to);
            return Ok(None);
        }

        result.map(Some)
    }
}
