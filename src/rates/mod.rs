//! Exchange-rate providers
//!
//! The [`RateProvider`] trait is the seam between the conversion engine and
//! whatever supplies exchange rates: a hosted HTTP API in production, an
//! in-memory table in tests.

pub mod exploding;
pub mod in_memory;

#[cfg(feature = "http")]
pub mod exchange_host;

pub use exploding::ExplodingRateProvider;
pub use in_memory::InMemoryRateProvider;

#[cfg(feature = "http")]
pub use exchange_host::ExchangeHostProvider;

use crate::currency::Currency;
use crate::error::Result;
use async_trait::async_trait;

/// Trait for fetching currency conversion results
///
/// Implementations may suspend (network I/O) and must classify every failure
/// as `ProviderUnavailable` or `MalformedResponse`; a missing rate is never
/// reported as a zero result.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Convert `amount` units of `from` into `to`
    ///
    /// Returns the converted amount, unrounded.
    async fn convert(&self, from: Currency, to: Currency, amount: f64) -> Result<f64>;

    /// Exchange rate for one unit of `from` in `to`
    async fn rate(&self, from: Currency, to: Currency) -> Result<f64> {
        self.convert(from, to, 1.0).await
    }
}
