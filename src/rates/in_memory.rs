//! In-memory rate provider
//!
//! Stores pair rates in a HashMap. Used for tests and offline demos; the
//! table is built up-front and read-only once conversions start.

use crate::currency::Currency;
use crate::error::{OmnicalcError, Result};
use crate::rates::RateProvider;
use async_trait::async_trait;
use hashbrown::HashMap;

/// Rate table keyed by (from, to)
///
/// # Example
/// ```
/// use omnicalc::rates::InMemoryRateProvider;
/// use omnicalc::currency::Currency;
///
/// let mut provider = InMemoryRateProvider::new();
/// provider.add_rate(Currency::USD, Currency::INR, 83.0).unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryRateProvider {
    rates: HashMap<(Currency, Currency), f64>,
    /// Fall back to 1/rate of the opposite pair when the direct pair is absent
    auto_inverse: bool,
}

impl InMemoryRateProvider {
    /// Create an empty provider with automatic inverse lookup enabled
    pub fn new() -> Self {
        Self {
            rates: HashMap::new(),
            auto_inverse: true,
        }
    }

    /// Create with explicit inverse-lookup behavior
    pub fn with_config(auto_inverse: bool) -> Self {
        Self {
            rates: HashMap::new(),
            auto_inverse,
        }
    }

    /// Add a single rate: 1 `from` = `rate` × `to`
    pub fn add_rate(&mut self, from: Currency, to: Currency, rate: f64) -> Result<()> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(OmnicalcError::InvalidInput(format!(
                "rate must be positive, got: {}",
                rate
            )));
        }
        self.rates.insert((from, to), rate);
        Ok(())
    }

    /// Add multiple rates at once
    pub fn add_rates(&mut self, entries: Vec<(Currency, Currency, f64)>) -> Result<()> {
        for (from, to, rate) in entries {
            self.add_rate(from, to, rate)?;
        }
        Ok(())
    }

    /// Number of stored pairs
    pub fn num_pairs(&self) -> usize {
        self.rates.len()
    }

    fn lookup(&self, from: Currency, to: Currency) -> Option<f64> {
        if let Some(rate) = self.rates.get(&(from, to)) {
            return Some(*rate);
        }
        if self.auto_inverse {
            if let Some(rate) = self.rates.get(&(to, from)) {
                return Some(1.0 / rate);
            }
        }
        None
    }
}

#[async_trait]
impl RateProvider for InMemoryRateProvider {
    async fn convert(&self, from: Currency, to: Currency, amount: f64) -> Result<f64> {
        if from == to {
            return Ok(amount);
        }

        match self.lookup(from, to) {
            Some(rate) => Ok(amount * rate),
            None => Err(OmnicalcError::ProviderUnavailable(format!(
                "no rate available for {}/{}",
                from, to
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_direct_rate() {
        let mut provider = InMemoryRateProvider::new();
        provider
            .add_rate(Currency::EUR, Currency::USD, 1.20)
            .unwrap();

        let rate = provider.rate(Currency::EUR, Currency::USD).await.unwrap();
        assert_eq!(rate, 1.20);

        let converted = provider
            .convert(Currency::EUR, Currency::USD, 100.0)
            .await
            .unwrap();
        assert_eq!(converted, 120.0);
    }

    #[tokio::test]
    async fn test_inverse_fallback() {
        let mut provider = InMemoryRateProvider::new();
        provider
            .add_rate(Currency::EUR, Currency::USD, 1.25)
            .unwrap();

        let rate = provider.rate(Currency::USD, Currency::EUR).await.unwrap();
        assert!((rate - 0.8).abs() < 1e-12);
    }

    #[tokio::test]
    async fn test_inverse_disabled() {
        let mut provider = InMemoryRateProvider::with_config(false);
        provider
            .add_rate(Currency::EUR, Currency::USD, 1.25)
            .unwrap();

        assert!(provider.rate(Currency::USD, Currency::EUR).await.is_err());
    }

    #[tokio::test]
    async fn test_identity_pair() {
        let provider = InMemoryRateProvider::new();
        let converted = provider
            .convert(Currency::USD, Currency::USD, 42.0)
            .await
            .unwrap();
        assert_eq!(converted, 42.0);
    }

    #[test]
    fn test_rejects_non_positive_rate() {
        let mut provider = InMemoryRateProvider::new();
        assert!(provider.add_rate(Currency::EUR, Currency::USD, 0.0).is_err());
        assert!(provider
            .add_rate(Currency::EUR, Currency::USD, -1.0)
            .is_err());
        assert!(provider
            .add_rate(Currency::EUR, Currency::USD, f64::NAN)
            .is_err());
    }

    #[test]
    fn test_batch_insert() {
        let mut provider = InMemoryRateProvider::new();
        provider
            .add_rates(vec![
                (Currency::USD, Currency::INR, 83.0),
                (Currency::USD, Currency::EUR, 0.92),
            ])
            .unwrap();
        assert_eq!(provider.num_pairs(), 2);
    }
}
