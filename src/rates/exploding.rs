//! Rate provider that always fails
//!
//! Test double for exercising failure paths and for asserting that a code
//! path performs no rate lookups at all.

use crate::currency::Currency;
use crate::error::{OmnicalcError, Result};
use crate::rates::RateProvider;
use async_trait::async_trait;

/// Fails every request with `ProviderUnavailable`
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplodingRateProvider;

impl ExplodingRateProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RateProvider for ExplodingRateProvider {
    async fn convert(&self, from: Currency, to: Currency, _amount: f64) -> Result<f64> {
        Err(OmnicalcError::ProviderUnavailable(format!(
            "unexpected rate lookup for {}/{}",
            from, to
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_always_fails() {
        let provider = ExplodingRateProvider::new();
        let err = provider
            .convert(Currency::USD, Currency::INR, 1.0)
            .await
            .unwrap_err();
        assert!(matches!(err, OmnicalcError::ProviderUnavailable(_)));
    }
}
