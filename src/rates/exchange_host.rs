//! HTTP rate provider
//!
//! Talks to an exchangerate.host-style convert endpoint:
//! `GET <endpoint>?from=<code>&to=<code>&amount=<number>` returning a JSON
//! body whose numeric `result` field holds the converted amount.

use crate::currency::Currency;
use crate::error::{OmnicalcError, Result};
use crate::rates::RateProvider;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_ENDPOINT: &str = "https://api.exchangerate.host/convert";

/// One conversion request, no retry, no caching. The client carries a bounded
/// timeout; expiry surfaces as `ProviderUnavailable`.
pub struct ExchangeHostProvider {
    client: Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct ConvertPayload {
    success: Option<bool>,
    result: Option<f64>,
}

impl ExchangeHostProvider {
    /// Create a provider against the default endpoint with a 10s timeout
    pub fn new() -> Result<Self> {
        Self::with_endpoint(DEFAULT_ENDPOINT, Duration::from_secs(10))
    }

    /// Create a provider against a custom endpoint and timeout
    pub fn with_endpoint(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            OmnicalcError::ProviderUnavailable(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    fn extract_result(payload: ConvertPayload) -> Result<f64> {
        if payload.success == Some(false) {
            return Err(OmnicalcError::ProviderUnavailable(
                "provider reported failure".to_string(),
            ));
        }

        match payload.result {
            Some(value) if value.is_finite() => Ok(value),
            Some(value) => Err(OmnicalcError::MalformedResponse(format!(
                "non-finite result: {}",
                value
            ))),
            None => Err(OmnicalcError::MalformedResponse(
                "response body has no 'result' field".to_string(),
            )),
        }
    }
}

#[async_trait]
impl RateProvider for ExchangeHostProvider {
    async fn convert(&self, from: Currency, to: Currency, amount: f64) -> Result<f64> {
        log::debug!("requesting {} {} -> {}", amount, from, to);

        let amount_param = amount.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("from", from.code()),
                ("to", to.code()),
                ("amount", amount_param.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                log::warn!("rate request failed for {}/{}: {}", from, to, e);
                OmnicalcError::ProviderUnavailable(format!("HTTP request failed: {}", e))
            })?;

        if !response.status().is_success() {
            log::warn!(
                "rate endpoint returned {} for {}/{}",
                response.status(),
                from,
                to
            );
            return Err(OmnicalcError::ProviderUnavailable(format!(
                "provider returned HTTP {}",
                response.status()
            )));
        }

        let payload: ConvertPayload = response.json().await.map_err(|e| {
            OmnicalcError::MalformedResponse(format!("Failed to decode response: {}", e))
        })?;

        Self::extract_result(payload)
    }
}
