use async_trait::async_trait;
use log::{debug, info};
use reqwest::{header, Client, StatusCode};

use crate::entity::{CalldataPayload, ErrorPayload, FetchError, SwapRequest};
use crate::oneinch::models::SwapApiResponse;
use crate::oneinch::Config;

/// Fetches swap calldata for a single request
#[async_trait]
pub trait SwapQuoteFetcher: Send + Sync {
    /// Returns `tx.data` of the swap with the `0x` prefix and selector cut off
    async fn fetch(
        &self,
        request: &SwapRequest,
        auth_token: &str,
    ) -> Result<CalldataPayload, FetchError>;
}

/// `SwapQuoteFetcher` backed by the 1inch swap API
pub struct OneInchSwapFetcher {
    http_client: Client,
    config: Config,
}

impl OneInchSwapFetcher {
    pub fn new(config: Config) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        let http_client = builder.build().map_err(|e| {
            FetchError::Configuration(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Fetches calldata using the token from the configuration
    pub async fn fetch_configured(
        &self,
        request: &SwapRequest,
    ) -> Result<CalldataPayload, FetchError> {
        let token = self.config.require_token()?;
        self.fetch(request, token).await
    }

    fn extract_calldata(body: &str) -> Result<CalldataPayload, FetchError> {
        let response: SwapApiResponse = serde_json::from_str(body).map_err(|e| {
            FetchError::MalformedResponse(format!("Failed to parse swap response: {}", e))
        })?;

        let tx = response.tx.ok_or_else(|| {
            FetchError::MalformedResponse("swap response has no tx field".to_string())
        })?;

        let data = match tx.data {
            Some(serde_json::Value::String(data)) => data,
            Some(other) => {
                return Err(FetchError::MalformedResponse(format!(
                    "tx.data is not a string: {}",
                    other
                )))
            }
            None => {
                return Err(FetchError::MalformedResponse(
                    "swap response has no tx.data field".to_string(),
                ))
            }
        };

        CalldataPayload::from_tx_data(&data)
    }
}

#[async_trait]
impl SwapQuoteFetcher for OneInchSwapFetcher {
    async fn fetch(
        &self,
        request: &SwapRequest,
        auth_token: &str,
    ) -> Result<CalldataPayload, FetchError> {
        if auth_token.trim().is_empty() {
            return Err(FetchError::Configuration(
                "API token is empty".to_string(),
            ));
        }
        request.validate()?;

        let url = self.config.swap_url();
        debug!("Requesting swap calldata from {} with {:?}", url, request);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(auth_token)
            .header(header::ACCEPT, "application/json")
            .query(&request.query_params())
            .send()
            .await
            .map_err(|e| {
                debug!("Failed to reach 1inch API: {}", e);
                FetchError::Network(e)
            })?;

        let status = response.status();
        info!("1inch API response: {} for {}", status, url);

        // Read the body as text first, error bodies are not always JSON
        let body = response.text().await?;

        if status != StatusCode::OK {
            let payload = ErrorPayload::new(status.as_u16(), body);
            debug!("1inch API error body: {:?}", payload.body);
            return Err(FetchError::Api(payload));
        }

        let calldata = Self::extract_calldata(&body)?;
        info!(
            "Swap calldata received: payload_length={}",
            calldata.as_str().len()
        );

        Ok(calldata)
    }
}
