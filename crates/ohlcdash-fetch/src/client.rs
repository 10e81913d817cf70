//! HTTP client for the finance-chart endpoint.

use ohlcdash_types::{Interval, RawSeries};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::{ChartResponse, FetchError, parse::validate_response, url::chart_url};

/// Default base URL of the chart endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3001";

/// Configuration for the chart client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the endpoint, without the `/api/finance-chart` path.
    pub endpoint: String,
    /// Whole-request timeout.
    pub timeout: Duration,
    /// Connection establishment timeout.
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
            user_agent: format!("ohlcdash/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Returns a config pointing at `endpoint` with default timeouts.
    #[must_use]
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }
}

/// HTTP client issuing one GET per fetch.
///
/// There is no retry and no caching: each call hits the network and a
/// failure is returned to the caller as-is.
#[derive(Debug, Clone)]
pub struct ChartClient {
    client: Client,
    config: ClientConfig,
}

impl ChartClient {
    /// Creates a new chart client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, FetchError> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches the chart and returns the typed response without validation.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, timeout, a non-success status
    /// or a body that is not a chart envelope.
    pub async fn fetch_raw(&self, interval: Option<Interval>) -> Result<ChartResponse, FetchError> {
        let url = chart_url(&self.config.endpoint, interval);
        debug!(%url, "requesting chart");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "chart request rejected");
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| self.classify(e))?;
        serde_json::from_slice(&body).map_err(|e| FetchError::Malformed(format!("invalid JSON: {e}")))
    }

    /// Fetches and validates the chart into raw parallel arrays.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, timeout, a non-success status,
    /// or a payload missing the expected nested fields.
    pub async fn fetch(&self, interval: Option<Interval>) -> Result<RawSeries, FetchError> {
        let raw = self
            .fetch_raw(interval)
            .await
            .and_then(validate_response)
            .inspect_err(|e| warn!(error = %e, "chart fetch failed"))?;

        info!(
            bars = raw.len(),
            interval = interval.map_or("default", |i| i.as_str()),
            "chart fetched"
        );
        Ok(raw)
    }

    /// Maps reqwest timeouts onto [`FetchError::Timeout`].
    fn classify(&self, error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::Timeout(self.config.timeout)
        } else {
            FetchError::Transport(error)
        }
    }
}
