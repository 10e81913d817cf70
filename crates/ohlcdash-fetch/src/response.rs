//! Typed schema of the finance-chart response.
//!
//! ```text
//! { "chart": { "result": [ { "meta": {..}, "timestamp": [..],
//!     "indicators": { "quote": [ { "open": [..], "high": [..], "low": [..],
//!                                  "close": [..], "volume": [..] } ] } } ],
//!   "error": null } }
//! ```
//!
//! Fields the pipeline depends on are typed; anything else in the payload
//! is ignored. Optional wrappers are used where the endpoint is known to
//! omit fields so that absence is reported as a validation error instead
//! of a generic deserialization failure.

use ohlcdash_types::ChartMeta;
use serde::Deserialize;

/// Top-level response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartResponse {
    /// The chart envelope.
    pub chart: ChartEnvelope,
}

/// Envelope holding either results or an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartEnvelope {
    /// Results; the pipeline uses the first entry.
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    /// Error reported by the endpoint.
    #[serde(default)]
    pub error: Option<ChartApiError>,
}

/// Error object reported inside the envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartApiError {
    /// Short error code.
    #[serde(default)]
    pub code: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
}

/// One chart result.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartResult {
    /// Instrument metadata.
    #[serde(default)]
    pub meta: Option<ChartMeta>,
    /// Bar open times in seconds since the epoch.
    #[serde(default)]
    pub timestamp: Option<Vec<i64>>,
    /// Indicator block holding the quote arrays.
    #[serde(default)]
    pub indicators: Option<Indicators>,
}

/// Indicator block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Indicators {
    /// Quote arrays; the pipeline uses the first entry.
    #[serde(default)]
    pub quote: Vec<Quote>,
}

/// Parallel OHLCV arrays.
///
/// Missing arrays deserialize to `None` so the validator can name them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Quote {
    /// Opening prices.
    #[serde(default)]
    pub open: Option<Vec<Option<f64>>>,
    /// High prices.
    #[serde(default)]
    pub high: Option<Vec<Option<f64>>>,
    /// Low prices.
    #[serde(default)]
    pub low: Option<Vec<Option<f64>>>,
    /// Closing prices.
    #[serde(default)]
    pub close: Option<Vec<Option<f64>>>,
    /// Volumes.
    #[serde(default)]
    pub volume: Option<Vec<Option<f64>>>,
}
