//! Error types for ohlcdash.

use thiserror::Error;

/// Result type alias for ohlcdash operations.
pub type Result<T> = std::result::Result<T, OhlcdashError>;

/// Errors surfaced by the ohlcdash pipeline.
///
/// Stage-specific crates define their own error enums and map them into
/// this type at crate boundaries. The view layer collapses every variant
/// into a single user-visible message.
#[derive(Error, Debug)]
pub enum OhlcdashError {
    /// Network, status or payload failure while fetching chart data.
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// Parallel quote arrays could not be assembled into a series.
    #[error("malformed series: {0}")]
    MalformedSeries(String),

    /// Indicator or client configuration is invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Output format error.
    #[error("format error: {0}")]
    Format(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
