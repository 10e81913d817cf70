//! Fetch, enrich and present OHLCV chart data.
//!
//! This is a facade crate that re-exports functionality from the ohlcdash
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```no_run
//! use ohlcdash_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = ChartClient::with_defaults()?;
//!     let raw = client.fetch(Some(Interval::Day1)).await?;
//!     let series = assemble(raw, &AssembleOptions::default())?;
//!
//!     let series = IndicatorEngine::with_defaults().enrich(series, &IndicatorSelection::all());
//!     OutputFormat::Table.write_series(&series, &IndicatorSelection::all(), std::io::stdout())?;
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/ohlcdash/ohlcdash/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use ohlcdash_types::*;

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use ohlcdash_fetch::{
    ChartClient, ChartResponse, ClientConfig, DEFAULT_ENDPOINT, FetchError, parse_chart,
    validate_response,
};

// Re-export row assembly
#[cfg(feature = "assemble")]
pub use ohlcdash_assemble::{
    AssembleError, AssembleOptions, GapPolicy, QualityReport, TimestampUnit, assemble, check,
};

// Re-export indicators
#[cfg(feature = "indicators")]
pub use ohlcdash_indicators::{
    ConfigError, IndicatorConfig, IndicatorConfigBuilder, IndicatorEngine, bollinger, ema, macd,
    rsi, sma,
};

// Re-export presentation adapters
#[cfg(feature = "format")]
pub use ohlcdash_format::{
    Column, CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat,
    TextTableFormatter, candles, chartjs, widget,
};

// Re-export view state
#[cfg(feature = "view")]
pub use ohlcdash_view::{
    ChartSource, Dashboard, FetchCommand, HttpChartSource, RequestId, ViewEvent, ViewState,
};

/// Prelude module for convenient imports.
///
/// ```
/// use ohlcdash_lib::prelude::*;
/// ```
pub mod prelude {
    pub use ohlcdash_types::{
        Bar, ChartType, IndicatorKind, IndicatorSelection, Interval, OhlcdashError, Result,
        Series,
    };

    #[cfg(feature = "fetch")]
    pub use ohlcdash_fetch::{ChartClient, ClientConfig};

    #[cfg(feature = "assemble")]
    pub use ohlcdash_assemble::{AssembleOptions, GapPolicy, assemble};

    #[cfg(feature = "indicators")]
    pub use ohlcdash_indicators::{IndicatorConfig, IndicatorEngine};

    #[cfg(feature = "format")]
    pub use ohlcdash_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat};

    #[cfg(feature = "view")]
    pub use ohlcdash_view::{ChartSource, Dashboard, HttpChartSource, ViewEvent, ViewState};
}
