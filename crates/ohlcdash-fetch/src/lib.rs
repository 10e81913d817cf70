//! HTTP client and chart payload parsing for ohlcdash.
//!
//! This crate provides the fetch stage of the pipeline:
//!
//! - [`url::chart_url`] - Builds the `/api/finance-chart` request URL
//! - [`ChartClient`] - HTTP client issuing a single GET per fetch
//! - [`ChartResponse`] - Typed schema of the response envelope
//! - [`parse_chart`] - Validates a payload into a [`RawSeries`](ohlcdash_types::RawSeries)

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/ohlcdash/ohlcdash/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod error;
mod parse;
mod response;
pub mod url;

pub use client::{ChartClient, ClientConfig, DEFAULT_ENDPOINT};
pub use error::FetchError;
pub use parse::{parse_chart, validate_response};
pub use response::{ChartApiError, ChartEnvelope, ChartResponse, ChartResult, Indicators, Quote};
