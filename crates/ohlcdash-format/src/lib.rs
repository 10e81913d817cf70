//! Presentation adapters for ohlcdash.
//!
//! This crate turns an enriched [`Series`](ohlcdash_types::Series) into
//! something a consumer can draw or read:
//!
//! - [`CsvFormatter`] - CSV/TSV rows
//! - [`JsonFormatter`] - JSON array or NDJSON
//! - [`TextTableFormatter`] - Aligned table for terminals
//! - [`chartjs`] - Labels and datasets for line, bar and area charts
//! - [`candles`] - Candlestick points
//! - [`widget`] - Embedded advanced-chart widget configuration

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/ohlcdash/ohlcdash/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod candles;
pub mod chartjs;
mod columns;
mod csv;
mod formatter;
mod json;
mod table;
pub mod widget;

pub use crate::csv::CsvFormatter;
pub use columns::Column;
pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::{JsonFormatter, JsonStyle};
pub use table::TextTableFormatter;
