//! Core types for the ohlcdash OHLCV pipeline.
//!
//! This crate provides the fundamental data structures used throughout ohlcdash:
//!
//! - [`Bar`] - One trading interval with optional derived indicator fields
//! - [`Series`] - Ordered sequence of bars produced by a single fetch
//! - [`RawSeries`] - Parallel quote arrays as delivered by the endpoint
//! - [`Interval`] - Enumerated request interval (`1m` .. `1y`)
//! - [`IndicatorKind`] / [`IndicatorSelection`] - Which indicators to compute
//! - [`ChartType`] - How the price pane is drawn

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/ohlcdash/ohlcdash/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bar;
mod chart;
mod error;
mod indicator;
mod interval;
mod series;

pub use bar::{Bar, BollingerValue, MacdValue};
pub use chart::{ChartType, ChartTypeParseError};
pub use error::{OhlcdashError, Result};
pub use indicator::{IndicatorKind, IndicatorParseError, IndicatorSelection};
pub use interval::{Interval, IntervalParseError};
pub use series::{ChartMeta, RawSeries, Series};
