//! View state and dashboard driver for ohlcdash.
//!
//! - [`ViewState`] - Selected interval, chart type and indicators plus the
//!   last loaded series or error, updated only through [`ViewState::update`]
//! - [`ChartSource`] - Async seam the dashboard fetches through
//! - [`Dashboard`] - Runs fetch tasks and feeds their completions back

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/ohlcdash/ohlcdash/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod dashboard;
mod source;
mod state;

pub use dashboard::Dashboard;
pub use ohlcdash_types::ChartType;
pub use source::{ChartSource, HttpChartSource};
pub use state::{FetchCommand, RequestId, ViewEvent, ViewState};
