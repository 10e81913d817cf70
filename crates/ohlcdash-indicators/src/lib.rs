//! Indicator engine for ohlcdash.
//!
//! Every indicator is a pure function from closing prices to one optional
//! value per bar. There is no hidden state: calling a function twice on the
//! same input yields bit-identical output.
//!
//! - [`sma`], [`ema`], [`macd`], [`rsi`], [`bollinger`] - Pure functions
//! - [`IndicatorConfig`] - Window parameters, validated
//! - [`IndicatorEngine`] - Writes selected indicators into a [`Series`](ohlcdash_types::Series)

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/ohlcdash/ohlcdash/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bollinger;
mod config;
mod ema;
mod engine;
mod macd;
mod rsi;
mod sma;

pub use bollinger::bollinger;
pub use config::{ConfigError, IndicatorConfig, IndicatorConfigBuilder};
pub use ema::ema;
pub use engine::IndicatorEngine;
pub use macd::macd;
pub use rsi::rsi;
pub use sma::sma;

#[cfg(test)]
pub(crate) fn nz(n: usize) -> std::num::NonZero<usize> {
    std::num::NonZero::new(n).unwrap()
}
