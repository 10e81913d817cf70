//! Row assembly for ohlcdash.
//!
//! This crate turns the endpoint's parallel arrays into bars:
//!
//! - [`assemble`] - Zips a [`RawSeries`](ohlcdash_types::RawSeries) into a [`Series`](ohlcdash_types::Series)
//! - [`AssembleOptions`] - Timestamp unit and null-handling policy
//! - [`check`] - Data-quality report for an assembled series

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/ohlcdash/ohlcdash/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod assembler;
mod quality;

pub use assembler::{AssembleError, AssembleOptions, GapPolicy, TimestampUnit, assemble};
pub use quality::{QualityReport, check};
