//! CLI command implementations.

pub(crate) mod chart;
pub(crate) mod dashboard;
pub(crate) mod fetch;
pub(crate) mod intervals;
pub(crate) mod widget;
