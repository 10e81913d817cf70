//! Ordered bar series and the raw parallel arrays they are built from.

use serde::{Deserialize, Serialize};

use crate::{Bar, Interval};

/// Instrument metadata reported alongside the quote arrays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    /// Ticker symbol (e.g. `AAPL`).
    #[serde(default)]
    pub symbol: Option<String>,
    /// Quote currency.
    #[serde(default)]
    pub currency: Option<String>,
    /// Exchange name.
    #[serde(default)]
    pub exchange_name: Option<String>,
    /// Instrument type (e.g. `EQUITY`).
    #[serde(default)]
    pub instrument_type: Option<String>,
    /// Granularity the endpoint actually used.
    #[serde(default)]
    pub data_granularity: Option<String>,
    /// Range the endpoint actually used.
    #[serde(default)]
    pub range: Option<String>,
    /// Last regular-session price.
    #[serde(default)]
    pub regular_market_price: Option<f64>,
}

/// Parallel quote arrays exactly as delivered by the endpoint.
///
/// Entries may be `null` upstream, hence `Option<f64>`. The arrays are
/// expected to have equal length; the assembler checks this.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSeries {
    /// Bar open times, in seconds or milliseconds since the epoch.
    pub timestamps: Vec<i64>,
    /// Opening prices.
    pub open: Vec<Option<f64>>,
    /// High prices.
    pub high: Vec<Option<f64>>,
    /// Low prices.
    pub low: Vec<Option<f64>>,
    /// Closing prices.
    pub close: Vec<Option<f64>>,
    /// Volumes.
    pub volume: Vec<Option<f64>>,
    /// Instrument metadata, if present.
    pub meta: Option<ChartMeta>,
}

impl RawSeries {
    /// Number of timestamps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Returns true if there are no timestamps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

/// An ordered sequence of bars from a single fetch.
///
/// Bars are ordered by ascending timestamp. Once handed out for
/// presentation a series is read-only; only the indicator engine writes
/// derived fields through [`Series::bars_mut`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    bars: Vec<Bar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    meta: Option<ChartMeta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    interval: Option<Interval>,
}

impl Series {
    /// Creates a series from already ordered bars.
    #[must_use]
    pub const fn new(bars: Vec<Bar>) -> Self {
        Self {
            bars,
            meta: None,
            interval: None,
        }
    }

    /// Attaches instrument metadata.
    #[must_use]
    pub fn with_meta(mut self, meta: Option<ChartMeta>) -> Self {
        self.meta = meta;
        self
    }

    /// Records the interval the series was fetched with.
    #[must_use]
    pub fn with_interval(mut self, interval: Option<Interval>) -> Self {
        self.interval = interval;
        self
    }

    /// Returns the bars.
    #[must_use]
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Mutable access for in-place enrichment. Never reorders.
    pub fn bars_mut(&mut self) -> &mut [Bar] {
        &mut self.bars
    }

    /// Iterates over the bars in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Bar> {
        self.bars.iter()
    }

    /// Number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Returns true if the series has no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// First bar, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Bar> {
        self.bars.first()
    }

    /// Last bar, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Bar> {
        self.bars.last()
    }

    /// Closing prices in bar order.
    #[must_use]
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Instrument metadata, if known.
    #[must_use]
    pub const fn meta(&self) -> Option<&ChartMeta> {
        self.meta.as_ref()
    }

    /// Ticker symbol from the metadata, if known.
    #[must_use]
    pub fn symbol(&self) -> Option<&str> {
        self.meta.as_ref().and_then(|m| m.symbol.as_deref())
    }

    /// Interval the series was fetched with, if recorded.
    #[must_use]
    pub const fn interval(&self) -> Option<Interval> {
        self.interval
    }

    /// Consumes the series, returning its bars.
    #[must_use]
    pub fn into_bars(self) -> Vec<Bar> {
        self.bars
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Bar;
    type IntoIter = std::slice::Iter<'a, Bar>;

    fn into_iter(self) -> Self::IntoIter {
        self.bars.iter()
    }
}
