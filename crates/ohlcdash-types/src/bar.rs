//! OHLCV bar with derived indicator fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// MACD line, signal line and histogram for a single bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdValue {
    /// Fast EMA minus slow EMA.
    pub macd: f64,
    /// EMA of the MACD line.
    pub signal: f64,
    /// MACD line minus signal line.
    pub histogram: f64,
}

/// Bollinger band values for a single bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerValue {
    /// Middle band plus `k` standard deviations.
    pub top: f64,
    /// Simple moving average of the close.
    pub middle: f64,
    /// Middle band minus `k` standard deviations.
    pub bottom: f64,
}

/// One trading interval.
///
/// The price fields come straight from the endpoint. Derived fields stay
/// `None` until the indicator engine fills them in, and remain `None` for
/// bars that do not have enough trailing history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Bar open time (UTC).
    pub timestamp: DateTime<Utc>,
    /// Opening price.
    pub open: f64,
    /// Highest price during the interval.
    pub high: f64,
    /// Lowest price during the interval.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume.
    pub volume: f64,
    /// Simple moving average of the close.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sma: Option<f64>,
    /// Exponential moving average of the close.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ema: Option<f64>,
    /// Moving average convergence divergence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macd: Option<MacdValue>,
    /// Relative strength index in `[0, 100]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rsi: Option<f64>,
    /// Bollinger bands.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bollinger: Option<BollingerValue>,
}

impl Bar {
    /// Creates a new bar with no derived fields.
    #[must_use]
    pub const fn new(
        timestamp: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
            sma: None,
            ema: None,
            macd: None,
            rsi: None,
            bollinger: None,
        }
    }

    /// Returns the price range (high - low).
    #[must_use]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Returns the body size (|close - open|).
    #[must_use]
    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }

    /// Returns true if this is a bullish (green) bar.
    #[must_use]
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// Returns true if this is a bearish (red) bar.
    #[must_use]
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }

    /// Returns the typical price ((high + low + close) / 3).
    #[must_use]
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }

    /// Returns true if the prices are finite, `low <= open, close <= high`
    /// and the volume is non-negative.
    ///
    /// Upstream data is not guaranteed to satisfy this; callers use it to
    /// report data quality, never to reject bars.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let finite = [self.open, self.high, self.low, self.close, self.volume]
            .iter()
            .all(|v| v.is_finite());

        finite
            && self.low <= self.open
            && self.low <= self.close
            && self.open <= self.high
            && self.close <= self.high
            && self.volume >= 0.0
    }

    /// Returns true if any derived field is set.
    #[must_use]
    pub const fn has_derived(&self) -> bool {
        self.sma.is_some()
            || self.ema.is_some()
            || self.macd.is_some()
            || self.rsi.is_some()
            || self.bollinger.is_some()
    }

    /// Resets all derived fields to `None`.
    pub fn clear_derived(&mut self) {
        self.sma = None;
        self.ema = None;
        self.macd = None;
        self.rsi = None;
        self.bollinger = None;
    }
}
