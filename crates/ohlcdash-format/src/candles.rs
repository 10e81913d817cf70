//! Candlestick points.

use ohlcdash_types::{Bar, BollingerValue, ChartType, MacdValue, Series};
use serde::Serialize;

/// Colour of a bar that closed above its open.
pub const BULLISH_COLOR: &str = "#6BA583";
/// Colour of a bar that closed at or below its open.
pub const BEARISH_COLOR: &str = "#FF0000";

/// One candle, with the date as epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandlePoint {
    /// Bar open time, milliseconds since the epoch.
    pub date: i64,
    /// Opening price.
    pub open: f64,
    /// Highest price.
    pub high: f64,
    /// Lowest price.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume.
    pub volume: f64,
    /// SMA value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma: Option<f64>,
    /// EMA value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ema: Option<f64>,
    /// MACD value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd: Option<MacdValue>,
    /// RSI value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<f64>,
    /// Bollinger bands.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bb: Option<BollingerValue>,
    /// Per-candle colours for the hollow and coloured variants.
    #[serde(flatten)]
    pub style: Option<CandleStyle>,
}

impl From<&Bar> for CandlePoint {
    fn from(bar: &Bar) -> Self {
        Self {
            date: bar.timestamp.timestamp_millis(),
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            volume: bar.volume,
            sma: bar.sma,
            ema: bar.ema,
            macd: bar.macd,
            rsi: bar.rsi,
            bb: bar.bollinger,
            style: None,
        }
    }
}

/// Stroke and fill of a single candle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandleStyle {
    /// Body fill; `none` draws a hollow body.
    pub fill: &'static str,
    /// Body outline.
    pub stroke: &'static str,
    /// Wick colour.
    pub wick_stroke: &'static str,
}

impl CandleStyle {
    /// Style of `bar` under `chart`, or `None` when the chart uses its
    /// default candle colours.
    ///
    /// A hollow candle leaves rising bodies unfilled; a coloured bar fills
    /// every body with its direction colour.
    #[must_use]
    pub fn for_bar(chart: ChartType, bar: &Bar) -> Option<Self> {
        let color = if bar.close > bar.open { BULLISH_COLOR } else { BEARISH_COLOR };
        match chart {
            ChartType::HollowCandle => Some(Self {
                fill: if bar.close > bar.open { "none" } else { BEARISH_COLOR },
                stroke: color,
                wick_stroke: color,
            }),
            ChartType::ColoredBar => Some(Self {
                fill: color,
                stroke: color,
                wick_stroke: color,
            }),
            _ => None,
        }
    }
}

/// Converts every bar of `series` to a candle point.
#[must_use]
pub fn candle_points(series: &Series) -> Vec<CandlePoint> {
    series.iter().map(CandlePoint::from).collect()
}

/// Like [`candle_points`], with per-candle colours for `chart`.
#[must_use]
pub fn styled_candle_points(series: &Series, chart: ChartType) -> Vec<CandlePoint> {
    series
        .iter()
        .map(|bar| CandlePoint {
            style: CandleStyle::for_bar(chart, bar),
            ..CandlePoint::from(bar)
        })
        .collect()
}
