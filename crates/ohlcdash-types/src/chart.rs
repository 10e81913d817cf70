//! Chart presentation types.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How the main price pane is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartType {
    /// Close price as a line.
    #[default]
    Line,
    /// Close price as bars.
    Bar,
    /// Close price as a filled area.
    Area,
    /// Standard candlesticks.
    Candle,
    /// Candlesticks with unfilled bullish bodies.
    HollowCandle,
    /// Candlesticks filled by direction.
    ColoredBar,
}

impl ChartType {
    /// Returns the wire name (`line`, `hollowCandle`, ...).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Bar => "bar",
            Self::Area => "area",
            Self::Candle => "candle",
            Self::HollowCandle => "hollowCandle",
            Self::ColoredBar => "coloredBar",
        }
    }

    /// Returns a display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Line => "Line",
            Self::Bar => "Bar",
            Self::Area => "Area",
            Self::Candle => "Candle",
            Self::HollowCandle => "Hollow Candle",
            Self::ColoredBar => "Colored Bar",
        }
    }

    /// Returns true if the chart needs full OHLC per point rather than
    /// the close alone.
    #[must_use]
    pub const fn is_candlestick(&self) -> bool {
        matches!(self, Self::Candle | Self::HollowCandle | Self::ColoredBar)
    }

    /// Returns all chart types.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Line,
            Self::Bar,
            Self::Area,
            Self::Candle,
            Self::HollowCandle,
            Self::ColoredBar,
        ]
    }
}

impl std::fmt::Display for ChartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ChartType {
    type Err = ChartTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "line" => Ok(Self::Line),
            "bar" => Ok(Self::Bar),
            "area" => Ok(Self::Area),
            "candle" | "candlestick" => Ok(Self::Candle),
            "hollowcandle" => Ok(Self::HollowCandle),
            "coloredbar" | "colouredbar" => Ok(Self::ColoredBar),
            _ => Err(ChartTypeParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown chart type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartTypeParseError(String);

impl std::fmt::Display for ChartTypeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unknown chart type '{}'. Valid types: line, bar, area, candle, hollowCandle, coloredBar",
            self.0
        )
    }
}

impl std::error::Error for ChartTypeParseError {}
