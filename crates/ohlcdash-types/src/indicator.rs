//! Indicator identifiers and per-view selections.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

/// A derived per-bar metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorKind {
    /// Simple moving average.
    Sma,
    /// Exponential moving average.
    Ema,
    /// Moving average convergence divergence.
    Macd,
    /// Relative strength index.
    Rsi,
    /// Bollinger bands.
    Bollinger,
}

impl IndicatorKind {
    /// Returns the short identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sma => "sma",
            Self::Ema => "ema",
            Self::Macd => "macd",
            Self::Rsi => "rsi",
            Self::Bollinger => "bollinger",
        }
    }

    /// Returns a display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sma => "SMA",
            Self::Ema => "EMA",
            Self::Macd => "MACD",
            Self::Rsi => "RSI",
            Self::Bollinger => "Bollinger Bands",
        }
    }

    /// Returns all indicator kinds.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Sma, Self::Ema, Self::Macd, Self::Rsi, Self::Bollinger]
    }
}

impl std::fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IndicatorKind {
    type Err = IndicatorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sma" => Ok(Self::Sma),
            "ema" => Ok(Self::Ema),
            "macd" => Ok(Self::Macd),
            "rsi" => Ok(Self::Rsi),
            "bb" | "bollinger" | "bollingerbands" | "bollinger_bands" => Ok(Self::Bollinger),
            _ => Err(IndicatorParseError(s.to_string())),
        }
    }
}

/// The set of indicators a view wants computed.
///
/// Iteration order is stable (declaration order of [`IndicatorKind`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorSelection(BTreeSet<IndicatorKind>);

impl IndicatorSelection {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Selects every indicator.
    #[must_use]
    pub fn all() -> Self {
        IndicatorKind::all().iter().copied().collect()
    }

    /// Returns a copy with `kind` added.
    #[must_use]
    pub fn with(mut self, kind: IndicatorKind) -> Self {
        self.0.insert(kind);
        self
    }

    /// Adds an indicator, returning true if it was not already selected.
    pub fn insert(&mut self, kind: IndicatorKind) -> bool {
        self.0.insert(kind)
    }

    /// Returns true if `kind` is selected.
    #[must_use]
    pub fn contains(&self, kind: IndicatorKind) -> bool {
        self.0.contains(&kind)
    }

    /// Returns true if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of selected indicators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the selected indicators.
    pub fn iter(&self) -> impl Iterator<Item = IndicatorKind> + '_ {
        self.0.iter().copied()
    }

    /// Parses a comma-separated list of indicator names.
    ///
    /// Besides the [`IndicatorKind`] identifiers this accepts
    /// `MovingAverage` (or `ma`), which selects both SMA and EMA, and `all`.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first unrecognised entry.
    pub fn parse_list(list: &str) -> Result<Self, IndicatorParseError> {
        let mut selection = Self::new();
        for name in list.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            match name.to_lowercase().as_str() {
                "movingaverage" | "moving_average" | "ma" => {
                    selection.insert(IndicatorKind::Sma);
                    selection.insert(IndicatorKind::Ema);
                }
                "all" => selection = Self::all(),
                _ => {
                    selection.insert(name.parse()?);
                }
            }
        }
        Ok(selection)
    }
}

impl FromStr for IndicatorSelection {
    type Err = IndicatorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_list(s)
    }
}

impl FromIterator<IndicatorKind> for IndicatorSelection {
    fn from_iter<I: IntoIterator<Item = IndicatorKind>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for IndicatorSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<_> = self.iter().map(|k| k.as_str()).collect();
        write!(f, "{}", names.join(","))
    }
}

/// Error returned when parsing an unknown indicator name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorParseError(String);

impl std::fmt::Display for IndicatorParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid indicator '{}', expected one of: sma, ema, macd, rsi, bollinger, MovingAverage",
            self.0
        )
    }
}

impl std::error::Error for IndicatorParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse() {
        assert_eq!("RSI".parse::<IndicatorKind>().unwrap(), IndicatorKind::Rsi);
        assert_eq!(
            "BollingerBands".parse::<IndicatorKind>().unwrap(),
            IndicatorKind::Bollinger
        );
        assert!("vwap".parse::<IndicatorKind>().is_err());
    }

    #[test]
    fn test_parse_list_expands_moving_average() {
        let selection = IndicatorSelection::parse_list("RSI, MovingAverage").unwrap();
        assert_eq!(selection.len(), 3);
        assert!(selection.contains(IndicatorKind::Sma));
        assert!(selection.contains(IndicatorKind::Ema));
        assert!(selection.contains(IndicatorKind::Rsi));
        assert!(!selection.contains(IndicatorKind::Macd));
    }

    #[test]
    fn test_parse_list_empty_and_all() {
        assert!(IndicatorSelection::parse_list("").unwrap().is_empty());
        assert_eq!(IndicatorSelection::parse_list("all").unwrap().len(), 5);
        assert!(IndicatorSelection::parse_list("macd,nope").is_err());
    }

    #[test]
    fn test_display_is_ordered() {
        let selection = IndicatorSelection::new()
            .with(IndicatorKind::Bollinger)
            .with(IndicatorKind::Sma);
        assert_eq!(selection.to_string(), "sma,bollinger");
    }

    #[test]
    fn test_selection_from_str_round_trips_display() {
        let selection: IndicatorSelection = "MACD,bb".parse().unwrap();
        assert_eq!(selection.to_string(), "macd,bollinger");
        assert_eq!(selection.to_string().parse::<IndicatorSelection>().unwrap(), selection);
    }
}
