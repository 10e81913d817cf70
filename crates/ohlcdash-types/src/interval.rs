//! Chart request interval definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Bar interval requested from the finance-chart endpoint.
///
/// The wire strings (`1m`, `5m`, ..., `1y`) are passed verbatim as the
/// `interval` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Interval {
    /// 1-minute bars.
    #[serde(rename = "1m")]
    Minute1,
    /// 5-minute bars.
    #[serde(rename = "5m")]
    Minute5,
    /// 15-minute bars.
    #[serde(rename = "15m")]
    Minute15,
    /// 30-minute bars.
    #[serde(rename = "30m")]
    Minute30,
    /// 1-hour bars.
    #[serde(rename = "1h")]
    Hour1,
    /// Daily bars.
    #[default]
    #[serde(rename = "1d")]
    Day1,
    /// Weekly bars.
    #[serde(rename = "1w")]
    Week1,
    /// Monthly bars.
    #[serde(rename = "1mo")]
    Month1,
    /// Yearly bars.
    #[serde(rename = "1y")]
    Year1,
}

impl Interval {
    /// Returns the nominal duration in seconds.
    ///
    /// Months and years use 30 and 365 days respectively.
    #[must_use]
    pub const fn seconds(&self) -> u64 {
        match self {
            Self::Minute1 => 60,
            Self::Minute5 => 300,
            Self::Minute15 => 900,
            Self::Minute30 => 1800,
            Self::Hour1 => 3600,
            Self::Day1 => 86_400,
            Self::Week1 => 604_800,
            Self::Month1 => 2_592_000,
            Self::Year1 => 31_536_000,
        }
    }

    /// Returns true for sub-daily intervals.
    #[must_use]
    pub const fn is_intraday(&self) -> bool {
        self.seconds() < 86_400
    }

    /// Returns the wire string used in the query parameter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Minute1 => "1m",
            Self::Minute5 => "5m",
            Self::Minute15 => "15m",
            Self::Minute30 => "30m",
            Self::Hour1 => "1h",
            Self::Day1 => "1d",
            Self::Week1 => "1w",
            Self::Month1 => "1mo",
            Self::Year1 => "1y",
        }
    }

    /// Returns a human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Minute1 => "1 Minute",
            Self::Minute5 => "5 Minutes",
            Self::Minute15 => "15 Minutes",
            Self::Minute30 => "30 Minutes",
            Self::Hour1 => "1 Hour",
            Self::Day1 => "1 Day",
            Self::Week1 => "1 Week",
            Self::Month1 => "1 Month",
            Self::Year1 => "1 Year",
        }
    }

    /// Returns all available intervals.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Minute1,
            Self::Minute5,
            Self::Minute15,
            Self::Minute30,
            Self::Hour1,
            Self::Day1,
            Self::Week1,
            Self::Month1,
            Self::Year1,
        ]
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Interval {
    type Err = IntervalParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1m" | "minute" | "minute1" => Ok(Self::Minute1),
            "5m" | "minute5" => Ok(Self::Minute5),
            "15m" | "minute15" => Ok(Self::Minute15),
            "30m" | "minute30" => Ok(Self::Minute30),
            "1h" | "60m" | "hour" | "hour1" => Ok(Self::Hour1),
            "1d" | "day" | "daily" => Ok(Self::Day1),
            "1w" | "1wk" | "week" | "weekly" => Ok(Self::Week1),
            "1mo" | "month" | "monthly" => Ok(Self::Month1),
            "1y" | "year" | "yearly" => Ok(Self::Year1),
            _ => Err(IntervalParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid interval string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalParseError(String);

impl std::fmt::Display for IntervalParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid interval '{}', expected one of: 1m, 5m, 15m, 30m, 1h, 1d, 1w, 1mo, 1y",
            self.0
        )
    }
}

impl std::error::Error for IntervalParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_wire_strings() {
        let wire: Vec<_> = Interval::all().iter().map(Interval::as_str).collect();
        assert_eq!(
            wire,
            ["1m", "5m", "15m", "30m", "1h", "1d", "1w", "1mo", "1y"]
        );
    }

    #[test]
    fn test_interval_parse() {
        assert_eq!("1m".parse::<Interval>().unwrap(), Interval::Minute1);
        assert_eq!("1H".parse::<Interval>().unwrap(), Interval::Hour1);
        assert_eq!("1mo".parse::<Interval>().unwrap(), Interval::Month1);
        assert_eq!("daily".parse::<Interval>().unwrap(), Interval::Day1);
        assert!("2d".parse::<Interval>().is_err());
    }

    #[test]
    fn test_interval_roundtrip_through_display() {
        for interval in Interval::all() {
            assert_eq!(interval.to_string().parse::<Interval>().unwrap(), *interval);
        }
    }

    #[test]
    fn test_interval_serde_uses_wire_strings() {
        let json = serde_json::to_string(&Interval::Month1).unwrap();
        assert_eq!(json, "\"1mo\"");
        let parsed: Interval = serde_json::from_str("\"15m\"").unwrap();
        assert_eq!(parsed, Interval::Minute15);
    }

    #[test]
    fn test_default_and_intraday() {
        assert_eq!(Interval::default(), Interval::Day1);
        assert!(Interval::Hour1.is_intraday());
        assert!(!Interval::Day1.is_intraday());
    }
}
