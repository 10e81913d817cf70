//! Row columns shared by the CSV and table formatters.

use ohlcdash_types::{Bar, IndicatorKind, IndicatorSelection, Series};

/// One column of a row-oriented rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// Bar timestamp.
    Date,
    /// Closing price.
    Price,
    /// Traded volume.
    Volume,
    /// Opening price.
    Open,
    /// Highest price.
    High,
    /// Lowest price.
    Low,
    /// SMA value.
    Sma,
    /// EMA value.
    Ema,
    /// MACD line.
    Macd,
    /// MACD signal line.
    MacdSignal,
    /// MACD histogram.
    MacdHistogram,
    /// RSI value.
    Rsi,
    /// Upper Bollinger band.
    BollingerTop,
    /// Middle Bollinger band.
    BollingerMiddle,
    /// Lower Bollinger band.
    BollingerBottom,
}

impl Column {
    /// Columns present in every rendering, in order.
    pub const BASE: [Self; 6] = [
        Self::Date,
        Self::Price,
        Self::Volume,
        Self::Open,
        Self::High,
        Self::Low,
    ];

    /// Machine-readable header (CSV).
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Price => "price",
            Self::Volume => "volume",
            Self::Open => "open",
            Self::High => "high",
            Self::Low => "low",
            Self::Sma => "sma",
            Self::Ema => "ema",
            Self::Macd => "macd",
            Self::MacdSignal => "macd_signal",
            Self::MacdHistogram => "macd_histogram",
            Self::Rsi => "rsi",
            Self::BollingerTop => "bb_top",
            Self::BollingerMiddle => "bb_middle",
            Self::BollingerBottom => "bb_bottom",
        }
    }

    /// Human-readable header (table).
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Price => "Stock Price",
            Self::Volume => "Volume",
            Self::Open => "Open",
            Self::High => "High",
            Self::Low => "Low",
            Self::Sma => "SMA",
            Self::Ema => "EMA",
            Self::Macd => "MACD",
            Self::MacdSignal => "Signal",
            Self::MacdHistogram => "Histogram",
            Self::Rsi => "RSI",
            Self::BollingerTop => "BB Top",
            Self::BollingerMiddle => "BB Middle",
            Self::BollingerBottom => "BB Bottom",
        }
    }

    /// Columns contributed by one indicator.
    #[must_use]
    pub const fn for_indicator(kind: IndicatorKind) -> &'static [Self] {
        match kind {
            IndicatorKind::Sma => &[Self::Sma],
            IndicatorKind::Ema => &[Self::Ema],
            IndicatorKind::Macd => &[Self::Macd, Self::MacdSignal, Self::MacdHistogram],
            IndicatorKind::Rsi => &[Self::Rsi],
            IndicatorKind::Bollinger => {
                &[Self::BollingerTop, Self::BollingerMiddle, Self::BollingerBottom]
            }
        }
    }

    /// Numeric value of this column for `bar`; `None` for the date column
    /// and for absent derived values.
    #[must_use]
    pub fn value(&self, bar: &Bar) -> Option<f64> {
        match self {
            Self::Date => None,
            Self::Price => Some(bar.close),
            Self::Volume => Some(bar.volume),
            Self::Open => Some(bar.open),
            Self::High => Some(bar.high),
            Self::Low => Some(bar.low),
            Self::Sma => bar.sma,
            Self::Ema => bar.ema,
            Self::Macd => bar.macd.map(|m| m.macd),
            Self::MacdSignal => bar.macd.map(|m| m.signal),
            Self::MacdHistogram => bar.macd.map(|m| m.histogram),
            Self::Rsi => bar.rsi,
            Self::BollingerTop => bar.bollinger.map(|b| b.top),
            Self::BollingerMiddle => bar.bollinger.map(|b| b.middle),
            Self::BollingerBottom => bar.bollinger.map(|b| b.bottom),
        }
    }

    /// Renders the cell for `bar`. Prices and indicators use three
    /// decimals, volume none, absent values an empty string.
    pub(crate) fn render(&self, bar: &Bar, date_format: &str) -> String {
        match self {
            Self::Date => bar.timestamp.format(date_format).to_string(),
            Self::Volume => format!("{:.0}", bar.volume),
            _ => self.value(bar).map(|v| format!("{v:.3}")).unwrap_or_default(),
        }
    }
}

/// Resolves the column list for `series`.
///
/// With an explicit selection every selected indicator gets its columns,
/// even if no bar has enough history. Without one, derived columns are
/// included when at least one bar carries the value.
pub(crate) fn resolve(series: &Series, selection: Option<&IndicatorSelection>) -> Vec<Column> {
    let kinds: Vec<IndicatorKind> = match selection {
        Some(selection) => selection.iter().collect(),
        None => IndicatorKind::all()
            .iter()
            .copied()
            .filter(|kind| series.iter().any(|bar| has_indicator(bar, *kind)))
            .collect(),
    };

    Column::BASE
        .into_iter()
        .chain(kinds.into_iter().flat_map(|kind| Column::for_indicator(kind).iter().copied()))
        .collect()
}

const fn has_indicator(bar: &Bar, kind: IndicatorKind) -> bool {
    match kind {
        IndicatorKind::Sma => bar.sma.is_some(),
        IndicatorKind::Ema => bar.ema.is_some(),
        IndicatorKind::Macd => bar.macd.is_some(),
        IndicatorKind::Rsi => bar.rsi.is_some(),
        IndicatorKind::Bollinger => bar.bollinger.is_some(),
    }
}

/// Human date format for a series: minutes for intraday data, days
/// otherwise.
pub(crate) fn display_date_format(series: &Series) -> &'static str {
    if series.interval().is_some_and(|interval| interval.is_intraday()) {
        "%Y-%m-%d %H:%M"
    } else {
        "%Y-%m-%d"
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{TimeZone, Utc};
    use ohlcdash_types::{Bar, BollingerValue, ChartMeta, Interval, Series};

    pub(crate) fn series() -> Series {
        let t0 = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        let t1 = Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap();
        let first = Bar::new(t0, 187.15, 188.44, 183.885, 185.64, 82_488_700.0);
        let mut second = Bar::new(t1, 184.22, 185.88, 183.43, 184.25, 58_414_500.0);
        second.sma = Some(184.945);
        second.bollinger = Some(BollingerValue {
            top: 186.335,
            middle: 184.945,
            bottom: 183.555,
        });

        let meta = ChartMeta {
            symbol: Some("AAPL".to_string()),
            ..ChartMeta::default()
        };
        Series::new(vec![first, second])
            .with_meta(Some(meta))
            .with_interval(Some(Interval::Day1))
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::series;
    use super::*;

    #[test]
    fn test_inferred_columns() {
        let columns = resolve(&series(), None);
        assert_eq!(columns[..6], Column::BASE);
        assert_eq!(
            columns[6..],
            [
                Column::Sma,
                Column::BollingerTop,
                Column::BollingerMiddle,
                Column::BollingerBottom
            ]
        );
    }

    #[test]
    fn test_selected_columns_without_values() {
        let selection = IndicatorSelection::new().with(IndicatorKind::Rsi);
        let columns = resolve(&series(), Some(&selection));
        assert_eq!(columns.last(), Some(&Column::Rsi));
        assert_eq!(columns.len(), 7);
    }

    #[test]
    fn test_render_cells() {
        let s = series();
        let bar = &s.bars()[0];
        assert_eq!(Column::Date.render(bar, "%Y-%m-%d"), "2024-01-02");
        assert_eq!(Column::Price.render(bar, ""), "185.640");
        assert_eq!(Column::Low.render(bar, ""), "183.885");
        assert_eq!(Column::Volume.render(bar, ""), "82488700");
        assert_eq!(Column::Sma.render(bar, ""), "");
    }
}
