//! chart.js payloads for line, bar and area charts.
//!
//! The price dataset sits on the `y` axis together with the overlays
//! (moving averages, Bollinger bands). RSI and MACD get their own axes,
//! `rsi` and `macd`, so a consumer can stack them as separate panes.

use ohlcdash_types::{ChartType, IndicatorKind, IndicatorSelection, Series};
use serde::Serialize;

use crate::columns::{self, Column};

/// Price line colour.
pub const PRICE_COLOR: &str = "#ff7f0e";
/// SMA overlay colour.
pub const SMA_COLOR: &str = "#1f77b4";
/// EMA overlay colour.
pub const EMA_COLOR: &str = "#2ca02c";
/// Bollinger band colour.
pub const BOLLINGER_COLOR: &str = "purple";
/// RSI line colour.
pub const RSI_COLOR: &str = "#9467bd";
/// MACD line colour.
pub const MACD_COLOR: &str = "#d62728";
/// MACD signal colour.
pub const SIGNAL_COLOR: &str = "#17becf";
/// MACD histogram colour.
pub const HISTOGRAM_COLOR: &str = "#7f7f7f";

/// Axis shared by price and overlays.
pub const PRICE_AXIS: &str = "y";
/// RSI pane axis.
pub const RSI_AXIS: &str = "rsi";
/// MACD pane axis.
pub const MACD_AXIS: &str = "macd";

/// Labels plus datasets, ready to hand to a chart.js `data` property.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartJsData {
    /// One label per bar.
    pub labels: Vec<String>,
    /// Price and indicator datasets.
    pub datasets: Vec<Dataset>,
}

/// One chart.js dataset. Absent values serialize as `null`, which chart.js
/// draws as a gap.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Legend label.
    pub label: String,
    /// Dataset type (`line` or `bar`).
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// One value per label.
    pub data: Vec<Option<f64>>,
    /// Stroke colour.
    pub border_color: &'static str,
    /// Fill colour.
    pub background_color: &'static str,
    /// Whether the area under the line is filled.
    pub fill: bool,
    /// Axis the dataset is plotted against.
    #[serde(rename = "yAxisID")]
    pub y_axis_id: &'static str,
}

impl Dataset {
    fn line(
        label: impl Into<String>,
        column: Column,
        series: &Series,
        color: &'static str,
        axis: &'static str,
    ) -> Self {
        Self {
            label: label.into(),
            kind: "line",
            data: series.iter().map(|bar| column.value(bar)).collect(),
            border_color: color,
            background_color: color,
            fill: false,
            y_axis_id: axis,
        }
    }
}

/// Builds the chart.js payload for `series`.
///
/// `chart` picks how the close is drawn: a line, filled area or bars.
/// Candlestick types fall back to a close line; use
/// [`candle_points`](crate::candles::candle_points) for those.
#[must_use]
pub fn datasets(series: &Series, selection: &IndicatorSelection, chart: ChartType) -> ChartJsData {
    let date_format = columns::display_date_format(series);
    let labels = series
        .iter()
        .map(|bar| bar.timestamp.format(date_format).to_string())
        .collect();

    let symbol = series.symbol().unwrap_or("Close");
    let mut price = Dataset::line(symbol, Column::Price, series, PRICE_COLOR, PRICE_AXIS);
    match chart {
        ChartType::Area => price.fill = true,
        ChartType::Bar => price.kind = "bar",
        _ => {}
    }

    let mut out = vec![price];
    for kind in selection.iter() {
        match kind {
            IndicatorKind::Sma => {
                out.push(Dataset::line("SMA", Column::Sma, series, SMA_COLOR, PRICE_AXIS));
            }
            IndicatorKind::Ema => {
                out.push(Dataset::line("EMA", Column::Ema, series, EMA_COLOR, PRICE_AXIS));
            }
            IndicatorKind::Bollinger => {
                for (label, column) in [
                    ("BB Top", Column::BollingerTop),
                    ("BB Middle", Column::BollingerMiddle),
                    ("BB Bottom", Column::BollingerBottom),
                ] {
                    out.push(Dataset::line(label, column, series, BOLLINGER_COLOR, PRICE_AXIS));
                }
            }
            IndicatorKind::Rsi => {
                out.push(Dataset::line("RSI", Column::Rsi, series, RSI_COLOR, RSI_AXIS));
            }
            IndicatorKind::Macd => {
                out.push(Dataset::line("MACD", Column::Macd, series, MACD_COLOR, MACD_AXIS));
                out.push(Dataset::line(
                    "Signal",
                    Column::MacdSignal,
                    series,
                    SIGNAL_COLOR,
                    MACD_AXIS,
                ));
                let mut histogram = Dataset::line(
                    "Histogram",
                    Column::MacdHistogram,
                    series,
                    HISTOGRAM_COLOR,
                    MACD_AXIS,
                );
                histogram.kind = "bar";
                out.push(histogram);
            }
        }
    }

    ChartJsData { labels, datasets: out }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::test_support::series;

    #[test]
    fn test_price_only() {
        let data = datasets(&series(), &IndicatorSelection::new(), ChartType::Line);
        assert_eq!(data.labels, vec!["2024-01-02", "2024-01-03"]);
        assert_eq!(data.datasets.len(), 1);
        assert_eq!(data.datasets[0].label, "AAPL");
        assert_eq!(data.datasets[0].data, vec![Some(185.64), Some(184.25)]);
        assert!(!data.datasets[0].fill);
    }

    #[test]
    fn test_chart_type_styles_price() {
        let area = datasets(&series(), &IndicatorSelection::new(), ChartType::Area);
        assert!(area.datasets[0].fill);

        let bar = datasets(&series(), &IndicatorSelection::new(), ChartType::Bar);
        assert_eq!(bar.datasets[0].kind, "bar");
    }

    #[test]
    fn test_overlays_and_panes() {
        let selection = IndicatorSelection::all();
        let data = datasets(&series(), &selection, ChartType::Line);
        let labels: Vec<_> = data.datasets.iter().map(|d| d.label.as_str()).collect();

        assert_eq!(
            labels,
            vec![
                "AAPL", "SMA", "EMA", "MACD", "Signal", "Histogram", "RSI", "BB Top", "BB Middle",
                "BB Bottom"
            ]
        );
        let sma = &data.datasets[1];
        assert_eq!(sma.data, vec![None, Some(184.945)]);
        assert_eq!(data.datasets[6].y_axis_id, RSI_AXIS);
    }

    #[test]
    fn test_serialized_shape() {
        let data = datasets(&series(), &IndicatorSelection::new(), ChartType::Line);
        let json = serde_json::to_value(&data).unwrap();
        let first = &json["datasets"][0];
        assert_eq!(first["borderColor"], PRICE_COLOR);
        assert_eq!(first["yAxisID"], "y");
        assert_eq!(first["type"], "line");
    }
}
