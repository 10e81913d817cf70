//! Chart command implementation.
//!
//! Line, bar and area charts are written as Chart.js datasets. The
//! candlestick family is written as styled candle points.

use crate::commands::fetch::load_series;
use crate::display::output_writer;
use anyhow::Result;
use ohlcdash_lib::chartjs::datasets;
use ohlcdash_lib::candles::styled_candle_points;
use ohlcdash_lib::prelude::*;
use std::io::Write;
use std::path::PathBuf;

/// Fetch a series and write the chart payload for `chart_type`.
#[allow(clippy::too_many_arguments)]
pub(crate) async fn chart(
    client: &ChartClient,
    engine: &IndicatorEngine,
    interval: Interval,
    selection: IndicatorSelection,
    chart_type: ChartType,
    output: Option<PathBuf>,
    options: AssembleOptions,
    quiet: bool,
) -> Result<()> {
    let series = load_series(client, engine, interval, &selection, options, quiet).await?;

    let mut writer = output_writer(output.as_deref())?;
    if chart_type.is_candlestick() {
        serde_json::to_writer_pretty(&mut writer, &styled_candle_points(&series, chart_type))?;
    } else {
        serde_json::to_writer_pretty(&mut writer, &datasets(&series, &selection, chart_type))?;
    }
    writeln!(writer)?;
    writer.flush()?;

    if let Some(path) = output.filter(|_| !quiet) {
        println!(
            "Wrote {} chart for {} bars to {}",
            chart_type.label(),
            series.len(),
            path.display()
        );
    }
    Ok(())
}
