//! Fetch command implementation.
//!
//! Issues one request, assembles the rows, computes the selected
//! indicators and writes the series in the chosen format.

use crate::display::{output_writer, spinner};
use anyhow::{Context, Result};
use ohlcdash_lib::prelude::*;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Fetches and assembles one series, then applies the selected indicators.
pub(crate) async fn load_series(
    client: &ChartClient,
    engine: &IndicatorEngine,
    interval: Interval,
    selection: &IndicatorSelection,
    options: AssembleOptions,
    quiet: bool,
) -> Result<Series> {
    let progress = spinner(
        quiet,
        format!("Fetching {} bars from {}", interval.label(), client.config().endpoint),
    );
    let result = client.fetch(Some(interval)).await;
    progress.finish_and_clear();

    let raw = result.with_context(|| format!("Failed to fetch {interval} data"))?;
    let series = assemble(raw, &options.with_interval(Some(interval)))
        .context("Failed to assemble chart rows")?;

    info!(bars = series.len(), indicators = %selection, "Loaded series");

    Ok(engine.enrich(series, selection))
}

/// Fetch a series and write it in `format`.
#[allow(clippy::too_many_arguments)]
pub(crate) async fn fetch(
    client: &ChartClient,
    engine: &IndicatorEngine,
    interval: Interval,
    selection: IndicatorSelection,
    format: OutputFormat,
    output: Option<PathBuf>,
    options: AssembleOptions,
    quiet: bool,
) -> Result<()> {
    let series = load_series(client, engine, interval, &selection, options, quiet).await?;

    let mut writer = output_writer(output.as_deref())?;
    format.write_series(&series, &selection, &mut writer)?;
    writer.flush()?;

    if let Some(path) = output.filter(|_| !quiet) {
        println!("Wrote {} bars to {}", series.len(), path.display());
    }
    Ok(())
}
