//! Dashboard command implementation.
//!
//! An interactive loop over one [`Dashboard`] view: every selector change
//! starts a fetch, and the newest completed request is rendered as a table
//! of the most recent bars.

use crate::display::spinner;
use anyhow::{Context, Result};
use inquire::{MultiSelect, Select};
use ohlcdash_lib::prelude::*;
use ohlcdash_lib::{TextTableFormatter, ViewState};
use std::fmt;

#[derive(Clone, Copy)]
enum Action {
    Interval,
    ChartType,
    Indicators,
    Refresh,
    Quit,
}

impl Action {
    const ALL: [Self; 5] = [
        Self::Interval,
        Self::ChartType,
        Self::Indicators,
        Self::Refresh,
        Self::Quit,
    ];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Interval => "Change interval",
            Self::ChartType => "Change chart type",
            Self::Indicators => "Select indicators",
            Self::Refresh => "Refresh",
            Self::Quit => "Quit",
        };
        f.write_str(label)
    }
}

/// Run the interactive dashboard until the user quits.
pub(crate) async fn dashboard(
    client: ChartClient,
    engine: IndicatorEngine,
    options: AssembleOptions,
    rows: usize,
    quiet: bool,
) -> Result<()> {
    println!("Indicator windows: {}", engine.config());

    let source = HttpChartSource::new(client).with_options(options);
    let mut dashboard = Dashboard::new(source, engine);
    dashboard.dispatch(ViewEvent::Refresh);

    loop {
        if dashboard.has_in_flight() {
            let progress = spinner(
                quiet,
                format!("Loading {} data...", dashboard.state().interval().label()),
            );
            dashboard.settle().await;
            progress.finish_and_clear();
        }
        render(dashboard.state(), rows)?;

        // Prompts block; nothing is in flight at this point.
        let event = tokio::task::block_in_place(|| prompt(dashboard.state()))?;
        match event {
            Some(event) => {
                if dashboard.dispatch(event).is_none() {
                    println!("Selection unchanged.");
                }
            }
            None => break,
        }
    }
    Ok(())
}

fn prompt(state: &ViewState) -> Result<Option<ViewEvent>> {
    let action = Select::new("Action:", Action::ALL.to_vec())
        .prompt()
        .context("Failed to get selection")?;

    let event = match action {
        Action::Interval => {
            let options = Interval::all().to_vec();
            let cursor = options.iter().position(|i| *i == state.interval()).unwrap_or(0);
            let interval = Select::new("Interval:", options)
                .with_starting_cursor(cursor)
                .prompt()
                .context("Failed to get interval")?;
            ViewEvent::SetInterval(interval)
        }
        Action::ChartType => {
            let options = ChartType::all().to_vec();
            let cursor = options
                .iter()
                .position(|c| *c == state.chart_type())
                .unwrap_or(0);
            let chart_type = Select::new("Chart type:", options)
                .with_starting_cursor(cursor)
                .prompt()
                .context("Failed to get chart type")?;
            ViewEvent::SetChartType(chart_type)
        }
        Action::Indicators => {
            let options = IndicatorKind::all().to_vec();
            let selected: Vec<usize> = options
                .iter()
                .enumerate()
                .filter(|(_, kind)| state.selected_indicators().contains(**kind))
                .map(|(i, _)| i)
                .collect();
            let kinds = MultiSelect::new("Indicators:", options)
                .with_default(&selected)
                .prompt()
                .context("Failed to get indicators")?;
            ViewEvent::SetIndicators(kinds.into_iter().collect())
        }
        Action::Refresh => ViewEvent::Refresh,
        Action::Quit => return Ok(None),
    };
    Ok(Some(event))
}

fn render(state: &ViewState, rows: usize) -> Result<()> {
    let selection = state.selected_indicators();
    let indicators = if selection.is_empty() {
        "none".to_string()
    } else {
        selection.to_string()
    };

    println!();
    println!(
        "Interval: {}  Chart: {}  Indicators: {}",
        state.interval().label(),
        state.chart_type().label(),
        indicators
    );

    if let Some(line) = state.error_line() {
        println!("{line}");
        return Ok(());
    }
    let Some(series) = state.series() else {
        println!("No data loaded.");
        return Ok(());
    };

    let start = series.len().saturating_sub(rows);
    let tail = Series::new(series.bars()[start..].to_vec())
        .with_meta(series.meta().cloned())
        .with_interval(series.interval());

    let mut out = Vec::new();
    TextTableFormatter::new()
        .with_indicators(selection.clone())
        .write_series(&tail, &mut out)?;
    print!("{}", String::from_utf8_lossy(&out));
    println!("Showing last {} of {} bars", tail.len(), series.len());
    Ok(())
}
