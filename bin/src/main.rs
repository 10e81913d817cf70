//! ohlcdash CLI - stock chart data with technical indicators.

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use ohlcdash_lib::prelude::*;
use ohlcdash_lib::DEFAULT_ENDPOINT;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;

use display::GapArg;

#[derive(Parser)]
#[command(name = "ohlcdash")]
#[command(about = "Stock chart data with technical indicators", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Base URL of the finance-chart endpoint
    #[arg(long, env = "OHLCDASH_ENDPOINT", default_value = DEFAULT_ENDPOINT, global = true)]
    endpoint: String,

    /// Whole-request timeout in seconds
    #[arg(long, env = "OHLCDASH_TIMEOUT_SECS", default_value_t = 10, global = true)]
    timeout_secs: u64,

    /// Timestamps are in milliseconds rather than seconds
    #[arg(long, global = true)]
    millis: bool,

    #[command(flatten)]
    windows: WindowArgs,
}

/// Indicator window overrides.
#[derive(Args)]
struct WindowArgs {
    /// SMA window
    #[arg(long, default_value_t = IndicatorConfig::DEFAULT_SMA.get(), global = true)]
    sma: usize,

    /// EMA window
    #[arg(long, default_value_t = IndicatorConfig::DEFAULT_EMA.get(), global = true)]
    ema: usize,

    /// MACD fast EMA window
    #[arg(long, default_value_t = IndicatorConfig::DEFAULT_MACD_FAST.get(), global = true)]
    macd_fast: usize,

    /// MACD slow EMA window
    #[arg(long, default_value_t = IndicatorConfig::DEFAULT_MACD_SLOW.get(), global = true)]
    macd_slow: usize,

    /// MACD signal window
    #[arg(long, default_value_t = IndicatorConfig::DEFAULT_MACD_SIGNAL.get(), global = true)]
    macd_signal: usize,

    /// RSI window
    #[arg(long, default_value_t = IndicatorConfig::DEFAULT_RSI.get(), global = true)]
    rsi: usize,

    /// Bollinger Bands window
    #[arg(long, default_value_t = IndicatorConfig::DEFAULT_BOLLINGER.get(), global = true)]
    bb_window: usize,

    /// Bollinger Bands standard-deviation multiplier
    #[arg(long, default_value_t = IndicatorConfig::DEFAULT_BOLLINGER_MULTIPLIER, global = true)]
    bb_multiplier: f64,
}

impl WindowArgs {
    fn engine(&self) -> Result<IndicatorEngine> {
        let config = IndicatorConfig::builder()
            .sma(self.sma)
            .ema(self.ema)
            .macd(self.macd_fast, self.macd_slow, self.macd_signal)
            .rsi(self.rsi)
            .bollinger(self.bb_window, self.bb_multiplier)
            .build()?;
        Ok(IndicatorEngine::new(config)?)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch bars, compute indicators and write them out
    Fetch {
        /// Bar interval (1m, 5m, 15m, 30m, 1h, 1d, 1w, 1mo, 1y)
        #[arg(short, long, default_value = "1d")]
        interval: Interval,

        /// Comma-separated indicators (sma, ema, macd, rsi, bollinger, MovingAverage, all)
        #[arg(long)]
        indicators: Option<IndicatorSelection>,

        /// Output format (table, csv, json, ndjson)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,

        /// Output file path. Defaults to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Handling of bars with missing quote values
        #[arg(long, value_enum, default_value = "reject")]
        gaps: GapArg,
    },

    /// Write chart datasets as JSON
    Chart {
        /// Bar interval
        #[arg(short, long, default_value = "1d")]
        interval: Interval,

        /// Comma-separated indicators
        #[arg(long)]
        indicators: Option<IndicatorSelection>,

        /// Chart type (line, bar, area, candle, hollow-candle, colored-bar)
        #[arg(short, long, default_value = "line")]
        chart_type: ChartType,

        /// Output file path. Defaults to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Handling of bars with missing quote values
        #[arg(long, value_enum, default_value = "reject")]
        gaps: GapArg,
    },

    /// Print the embedded advanced-chart widget configuration
    Widget {
        /// Exchange-qualified symbol, e.g. NASDAQ:AAPL
        #[arg(short, long)]
        symbol: Option<String>,

        /// Widget theme (dark, light)
        #[arg(short, long)]
        theme: Option<String>,

        /// Initial visible range, e.g. YTD, 12M
        #[arg(short, long)]
        range: Option<String>,

        /// Print the HTML embed snippet instead of the JSON options
        #[arg(long)]
        html: bool,
    },

    /// List supported intervals
    Intervals,

    /// Interactive dashboard
    Dashboard {
        /// Number of most recent bars to show
        #[arg(short, long, default_value_t = 15)]
        rows: usize,

        /// Handling of bars with missing quote values
        #[arg(long, value_enum, default_value = "reject")]
        gaps: GapArg,
    },
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn client(endpoint: String, timeout_secs: u64) -> Result<ChartClient> {
    let config = ClientConfig {
        endpoint,
        timeout: Duration::from_secs(timeout_secs),
        ..Default::default()
    };
    Ok(ChartClient::new(config)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Fetch {
            interval,
            indicators,
            format,
            output,
            gaps,
        } => {
            let options = display::assemble_options(gaps, cli.millis);
            commands::fetch::fetch(
                &client(cli.endpoint, cli.timeout_secs)?,
                &cli.windows.engine()?,
                interval,
                indicators.unwrap_or_default(),
                format,
                output,
                options,
                cli.quiet,
            )
            .await
        }
        Commands::Chart {
            interval,
            indicators,
            chart_type,
            output,
            gaps,
        } => {
            commands::chart::chart(
                &client(cli.endpoint, cli.timeout_secs)?,
                &cli.windows.engine()?,
                interval,
                indicators.unwrap_or_default(),
                chart_type,
                output,
                display::assemble_options(gaps, cli.millis),
                cli.quiet,
            )
            .await
        }
        Commands::Widget {
            symbol,
            theme,
            range,
            html,
        } => commands::widget::widget(symbol, theme, range, html),
        Commands::Intervals => {
            commands::intervals::list_intervals();
            Ok(())
        }
        Commands::Dashboard { rows, gaps } => {
            commands::dashboard::dashboard(
                client(cli.endpoint, cli.timeout_secs)?,
                cli.windows.engine()?,
                display::assemble_options(gaps, cli.millis),
                rows,
                cli.quiet,
            )
            .await
        }
    }
}
