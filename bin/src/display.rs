//! Display utilities and output plumbing for the ohlcdash CLI.

use anyhow::{Context, Result};
use clap::ValueEnum;
use indicatif::{ProgressBar, ProgressStyle};
use ohlcdash_lib::{AssembleOptions, GapPolicy, TimestampUnit};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

/// Handling of bars whose quote values contain `null`.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum GapArg {
    /// Fail the fetch
    Reject,
    /// Drop the affected bars
    Skip,
}

impl From<GapArg> for GapPolicy {
    fn from(arg: GapArg) -> Self {
        match arg {
            GapArg::Reject => Self::Reject,
            GapArg::Skip => Self::Skip,
        }
    }
}

/// Builds assembly options from the command-line flags.
pub(crate) fn assemble_options(gaps: GapArg, millis: bool) -> AssembleOptions {
    let unit = if millis {
        TimestampUnit::Milliseconds
    } else {
        TimestampUnit::Seconds
    };
    AssembleOptions::default()
        .with_gaps(gaps.into())
        .with_timestamp_unit(unit)
}

/// Spinner shown while a request is outstanding. Hidden in quiet mode.
pub(crate) fn spinner(quiet: bool, message: String) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .expect("Invalid progress template"),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Opens `output` for writing, or stdout when no path is given.
pub(crate) fn output_writer(output: Option<&Path>) -> Result<Box<dyn Write + Send>> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(std::io::stdout()))),
    }
}
