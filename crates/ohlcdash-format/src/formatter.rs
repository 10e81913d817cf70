//! Output format abstraction.

use ohlcdash_types::{IndicatorSelection, OhlcdashError, Series};
use std::io::Write;
use thiserror::Error;

use crate::{CsvFormatter, JsonFormatter, TextTableFormatter};

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// CSV format.
    Csv,
    /// JSON array format.
    Json,
    /// Newline-delimited JSON format.
    Ndjson,
    /// Aligned plain-text table.
    #[default]
    Table,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
            Self::Table => "txt",
        }
    }

    /// Returns all available formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Csv, Self::Json, Self::Ndjson, Self::Table]
    }

    /// Writes `series` in this format.
    ///
    /// `selection` fixes the derived columns of row formats; JSON output
    /// always carries whatever the bars hold.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_series<W: Write + Send>(
        &self,
        series: &Series,
        selection: &IndicatorSelection,
        writer: W,
    ) -> Result<(), FormatError> {
        match self {
            Self::Csv => CsvFormatter::new()
                .with_indicators(selection.clone())
                .write_series(series, writer),
            Self::Json => JsonFormatter::new().write_series(series, writer),
            Self::Ndjson => JsonFormatter::ndjson().write_series(series, writer),
            Self::Table => TextTableFormatter::new()
                .with_indicators(selection.clone())
                .write_series(series, writer),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Table => "table",
            other => other.extension(),
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "ndjson" | "jsonl" => Ok(Self::Ndjson),
            "table" | "txt" | "text" => Ok(Self::Table),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Unknown output format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<FormatError> for OhlcdashError {
    fn from(err: FormatError) -> Self {
        match err {
            FormatError::Io(err) => Self::Io(err),
            FormatError::Json(err) => Self::Json(err),
            other => Self::Format(other.to_string()),
        }
    }
}

/// Trait for row-oriented output formatters.
pub trait Formatter: Send + Sync {
    /// Writes every bar of `series` to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_series<W: Write + Send>(&self, series: &Series, writer: W) -> Result<(), FormatError>;

    /// Returns the file extension for this format.
    fn extension(&self) -> &str;
}
