//! CSV output format.

use ohlcdash_types::{IndicatorSelection, Series};
use std::io::Write;

use crate::columns::{self, Column};
use crate::{FormatError, Formatter};

/// CSV formatter.
///
/// Columns are `date, price, volume, open, high, low` followed by the
/// columns of each derived indicator.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
    /// Fixed indicator columns; inferred from the bars when unset.
    indicators: Option<IndicatorSelection>,
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
            indicators: None,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Emits exactly the columns of `selection`.
    #[must_use]
    pub fn with_indicators(mut self, selection: IndicatorSelection) -> Self {
        self.indicators = Some(selection);
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
            indicators: None,
        }
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for CsvFormatter {
    fn write_series<W: Write + Send>(
        &self,
        series: &Series,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let columns = columns::resolve(series, self.indicators.as_ref());
        let delimiter = self.delimiter.to_string();

        if self.include_header {
            let header: Vec<&str> = columns.iter().map(Column::key).collect();
            writeln!(writer, "{}", header.join(delimiter.as_str()))?;
        }

        for bar in series {
            let row: Vec<String> = columns
                .iter()
                .map(|column| column.render(bar, "%Y-%m-%dT%H:%M:%SZ"))
                .collect();
            writeln!(writer, "{}", row.join(delimiter.as_str()))?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        if self.delimiter == '\t' { "tsv" } else { "csv" }
    }
}
