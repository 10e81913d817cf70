//! Aligned plain-text table.

use ohlcdash_types::{IndicatorSelection, Series};
use std::io::Write;

use crate::columns::{self, Column};
use crate::{FormatError, Formatter};

/// Terminal table formatter.
///
/// Writes a title line (`"<SYMBOL> Stock Data Table"` when the symbol is
/// known), a header, a rule and one row per bar. The date column is
/// left-aligned, every numeric column right-aligned.
#[derive(Debug, Clone)]
pub struct TextTableFormatter {
    title: bool,
    indicators: Option<IndicatorSelection>,
}

impl Default for TextTableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TextTableFormatter {
    /// Creates a table formatter that prints a title.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            title: true,
            indicators: None,
        }
    }

    /// Sets whether to print the title line.
    #[must_use]
    pub const fn with_title(mut self, title: bool) -> Self {
        self.title = title;
        self
    }

    /// Emits exactly the columns of `selection`.
    #[must_use]
    pub fn with_indicators(mut self, selection: IndicatorSelection) -> Self {
        self.indicators = Some(selection);
        self
    }

    /// Title for `series`.
    #[must_use]
    pub fn title_for(series: &Series) -> String {
        series
            .symbol()
            .map_or_else(|| "Stock Data Table".to_string(), |s| format!("{s} Stock Data Table"))
    }
}

impl Formatter for TextTableFormatter {
    fn write_series<W: Write + Send>(
        &self,
        series: &Series,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let columns = columns::resolve(series, self.indicators.as_ref());
        let date_format = columns::display_date_format(series);

        let rows: Vec<Vec<String>> = series
            .iter()
            .map(|bar| columns.iter().map(|c| c.render(bar, date_format)).collect())
            .collect();

        let widths: Vec<usize> = columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                rows.iter()
                    .map(|row| row[i].len())
                    .chain(std::iter::once(column.title().len()))
                    .max()
                    .unwrap_or_default()
            })
            .collect();

        if self.title {
            writeln!(writer, "{}", Self::title_for(series))?;
            writeln!(writer)?;
        }

        let header: Vec<String> = columns
            .iter()
            .zip(&widths)
            .map(|(column, &width)| pad(column, column.title(), width))
            .collect();
        writeln!(writer, "{}", header.join("  ").trim_end())?;

        let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        writeln!(writer, "{}", rule.join("  "))?;

        for row in &rows {
            let cells: Vec<String> = columns
                .iter()
                .zip(row)
                .zip(&widths)
                .map(|((column, cell), &width)| pad(column, cell, width))
                .collect();
            writeln!(writer, "{}", cells.join("  ").trim_end())?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        "txt"
    }
}

fn pad(column: &Column, text: &str, width: usize) -> String {
    if *column == Column::Date {
        format!("{text:<width$}")
    } else {
        format!("{text:>width$}")
    }
}
