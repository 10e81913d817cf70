//! Zipping parallel quote arrays into bars.

use chrono::{DateTime, Utc};
use ohlcdash_types::{Bar, Interval, OhlcdashError, RawSeries, Series};
use thiserror::Error;
use tracing::{debug, warn};

use crate::check;

/// Unit of the raw timestamp values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimestampUnit {
    /// Seconds since the Unix epoch.
    #[default]
    Seconds,
    /// Milliseconds since the Unix epoch.
    Milliseconds,
}

impl TimestampUnit {
    /// Converts a raw value to a UTC instant, or `None` if out of range.
    #[must_use]
    pub fn to_datetime(self, value: i64) -> Option<DateTime<Utc>> {
        match self {
            Self::Seconds => DateTime::from_timestamp(value, 0),
            Self::Milliseconds => DateTime::from_timestamp_millis(value),
        }
    }
}

/// What to do with an index whose quote values contain `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GapPolicy {
    /// Fail with [`AssembleError::MissingValue`].
    #[default]
    Reject,
    /// Drop the whole bar at that index.
    Skip,
}

/// Options controlling assembly.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssembleOptions {
    /// Unit of the raw timestamps.
    pub timestamp_unit: TimestampUnit,
    /// Handling of `null` quote values.
    pub gaps: GapPolicy,
    /// Interval to record on the resulting series.
    pub interval: Option<Interval>,
}

impl AssembleOptions {
    /// Sets the null-handling policy.
    #[must_use]
    pub const fn with_gaps(mut self, gaps: GapPolicy) -> Self {
        self.gaps = gaps;
        self
    }

    /// Sets the timestamp unit.
    #[must_use]
    pub const fn with_timestamp_unit(mut self, unit: TimestampUnit) -> Self {
        self.timestamp_unit = unit;
        self
    }

    /// Sets the interval recorded on the series.
    #[must_use]
    pub const fn with_interval(mut self, interval: Option<Interval>) -> Self {
        self.interval = interval;
        self
    }
}

/// Errors that can occur during assembly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssembleError {
    /// A quote array does not have one entry per timestamp.
    #[error("{field} has {actual} entries, expected {expected} (one per timestamp)")]
    LengthMismatch {
        /// Name of the offending array.
        field: &'static str,
        /// Number of timestamps.
        expected: usize,
        /// Length of the offending array.
        actual: usize,
    },

    /// A timestamp cannot be represented as a calendar instant.
    #[error("timestamp {value} at index {index} is out of range")]
    InvalidTimestamp {
        /// Position in the input.
        index: usize,
        /// Raw timestamp value.
        value: i64,
    },

    /// A quote value is `null` and the gap policy rejects it.
    #[error("{field} is null at index {index}")]
    MissingValue {
        /// Name of the array holding the null.
        field: &'static str,
        /// Position in the input.
        index: usize,
    },
}

impl From<AssembleError> for OhlcdashError {
    fn from(err: AssembleError) -> Self {
        Self::MalformedSeries(err.to_string())
    }
}

/// Zips the parallel arrays of `raw` into an ordered [`Series`].
///
/// Bars keep the input order. Every quote array must have exactly one
/// entry per timestamp; a mismatch fails immediately instead of truncating
/// or padding. Derived indicator fields are left unset.
///
/// # Errors
///
/// Returns [`AssembleError::LengthMismatch`] on unequal array lengths,
/// [`AssembleError::InvalidTimestamp`] for unrepresentable timestamps and,
/// under [`GapPolicy::Reject`], [`AssembleError::MissingValue`] for nulls.
pub fn assemble(raw: RawSeries, options: &AssembleOptions) -> Result<Series, AssembleError> {
    let expected = raw.timestamps.len();
    let columns: [(&'static str, &[Option<f64>]); 5] = [
        ("open", &raw.open),
        ("high", &raw.high),
        ("low", &raw.low),
        ("close", &raw.close),
        ("volume", &raw.volume),
    ];

    for (field, values) in columns {
        if values.len() != expected {
            return Err(AssembleError::LengthMismatch {
                field,
                expected,
                actual: values.len(),
            });
        }
    }

    let mut bars = Vec::with_capacity(expected);
    let mut skipped = 0usize;

    for (index, &value) in raw.timestamps.iter().enumerate() {
        let timestamp = options
            .timestamp_unit
            .to_datetime(value)
            .ok_or(AssembleError::InvalidTimestamp { index, value })?;

        let row = columns.map(|(_, values)| values[index]);
        match row {
            [Some(open), Some(high), Some(low), Some(close), Some(volume)] => {
                bars.push(Bar::new(timestamp, open, high, low, close, volume));
            }
            _ if options.gaps == GapPolicy::Skip => skipped += 1,
            _ => {
                let field = columns
                    .iter()
                    .zip(row)
                    .find_map(|((name, _), v)| v.is_none().then_some(*name))
                    .unwrap_or("quote");
                return Err(AssembleError::MissingValue { field, index });
            }
        }
    }

    if skipped > 0 {
        debug!(skipped, kept = bars.len(), "dropped bars with null quote values");
    }

    let series = Series::new(bars)
        .with_meta(raw.meta)
        .with_interval(options.interval);

    let report = check(&series);
    if !report.is_clean() {
        warn!(
            inconsistent = report.inconsistent_bars,
            out_of_order = report.out_of_order,
            duplicates = report.duplicate_timestamps,
            "series has data-quality issues"
        );
    }

    Ok(series)
}
