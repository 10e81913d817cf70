//! Data-quality checks for assembled series.

use ohlcdash_types::Series;

/// Counts of data-quality issues found in a series.
///
/// None of these are errors: upstream data is shown as delivered, and the
/// report only feeds logging and diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QualityReport {
    /// Bars violating `low <= open, close <= high`, with non-finite
    /// values or negative volume.
    pub inconsistent_bars: usize,
    /// Adjacent pairs whose timestamps decrease.
    pub out_of_order: usize,
    /// Adjacent pairs with identical timestamps.
    pub duplicate_timestamps: usize,
}

impl QualityReport {
    /// Returns true if no issue was found.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.inconsistent_bars == 0 && self.out_of_order == 0 && self.duplicate_timestamps == 0
    }
}

/// Scans a series for data-quality issues.
#[must_use]
pub fn check(series: &Series) -> QualityReport {
    let mut report = QualityReport {
        inconsistent_bars: series.iter().filter(|b| !b.is_consistent()).count(),
        ..Default::default()
    };

    for pair in series.bars().windows(2) {
        match pair[0].timestamp.cmp(&pair[1].timestamp) {
            std::cmp::Ordering::Less => {}
            std::cmp::Ordering::Equal => report.duplicate_timestamps += 1,
            std::cmp::Ordering::Greater => report.out_of_order += 1,
        }
    }

    report
}
