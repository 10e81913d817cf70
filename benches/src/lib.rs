//! Benchmark fixtures for ohlcdash.

use chrono::{DateTime, Duration, Utc};
use ohlcdash_lib::{Bar, Interval, Series};

/// Bar counts the benchmarks run over.
pub const SIZES: [usize; 3] = [250, 2_500, 25_000];

/// Deterministic random-walk series of `len` daily bars.
///
/// Uses a fixed linear congruential generator so runs are comparable.
#[must_use]
pub fn synthetic_series(len: usize, seed: u64) -> Series {
    let start = DateTime::<Utc>::UNIX_EPOCH + Duration::days(19_000);
    let mut state = seed;
    let mut close = 100.0_f64;

    let bars = (0..len)
        .map(|i| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            let step = ((state >> 33) as f64 / f64::from(u32::MAX >> 1)) - 0.5;

            let open = close;
            close = (close + step * 2.0).max(1.0);
            let high = open.max(close) + step.abs();
            let low = (open.min(close) - step.abs()).max(0.5);
            let timestamp = start + Duration::days(i as i64);
            Bar::new(timestamp, open, high, low, close, 1_000_000.0 + (state >> 44) as f64)
        })
        .collect();

    Series::new(bars).with_interval(Some(Interval::Day1))
}

/// Closing prices of [`synthetic_series`].
#[must_use]
pub fn synthetic_closes(len: usize, seed: u64) -> Vec<f64> {
    synthetic_series(len, seed).closes()
}
