use ohlcdash_types::MacdValue;
use std::num::NonZero;

use crate::ema;

/// Moving average convergence divergence.
///
/// - MACD line: `EMA(fast) − EMA(slow)`, defined once both EMAs are.
/// - Signal line: EMA(`signal`) of the MACD line, seeded with the SMA of
///   its first `signal` defined values.
/// - Histogram: MACD line − signal line.
///
/// A [`MacdValue`] is emitted only where all three are defined, i.e. from
/// index `max(fast, slow) + signal − 2`.
#[must_use]
pub fn macd(
    closes: &[f64],
    fast: NonZero<usize>,
    slow: NonZero<usize>,
    signal: NonZero<usize>,
) -> Vec<Option<MacdValue>> {
    let mut out = vec![None; closes.len()];

    let line: Vec<Option<f64>> = ema(closes, fast)
        .into_iter()
        .zip(ema(closes, slow))
        .map(|(f, s)| Some(f? - s?))
        .collect();

    // Both EMAs stay defined once seeded, so the line is contiguous.
    let Some(start) = line.iter().position(Option::is_some) else {
        return out;
    };
    let dense: Vec<f64> = line[start..].iter().flatten().copied().collect();
    let signal_line = ema(&dense, signal);

    for ((slot, &macd), signal) in out[start..].iter_mut().zip(&dense).zip(signal_line) {
        *slot = signal.map(|signal| MacdValue {
            macd,
            signal,
            histogram: macd - signal,
        });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nz;
    use approx::assert_relative_eq;

    fn closes(n: usize) -> Vec<f64> {
        (0..n).map(|i| 50.0 + (i as f64 * 0.7).sin() * 4.0 + i as f64 * 0.1).collect()
    }

    #[test]
    fn first_value_needs_slow_plus_signal_history() {
        let values = macd(&closes(60), nz(12), nz(26), nz(9));
        let first = values.iter().position(Option::is_some).unwrap();
        assert_eq!(first, 26 + 9 - 2);
    }

    #[test]
    fn histogram_is_line_minus_signal() {
        let values = macd(&closes(80), nz(12), nz(26), nz(9));
        for value in values.iter().flatten() {
            assert_relative_eq!(value.histogram, value.macd - value.signal);
        }
    }

    #[test]
    fn line_matches_ema_difference() {
        let data = closes(50);
        let values = macd(&data, nz(3), nz(6), nz(4));
        let fast = ema(&data, nz(3));
        let slow = ema(&data, nz(6));

        for (i, value) in values.iter().enumerate() {
            if let Some(value) = value {
                assert_eq!(value.macd, fast[i].unwrap() - slow[i].unwrap());
            }
        }
    }

    #[test]
    fn constant_prices_give_zero() {
        let values = macd(&[10.0; 40], nz(12), nz(26), nz(9));
        let last = values.last().unwrap().unwrap();
        assert_relative_eq!(last.macd, 0.0, epsilon = 1e-12);
        assert_relative_eq!(last.signal, 0.0, epsilon = 1e-12);
        assert_relative_eq!(last.histogram, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn too_short_is_all_none() {
        let values = macd(&closes(33), nz(12), nz(26), nz(9));
        assert!(values.iter().all(Option::is_none));
    }
}
