use ohlcdash_types::BollingerValue;
use std::num::NonZero;

use crate::sma::mean;

/// Bollinger bands over a trailing window.
///
/// The middle band is the SMA of the window; the outer bands sit
/// `multiplier` population standard deviations above and below it.
/// Defined iff `i >= window - 1` and the window's mean and deviation are
/// finite. With a non-negative multiplier `top >= middle >= bottom` always
/// holds.
#[must_use]
pub fn bollinger(
    closes: &[f64],
    window: NonZero<usize>,
    multiplier: f64,
) -> Vec<Option<BollingerValue>> {
    let w = window.get();
    (0..closes.len())
        .map(|i| {
            if i + 1 >= w {
                bands(&closes[i + 1 - w..=i], multiplier)
            } else {
                None
            }
        })
        .collect()
}

fn bands(window: &[f64], multiplier: f64) -> Option<BollingerValue> {
    let middle = mean(window);
    let variance = window.iter().map(|c| (c - middle).powi(2)).sum::<f64>() / window.len() as f64;
    let deviation = multiplier * variance.max(0.0).sqrt();
    if !middle.is_finite() || !deviation.is_finite() {
        return None;
    }

    Some(BollingerValue {
        top: middle + deviation,
        middle,
        bottom: middle - deviation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{nz, sma};
    use approx::assert_relative_eq;

    #[test]
    fn known_population_deviation() {
        // Population σ of [2, 4, 4, 4, 5, 5, 7, 9] is exactly 2.
        let closes = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let values = bollinger(&closes, nz(8), 2.0);
        let last = values[7].unwrap();

        assert_relative_eq!(last.middle, 5.0);
        assert_relative_eq!(last.top, 9.0);
        assert_relative_eq!(last.bottom, 1.0);
        assert!(values[..7].iter().all(Option::is_none));
    }

    #[test]
    fn middle_band_is_sma() {
        let closes: Vec<f64> = (0..30).map(|i| 20.0 + f64::from(i % 5)).collect();
        let bands = bollinger(&closes, nz(20), 2.0);
        let averages = sma(&closes, nz(20));

        for (band, avg) in bands.iter().zip(&averages) {
            assert_eq!(band.map(|b| b.middle), *avg);
        }
    }

    #[test]
    fn overflowing_window_is_undefined() {
        let values = bollinger(&[1e308, 1e308, 5.0, 6.0], nz(2), 2.0);
        assert_eq!(values[1], None);
        let last = values[3].unwrap();
        assert_relative_eq!(last.middle, 5.5);
        assert!(last.top >= last.middle && last.middle >= last.bottom);
    }

    #[test]
    fn flat_prices_collapse_bands() {
        let values = bollinger(&[3.0; 5], nz(3), 2.0);
        let last = values[4].unwrap();
        assert_eq!(last.top, last.middle);
        assert_eq!(last.bottom, last.middle);
    }
}
