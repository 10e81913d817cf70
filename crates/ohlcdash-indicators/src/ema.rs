use std::num::NonZero;

use crate::sma::mean;

/// Exponential moving average of `closes`.
///
/// Uses the smoothing factor `α = 2 / (window + 1)`. The first value, at
/// index `window - 1`, is the SMA of the first `window` closes; after that
///
/// ```text
/// ema[i] = close[i] × α + ema[i - 1] × (1 − α)
/// ```
///
/// Values before the seed index are `None`.
#[must_use]
pub fn ema(closes: &[f64], window: NonZero<usize>) -> Vec<Option<f64>> {
    let w = window.get();
    let mut out = vec![None; closes.len()];
    if closes.len() < w {
        return out;
    }

    let alpha = 2.0 / (w as f64 + 1.0);
    let mut prev = mean(&closes[..w]);
    out[w - 1] = Some(prev);

    for (close, slot) in closes[w..].iter().zip(&mut out[w..]) {
        prev = close * alpha + prev * (1.0 - alpha);
        *slot = Some(prev);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{nz, sma};
    use approx::assert_relative_eq;

    #[test]
    fn seed_equals_sma() {
        let closes: Vec<f64> = (1..=40).map(|i| 100.0 + f64::from(i % 7) * 1.5).collect();
        let ema_values = ema(&closes, nz(30));
        let sma_values = sma(&closes, nz(30));

        assert_eq!(ema_values[28], None);
        assert_eq!(ema_values[29], sma_values[29]);
    }

    #[test]
    fn recurrence_after_seed() {
        // α = 2 / (3 + 1) = 0.5
        let values = ema(&[2.0, 4.0, 6.0, 10.0, 0.0], nz(3));
        assert_eq!(values[..2], [None, None]);
        assert_relative_eq!(values[2].unwrap(), 4.0);
        assert_relative_eq!(values[3].unwrap(), 7.0);
        assert_relative_eq!(values[4].unwrap(), 3.5);
    }

    #[test]
    fn constant_input_stays_constant() {
        let values = ema(&[5.0; 12], nz(4));
        for value in &values[3..] {
            assert_relative_eq!(value.unwrap(), 5.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn short_input_is_all_none() {
        assert_eq!(ema(&[1.0, 2.0], nz(3)), vec![None, None]);
    }
}
