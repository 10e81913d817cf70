use std::num::NonZero;

/// Relative strength index with Wilder smoothing.
///
/// Close-to-close changes are split into gains and losses. The first
/// averages are the plain means of the first `window` changes, giving the
/// first value at index `window`. After that each average is smoothed as
///
/// ```text
/// avg = (prev_avg × (window − 1) + current) / window
/// ```
///
/// and `RSI = 100 − 100 / (1 + avg_gain / avg_loss)`. When `avg_loss` is
/// zero the RSI is 100. Output is always within `[0, 100]`; an index
/// whose averages overflow to a non-numeric ratio is left undefined.
#[must_use]
pub fn rsi(closes: &[f64], window: NonZero<usize>) -> Vec<Option<f64>> {
    let w = window.get();
    let mut out = vec![None; closes.len()];
    if closes.len() <= w {
        return out;
    }

    let (gains, losses) = closes[..=w]
        .windows(2)
        .map(|pair| gain_and_loss(pair[0], pair[1]))
        .fold((0.0, 0.0), |(g, l), (gain, loss)| (g + gain, l + loss));

    let n = w as f64;
    let mut avg_gain = gains / n;
    let mut avg_loss = losses / n;
    out[w] = rsi_from_averages(avg_gain, avg_loss);

    for (pair, slot) in closes[w..].windows(2).zip(&mut out[w + 1..]) {
        let (gain, loss) = gain_and_loss(pair[0], pair[1]);
        avg_gain = avg_gain.mul_add(n - 1.0, gain) / n;
        avg_loss = avg_loss.mul_add(n - 1.0, loss) / n;
        *slot = rsi_from_averages(avg_gain, avg_loss);
    }

    out
}

#[inline]
fn gain_and_loss(prev: f64, price: f64) -> (f64, f64) {
    let change = price - prev;
    if change > 0.0 {
        (change, 0.0)
    } else {
        (0.0, -change)
    }
}

#[inline]
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> Option<f64> {
    if avg_loss == 0.0 && !avg_gain.is_nan() {
        return Some(100.0);
    }
    let value = 100.0 - 100.0 / (1.0 + avg_gain / avg_loss);
    (!value.is_nan()).then(|| value.clamp(0.0, 100.0))
}
