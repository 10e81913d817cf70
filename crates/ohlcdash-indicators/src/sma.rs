use std::num::NonZero;

/// Simple moving average of `closes` over a trailing window.
///
/// The value at index `i` is defined iff `i >= window - 1` and equals the
/// arithmetic mean of `closes[i + 1 - window..=i]`. Each window is summed
/// directly rather than with a running sum, so no rounding error carries
/// from one bar to the next.
///
/// # Example
///
/// ```
/// use ohlcdash_indicators::sma;
/// use std::num::NonZero;
///
/// let closes = [10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0, 18.0, 19.0, 20.0];
/// let values = sma(&closes, NonZero::new(10).unwrap());
///
/// assert_eq!(values[8], None);
/// assert_eq!(values[9], Some(14.5));
/// assert_eq!(values[10], Some(15.5));
/// ```
#[must_use]
pub fn sma(closes: &[f64], window: NonZero<usize>) -> Vec<Option<f64>> {
    let w = window.get();
    (0..closes.len())
        .map(|i| (i + 1 >= w).then(|| mean(&closes[i + 1 - w..=i])))
        .collect()
}

/// Arithmetic mean of a non-empty slice.
#[inline]
pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
