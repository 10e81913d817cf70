//! Finance-chart URL construction.

use ohlcdash_types::Interval;

/// Path of the chart endpoint relative to the configured base URL.
pub const CHART_PATH: &str = "/api/finance-chart";

/// Builds the chart request URL.
///
/// URL format: `{endpoint}/api/finance-chart[?interval={interval}]`
///
/// Trailing slashes on the endpoint are ignored.
///
/// # Example
///
/// ```
/// use ohlcdash_fetch::url::chart_url;
/// use ohlcdash_types::Interval;
///
/// let url = chart_url("http://localhost:3001", Some(Interval::Hour1));
/// assert_eq!(url, "http://localhost:3001/api/finance-chart?interval=1h");
/// ```
#[must_use]
pub fn chart_url(endpoint: &str, interval: Option<Interval>) -> String {
    let base = endpoint.trim_end_matches('/');
    match interval {
        Some(interval) => format!("{base}{CHART_PATH}?interval={}", interval.as_str()),
        None => format!("{base}{CHART_PATH}"),
    }
}
