//! Payload validation into raw parallel arrays.

use ohlcdash_types::RawSeries;

use crate::{ChartResponse, FetchError};

/// Parses and validates a response body.
///
/// # Errors
///
/// Returns [`FetchError::Malformed`] if the body is not valid JSON or lacks
/// `chart.result[0].timestamp` or `chart.result[0].indicators.quote[0]`
/// with all five quote arrays, and [`FetchError::Upstream`] if the
/// envelope carries an error object.
pub fn parse_chart(body: &[u8]) -> Result<RawSeries, FetchError> {
    let response: ChartResponse = serde_json::from_slice(body)
        .map_err(|e| FetchError::Malformed(format!("invalid JSON: {e}")))?;
    validate_response(response)
}

/// Validates an already deserialized response.
///
/// Array lengths are not compared here; the assembler rejects mismatches.
///
/// # Errors
///
/// See [`parse_chart`].
pub fn validate_response(response: ChartResponse) -> Result<RawSeries, FetchError> {
    let envelope = response.chart;

    if let Some(err) = envelope.error {
        return Err(FetchError::Upstream {
            code: err.code,
            description: err.description,
        });
    }

    let result = envelope
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| missing("chart.result[0]"))?;

    let timestamps = result
        .timestamp
        .ok_or_else(|| missing("chart.result[0].timestamp"))?;

    let quote = result
        .indicators
        .and_then(|indicators| indicators.quote.into_iter().next())
        .ok_or_else(|| missing("chart.result[0].indicators.quote[0]"))?;

    Ok(RawSeries {
        timestamps,
        open: quote.open.ok_or_else(|| missing("quote.open"))?,
        high: quote.high.ok_or_else(|| missing("quote.high"))?,
        low: quote.low.ok_or_else(|| missing("quote.low"))?,
        close: quote.close.ok_or_else(|| missing("quote.close"))?,
        volume: quote.volume.ok_or_else(|| missing("quote.volume"))?,
        meta: result.meta,
    })
}

fn missing(path: &str) -> FetchError {
    FetchError::Malformed(format!("missing {path}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "chart": {
            "result": [{
                "meta": {"symbol": "AAPL", "currency": "USD", "dataGranularity": "1d"},
                "timestamp": [1704205800, 1704292200, 1704378600],
                "indicators": {
                    "quote": [{
                        "open": [187.15, 184.22, 182.15],
                        "high": [188.44, 185.88, 183.09],
                        "low": [183.89, 183.43, 180.88],
                        "close": [185.64, 184.25, 181.91],
                        "volume": [82488700, 58414500, 71983600]
                    }]
                }
            }],
            "error": null
        }
    }"#;

    #[test]
    fn test_parse_sample() {
        let raw = parse_chart(SAMPLE.as_bytes()).unwrap();
        assert_eq!(raw.len(), 3);
        assert_eq!(raw.timestamps[0], 1_704_205_800);
        assert_eq!(raw.close[2], Some(181.91));
        assert_eq!(raw.volume[0], Some(82_488_700.0));
        assert_eq!(raw.meta.unwrap().symbol.as_deref(), Some("AAPL"));
    }

    #[test]
    fn test_invalid_json() {
        let err = parse_chart(b"<html>").unwrap_err();
        assert!(matches!(err, FetchError::Malformed(msg) if msg.starts_with("invalid JSON")));
    }

    #[test]
    fn test_empty_result() {
        let err = parse_chart(br#"{"chart":{"result":[],"error":null}}"#).unwrap_err();
        assert!(matches!(err, FetchError::Malformed(msg) if msg == "missing chart.result[0]"));
    }

    #[test]
    fn test_missing_timestamp() {
        let body = br#"{"chart":{"result":[{"indicators":{"quote":[{}]}}]}}"#;
        let err = parse_chart(body).unwrap_err();
        assert!(matches!(err, FetchError::Malformed(msg) if msg.contains("timestamp")));
    }

    #[test]
    fn test_missing_quote_array() {
        let body = br#"{"chart":{"result":[{"timestamp":[1],
            "indicators":{"quote":[{"open":[1],"high":[1],"low":[1],"close":[1]}]}}]}}"#;
        let err = parse_chart(body).unwrap_err();
        assert!(matches!(err, FetchError::Malformed(msg) if msg == "missing quote.volume"));
    }

    #[test]
    fn test_upstream_error() {
        let body = br#"{"chart":{"result":null,"error":{"code":"Bad Request","description":"Invalid interval"}}}"#;
        let err = parse_chart(body).unwrap_err();
        assert_eq!(err.to_string(), "Upstream error Bad Request: Invalid interval");
    }

    #[test]
    fn test_missing_chart_key() {
        let err = parse_chart(br#"{"data":[]}"#).unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));
    }
}
