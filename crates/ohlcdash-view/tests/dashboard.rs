//! Dashboard behaviour against a scripted source on a paused clock.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use ohlcdash_indicators::IndicatorEngine;
use ohlcdash_types::{Bar, IndicatorKind, IndicatorSelection, Interval, OhlcdashError, Series};
use ohlcdash_view::{ChartSource, ChartType, Dashboard, ViewEvent};
use std::sync::Mutex;
use std::time::Duration;

/// Answers each interval after a fixed delay, recording completed calls.
#[derive(Default)]
struct ScriptedSource {
    delays: Vec<(Interval, Duration)>,
    failing: Vec<Interval>,
    completed: Mutex<Vec<Interval>>,
}

impl ScriptedSource {
    fn delay(mut self, interval: Interval, millis: u64) -> Self {
        self.delays.push((interval, Duration::from_millis(millis)));
        self
    }

    fn fail(mut self, interval: Interval) -> Self {
        self.failing.push(interval);
        self
    }
}

fn series(interval: Interval, len: usize) -> Series {
    let start = Utc.with_ymd_and_hms(2024, 5, 1, 13, 30, 0).unwrap();
    let bars = (0..len)
        .map(|i| {
            let close = 170.0 + (i % 9) as f64;
            Bar::new(
                start + chrono::Duration::seconds(interval.seconds() as i64 * i as i64),
                close - 0.25,
                close + 1.0,
                close - 1.0,
                close,
                5_000.0,
            )
        })
        .collect();
    Series::new(bars).with_interval(Some(interval))
}

#[async_trait]
impl ChartSource for ScriptedSource {
    async fn fetch_series(&self, interval: Interval) -> Result<Series, OhlcdashError> {
        let delay = self
            .delays
            .iter()
            .find(|(i, _)| *i == interval)
            .map_or(Duration::ZERO, |(_, d)| *d);
        tokio::time::sleep(delay).await;
        self.completed.lock().unwrap().push(interval);

        if self.failing.contains(&interval) {
            return Err(OhlcdashError::Fetch("Server error: 500".to_string()));
        }
        Ok(series(interval, 40))
    }
}

fn loaded_interval<S: ChartSource>(dashboard: &Dashboard<S>) -> Option<Interval> {
    dashboard.state().series().and_then(Series::interval)
}

#[tokio::test(start_paused = true)]
async fn slow_old_request_never_overwrites_newer() {
    let source = ScriptedSource::default()
        .delay(Interval::Day1, 500)
        .delay(Interval::Hour1, 50);
    let mut dashboard = Dashboard::new(source, IndicatorEngine::with_defaults());

    let a = dashboard.dispatch(ViewEvent::Refresh).unwrap();
    let b = dashboard.dispatch(ViewEvent::SetInterval(Interval::Hour1)).unwrap();
    assert!(a < b);

    dashboard.settle().await;
    tokio::time::sleep(Duration::from_secs(1)).await;
    dashboard.settle().await;

    assert_eq!(loaded_interval(&dashboard), Some(Interval::Hour1));
    assert_eq!(dashboard.state().latest_request(), b);
    assert!(!dashboard.state().is_loading());
    assert!(!dashboard.has_in_flight());
    // The superseded task was aborted before it finished sleeping.
    assert_eq!(*dashboard.source().completed.lock().unwrap(), vec![Interval::Hour1]);
}

#[tokio::test(start_paused = true)]
async fn queued_stale_completion_is_discarded() {
    let source = ScriptedSource::default().delay(Interval::Hour1, 100);
    let mut dashboard = Dashboard::new(source, IndicatorEngine::with_defaults());

    // A resolves immediately and its completion sits in the queue.
    dashboard.dispatch(ViewEvent::Refresh).unwrap();
    tokio::time::sleep(Duration::from_millis(10)).await;

    let b = dashboard.dispatch(ViewEvent::SetInterval(Interval::Hour1)).unwrap();
    dashboard.settle().await;

    assert_eq!(loaded_interval(&dashboard), Some(Interval::Hour1));
    assert_eq!(dashboard.state().latest_request(), b);
}

#[tokio::test(start_paused = true)]
async fn failure_shows_single_error_line() {
    let source = ScriptedSource::default().fail(Interval::Week1);
    let mut dashboard = Dashboard::new(source, IndicatorEngine::with_defaults());

    dashboard.dispatch(ViewEvent::Refresh);
    dashboard.settle().await;
    assert!(dashboard.state().series().is_some());

    dashboard.dispatch(ViewEvent::SetInterval(Interval::Week1));
    dashboard.settle().await;

    assert!(dashboard.state().series().is_none());
    assert_eq!(
        dashboard.state().error_line().as_deref(),
        Some("Error fetching data: fetch failed: Server error: 500")
    );
}

#[tokio::test(start_paused = true)]
async fn indicators_follow_request_selection() {
    let mut dashboard = Dashboard::new(ScriptedSource::default(), IndicatorEngine::with_defaults());

    let selection = IndicatorSelection::new()
        .with(IndicatorKind::Sma)
        .with(IndicatorKind::Rsi);
    dashboard.dispatch(ViewEvent::SetIndicators(selection));
    dashboard.settle().await;

    let last = *dashboard.state().series().unwrap().last().unwrap();
    assert!(last.sma.is_some());
    assert!(last.rsi.is_some());
    assert!(last.ema.is_none());
    assert!(last.bollinger.is_none());
}

#[tokio::test(start_paused = true)]
async fn chart_type_change_refetches() {
    let mut dashboard = Dashboard::new(ScriptedSource::default(), IndicatorEngine::with_defaults());

    let first = dashboard.dispatch(ViewEvent::SetChartType(ChartType::Candle));
    assert!(first.is_some());
    assert!(dashboard.dispatch(ViewEvent::SetChartType(ChartType::Candle)).is_none());

    dashboard.settle().await;
    assert_eq!(dashboard.state().chart_type(), ChartType::Candle);
    assert!(dashboard.state().series().is_some());
}

#[tokio::test(start_paused = true)]
async fn next_completion_returns_none_when_idle() {
    let mut dashboard = Dashboard::new(ScriptedSource::default(), IndicatorEngine::with_defaults());
    assert!(dashboard.next_completion().await.is_none());
}
