//! View state and its single update function.

use ohlcdash_types::{ChartType, IndicatorSelection, Interval, Series};
use tracing::debug;

/// Identifies one fetch issued by a view. Ids increase by one per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestId(u64);

impl RequestId {
    /// Returns the raw id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Something that happened to a view.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// The interval selector changed.
    SetInterval(Interval),
    /// The chart type selector changed.
    SetChartType(ChartType),
    /// The indicator selector changed.
    SetIndicators(IndicatorSelection),
    /// Reload with the current selection.
    Refresh,
    /// A fetch finished with a series.
    FetchSucceeded {
        /// The request that produced this series.
        request: RequestId,
        /// Assembled series with indicators applied.
        series: Series,
    },
    /// A fetch failed.
    FetchFailed {
        /// The request that failed.
        request: RequestId,
        /// Human-readable cause.
        message: String,
    },
}

impl ViewEvent {
    /// Returns the request id carried by a completion event.
    #[must_use]
    pub const fn request(&self) -> Option<RequestId> {
        match self {
            Self::FetchSucceeded { request, .. } | Self::FetchFailed { request, .. } => {
                Some(*request)
            }
            _ => None,
        }
    }
}

/// A fetch the caller must run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCommand {
    /// Id to report the completion under.
    pub request: RequestId,
    /// Interval to request.
    pub interval: Interval,
    /// Indicators to compute on the result.
    pub indicators: IndicatorSelection,
}

/// Everything one dashboard view shows.
///
/// Initially nothing is loaded, the interval is `1d`, the chart type is
/// `line` and no indicators are selected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    series: Option<Series>,
    selected_indicators: IndicatorSelection,
    chart_type: ChartType,
    interval: Interval,
    loading: bool,
    error: Option<String>,
    latest_request: RequestId,
}

impl ViewState {
    /// Creates the initial state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `event` and returns the fetch it requires, if any.
    ///
    /// A selector change to a new value, or [`ViewEvent::Refresh`], starts
    /// a request: a fresh id becomes the latest, `loading` is set and any
    /// previous error is cleared. Setting a selector to its current value
    /// does nothing.
    ///
    /// Completion events are applied only when their id is the latest;
    /// older ones are dropped. A success replaces the series and clears
    /// the error; a failure clears the series and keeps one message.
    pub fn update(&mut self, event: ViewEvent) -> Option<FetchCommand> {
        match event {
            ViewEvent::SetInterval(interval) => {
                if interval == self.interval {
                    return None;
                }
                self.interval = interval;
                Some(self.begin_request())
            }
            ViewEvent::SetChartType(chart_type) => {
                if chart_type == self.chart_type {
                    return None;
                }
                self.chart_type = chart_type;
                Some(self.begin_request())
            }
            ViewEvent::SetIndicators(indicators) => {
                if indicators == self.selected_indicators {
                    return None;
                }
                self.selected_indicators = indicators;
                Some(self.begin_request())
            }
            ViewEvent::Refresh => Some(self.begin_request()),
            ViewEvent::FetchSucceeded { request, series } => {
                if self.is_current(request) {
                    self.series = Some(series);
                    self.error = None;
                    self.loading = false;
                }
                None
            }
            ViewEvent::FetchFailed { request, message } => {
                if self.is_current(request) {
                    self.series = None;
                    self.error = Some(message);
                    self.loading = false;
                }
                None
            }
        }
    }

    fn begin_request(&mut self) -> FetchCommand {
        self.latest_request = self.latest_request.next();
        self.loading = true;
        self.error = None;
        FetchCommand {
            request: self.latest_request,
            interval: self.interval,
            indicators: self.selected_indicators.clone(),
        }
    }

    fn is_current(&self, request: RequestId) -> bool {
        let current = request == self.latest_request;
        if !current {
            debug!(%request, latest = %self.latest_request, "Discarding stale response");
        }
        current
    }

    /// Last successfully loaded series.
    #[must_use]
    pub const fn series(&self) -> Option<&Series> {
        self.series.as_ref()
    }

    /// Selected indicators.
    #[must_use]
    pub const fn selected_indicators(&self) -> &IndicatorSelection {
        &self.selected_indicators
    }

    /// Selected chart type.
    #[must_use]
    pub const fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    /// Selected interval.
    #[must_use]
    pub const fn interval(&self) -> Interval {
        self.interval
    }

    /// True while the latest request has not completed.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message of the last failed request.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The line shown in place of the chart after a failure.
    #[must_use]
    pub fn error_line(&self) -> Option<String> {
        self.error().map(|message| format!("Error fetching data: {message}"))
    }

    /// Id of the most recent request.
    #[must_use]
    pub const fn latest_request(&self) -> RequestId {
        self.latest_request
    }
}
