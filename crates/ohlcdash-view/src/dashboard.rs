//! Drives a [`ViewState`] against a [`ChartSource`].

use ohlcdash_indicators::IndicatorEngine;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, warn};

use crate::{ChartSource, FetchCommand, RequestId, ViewEvent, ViewState};

struct InFlight {
    request: RequestId,
    handle: JoinHandle<()>,
}

enum Next {
    Event(ViewEvent),
    Finished(Result<(), JoinError>),
}

/// One interactive dashboard view.
///
/// Events go in through [`dispatch`](Self::dispatch). Any fetch they
/// require runs as a spawned task that computes the requested indicators
/// and posts a completion event back over a channel. Starting a fetch
/// aborts the one it supersedes; a completion that was already queued is
/// still discarded by the request id check in [`ViewState::update`].
///
/// Must be used from within a Tokio runtime.
pub struct Dashboard<S> {
    state: ViewState,
    source: Arc<S>,
    engine: Arc<IndicatorEngine>,
    tx: mpsc::UnboundedSender<ViewEvent>,
    rx: mpsc::UnboundedReceiver<ViewEvent>,
    in_flight: Option<InFlight>,
}

impl<S: ChartSource> Dashboard<S> {
    /// Creates a dashboard with an initial state and nothing loaded.
    pub fn new(source: S, engine: IndicatorEngine) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: ViewState::new(),
            source: Arc::new(source),
            engine: Arc::new(engine),
            tx,
            rx,
            in_flight: None,
        }
    }

    /// Current view state.
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// The source fetch tasks read from.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Indicator engine used by fetch tasks.
    pub fn engine(&self) -> &IndicatorEngine {
        &self.engine
    }

    /// True while a fetch task has not reported back.
    pub const fn has_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Applies `event` and starts a fetch if it requires one.
    ///
    /// Returns the id of the started request.
    pub fn dispatch(&mut self, event: ViewEvent) -> Option<RequestId> {
        if event.request().is_some() {
            self.apply_completion(event);
            return None;
        }
        let command = self.state.update(event)?;
        let request = command.request;
        self.spawn(command);
        Some(request)
    }

    /// Waits for the next completion and applies it.
    ///
    /// Returns `None` once no fetch is in flight and no completion is
    /// queued.
    pub async fn next_completion(&mut self) -> Option<RequestId> {
        let event = match self.in_flight.as_mut() {
            None => self.rx.try_recv().ok()?,
            Some(in_flight) => {
                let next = tokio::select! {
                    biased;
                    Some(event) = self.rx.recv() => Next::Event(event),
                    joined = &mut in_flight.handle => Next::Finished(joined),
                };
                match next {
                    Next::Event(event) => event,
                    Next::Finished(joined) => self.task_finished(joined)?,
                }
            }
        };
        Some(self.apply_completion(event))
    }

    /// Applies completions until nothing is in flight.
    pub async fn settle(&mut self) {
        while self.next_completion().await.is_some() {}
    }

    fn spawn(&mut self, command: FetchCommand) {
        if let Some(previous) = self.in_flight.take() {
            debug!(request = %previous.request, by = %command.request, "Aborting superseded fetch");
            previous.handle.abort();
        }

        let source = Arc::clone(&self.source);
        let engine = Arc::clone(&self.engine);
        let tx = self.tx.clone();
        let request = command.request;

        let handle = tokio::spawn(async move {
            let FetchCommand {
                request,
                interval,
                indicators,
            } = command;

            let event = match source.fetch_series(interval).await {
                Ok(mut series) => {
                    engine.apply(&mut series, &indicators);
                    ViewEvent::FetchSucceeded { request, series }
                }
                Err(e) => {
                    warn!(%request, %interval, error = %e, "Fetch failed");
                    ViewEvent::FetchFailed {
                        request,
                        message: e.to_string(),
                    }
                }
            };
            // The receiver lives as long as the dashboard.
            let _ = tx.send(event);
        });

        self.in_flight = Some(InFlight { request, handle });
    }

    // The task exited without a message being ready. Its event may have
    // landed between polls; otherwise it panicked.
    fn task_finished(&mut self, joined: Result<(), JoinError>) -> Option<ViewEvent> {
        let in_flight = self.in_flight.take()?;
        if let Ok(event) = self.rx.try_recv() {
            return Some(event);
        }
        let message = match joined {
            Err(e) if e.is_panic() => "fetch task panicked".to_string(),
            Err(e) => e.to_string(),
            Ok(()) => return None,
        };
        Some(ViewEvent::FetchFailed {
            request: in_flight.request,
            message,
        })
    }

    fn apply_completion(&mut self, event: ViewEvent) -> RequestId {
        let request = event.request().unwrap_or_default();
        if self
            .in_flight
            .as_ref()
            .is_some_and(|in_flight| in_flight.request == request)
        {
            self.in_flight = None;
        }
        let _ = self.state.update(event);
        request
    }
}

impl<S> Drop for Dashboard<S> {
    fn drop(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.handle.abort();
        }
    }
}

impl<S> std::fmt::Debug for Dashboard<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("state", &self.state)
            .field("in_flight", &self.in_flight.as_ref().map(|i| i.request))
            .finish_non_exhaustive()
    }
}
