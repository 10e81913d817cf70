//! Where a view gets its series from.

use async_trait::async_trait;
use ohlcdash_assemble::{AssembleOptions, assemble};
use ohlcdash_fetch::ChartClient;
use ohlcdash_types::{Interval, OhlcdashError, Series};
use std::sync::Arc;

/// Produces an assembled series for an interval.
///
/// Indicators are not applied here; the dashboard applies them for the
/// selection of the request that asked.
#[async_trait]
pub trait ChartSource: Send + Sync + 'static {
    /// Fetches and assembles one series.
    async fn fetch_series(&self, interval: Interval) -> Result<Series, OhlcdashError>;
}

#[async_trait]
impl<S: ChartSource + ?Sized> ChartSource for Arc<S> {
    async fn fetch_series(&self, interval: Interval) -> Result<Series, OhlcdashError> {
        (**self).fetch_series(interval).await
    }
}

/// [`ChartSource`] backed by the HTTP chart endpoint.
#[derive(Debug, Clone)]
pub struct HttpChartSource {
    client: ChartClient,
    options: AssembleOptions,
}

impl HttpChartSource {
    /// Creates a source with default assembly options.
    #[must_use]
    pub fn new(client: ChartClient) -> Self {
        Self {
            client,
            options: AssembleOptions::default(),
        }
    }

    /// Sets the assembly options. The interval is always taken from the
    /// request.
    #[must_use]
    pub fn with_options(mut self, options: AssembleOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the underlying client.
    #[must_use]
    pub const fn client(&self) -> &ChartClient {
        &self.client
    }
}

#[async_trait]
impl ChartSource for HttpChartSource {
    async fn fetch_series(&self, interval: Interval) -> Result<Series, OhlcdashError> {
        let raw = self.client.fetch(Some(interval)).await?;
        let series = assemble(raw, &self.options.with_interval(Some(interval)))?;
        Ok(series)
    }
}
