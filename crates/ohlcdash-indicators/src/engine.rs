use ohlcdash_types::{IndicatorKind, IndicatorSelection, Series};
use tracing::debug;

use crate::{ConfigError, IndicatorConfig, bollinger, ema, macd, rsi, sma};

/// Writes selected indicators into the bars of a [`Series`].
///
/// The engine holds only a validated [`IndicatorConfig`]. Every call to
/// [`apply`](Self::apply) first clears all derived fields and then
/// recomputes from closing prices, so applying twice leaves the series
/// bit-identical to applying once.
#[derive(Debug, Clone, Default)]
pub struct IndicatorEngine {
    config: IndicatorConfig,
}

impl IndicatorEngine {
    /// Creates an engine after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration fails validation.
    pub fn new(config: IndicatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Creates an engine with default windows.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Returns the engine's configuration.
    #[must_use]
    pub const fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    /// Recomputes the selected indicators in place.
    ///
    /// Indicators not in `selection` are left as `None`, including any that
    /// were set by an earlier call.
    pub fn apply(&self, series: &mut Series, selection: &IndicatorSelection) {
        let closes = series.closes();
        let bars = series.bars_mut();
        for bar in bars.iter_mut() {
            bar.clear_derived();
        }

        let config = &self.config;
        for kind in selection.iter() {
            match kind {
                IndicatorKind::Sma => {
                    for (bar, value) in bars.iter_mut().zip(sma(&closes, config.sma)) {
                        bar.sma = value;
                    }
                }
                IndicatorKind::Ema => {
                    for (bar, value) in bars.iter_mut().zip(ema(&closes, config.ema)) {
                        bar.ema = value;
                    }
                }
                IndicatorKind::Macd => {
                    let values = macd(&closes, config.macd_fast, config.macd_slow, config.macd_signal);
                    for (bar, value) in bars.iter_mut().zip(values) {
                        bar.macd = value;
                    }
                }
                IndicatorKind::Rsi => {
                    for (bar, value) in bars.iter_mut().zip(rsi(&closes, config.rsi)) {
                        bar.rsi = value;
                    }
                }
                IndicatorKind::Bollinger => {
                    let values = bollinger(&closes, config.bollinger, config.bollinger_multiplier);
                    for (bar, value) in bars.iter_mut().zip(values) {
                        bar.bollinger = value;
                    }
                }
            }
        }

        debug!(bars = closes.len(), indicators = %selection, "Applied indicators");
    }

    /// Consumes `series` and returns it with the selected indicators.
    #[must_use]
    pub fn enrich(&self, mut series: Series, selection: &IndicatorSelection) -> Series {
        self.apply(&mut series, selection);
        series
    }
}
