//! Indicator window configuration.

use ohlcdash_types::OhlcdashError;
use std::fmt;
use std::num::NonZero;
use thiserror::Error;

const fn nz(n: usize) -> NonZero<usize> {
    match NonZero::new(n) {
        Some(n) => n,
        None => panic!("window must be non-zero"),
    }
}

/// Errors from building or validating an [`IndicatorConfig`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A window length of zero was requested.
    #[error("{name} window must be at least 1")]
    ZeroWindow {
        /// Which window was zero.
        name: &'static str,
    },

    /// MACD fast period is not shorter than the slow period.
    #[error("MACD fast period ({fast}) must be shorter than slow period ({slow})")]
    MacdPeriods {
        /// Fast EMA period.
        fast: usize,
        /// Slow EMA period.
        slow: usize,
    },

    /// Bollinger multiplier is negative or not finite.
    #[error("Bollinger multiplier must be a finite non-negative number, got {0}")]
    InvalidMultiplier(f64),
}

impl From<ConfigError> for OhlcdashError {
    fn from(err: ConfigError) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}

/// Window parameters for every indicator.
///
/// Windows are [`NonZero`], so a zero-length window cannot be expressed.
/// Cross-field rules (MACD ordering, multiplier range) are checked by
/// [`IndicatorConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorConfig {
    /// SMA window.
    pub sma: NonZero<usize>,
    /// EMA window.
    pub ema: NonZero<usize>,
    /// MACD fast EMA period.
    pub macd_fast: NonZero<usize>,
    /// MACD slow EMA period.
    pub macd_slow: NonZero<usize>,
    /// MACD signal EMA period.
    pub macd_signal: NonZero<usize>,
    /// RSI window.
    pub rsi: NonZero<usize>,
    /// Bollinger window.
    pub bollinger: NonZero<usize>,
    /// Bollinger band width in standard deviations.
    pub bollinger_multiplier: f64,
}

impl IndicatorConfig {
    /// Default SMA window.
    pub const DEFAULT_SMA: NonZero<usize> = nz(10);
    /// Default EMA window.
    pub const DEFAULT_EMA: NonZero<usize> = nz(30);
    /// Default MACD fast period.
    pub const DEFAULT_MACD_FAST: NonZero<usize> = nz(12);
    /// Default MACD slow period.
    pub const DEFAULT_MACD_SLOW: NonZero<usize> = nz(26);
    /// Default MACD signal period.
    pub const DEFAULT_MACD_SIGNAL: NonZero<usize> = nz(9);
    /// Default RSI window.
    pub const DEFAULT_RSI: NonZero<usize> = nz(14);
    /// Default Bollinger window.
    pub const DEFAULT_BOLLINGER: NonZero<usize> = nz(20);
    /// Default Bollinger multiplier.
    pub const DEFAULT_BOLLINGER_MULTIPLIER: f64 = 2.0;

    /// Returns a builder starting from the defaults.
    #[must_use]
    pub fn builder() -> IndicatorConfigBuilder {
        IndicatorConfigBuilder::default()
    }

    /// Checks the cross-field rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MacdPeriods`] if `macd_fast >= macd_slow` and
    /// [`ConfigError::InvalidMultiplier`] if the multiplier is negative or
    /// not finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.macd_fast >= self.macd_slow {
            return Err(ConfigError::MacdPeriods {
                fast: self.macd_fast.get(),
                slow: self.macd_slow.get(),
            });
        }
        if !self.bollinger_multiplier.is_finite() || self.bollinger_multiplier < 0.0 {
            return Err(ConfigError::InvalidMultiplier(self.bollinger_multiplier));
        }
        Ok(())
    }
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            sma: Self::DEFAULT_SMA,
            ema: Self::DEFAULT_EMA,
            macd_fast: Self::DEFAULT_MACD_FAST,
            macd_slow: Self::DEFAULT_MACD_SLOW,
            macd_signal: Self::DEFAULT_MACD_SIGNAL,
            rsi: Self::DEFAULT_RSI,
            bollinger: Self::DEFAULT_BOLLINGER,
            bollinger_multiplier: Self::DEFAULT_BOLLINGER_MULTIPLIER,
        }
    }
}

impl fmt::Display for IndicatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SMA({}) EMA({}) MACD({},{},{}) RSI({}) BB({},{})",
            self.sma,
            self.ema,
            self.macd_fast,
            self.macd_slow,
            self.macd_signal,
            self.rsi,
            self.bollinger,
            self.bollinger_multiplier
        )
    }
}

/// Builder for [`IndicatorConfig`] taking plain `usize` windows.
///
/// ```
/// use ohlcdash_indicators::IndicatorConfig;
///
/// let config = IndicatorConfig::builder().sma(5).rsi(7).build().unwrap();
/// assert_eq!(config.sma.get(), 5);
/// assert_eq!(config.ema.get(), 30);
///
/// assert!(IndicatorConfig::builder().macd(26, 12, 9).build().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct IndicatorConfigBuilder {
    sma: usize,
    ema: usize,
    macd_fast: usize,
    macd_slow: usize,
    macd_signal: usize,
    rsi: usize,
    bollinger: usize,
    bollinger_multiplier: f64,
}

impl Default for IndicatorConfigBuilder {
    fn default() -> Self {
        let defaults = IndicatorConfig::default();
        Self {
            sma: defaults.sma.get(),
            ema: defaults.ema.get(),
            macd_fast: defaults.macd_fast.get(),
            macd_slow: defaults.macd_slow.get(),
            macd_signal: defaults.macd_signal.get(),
            rsi: defaults.rsi.get(),
            bollinger: defaults.bollinger.get(),
            bollinger_multiplier: defaults.bollinger_multiplier,
        }
    }
}

impl IndicatorConfigBuilder {
    /// Sets the SMA window.
    #[must_use]
    pub const fn sma(mut self, window: usize) -> Self {
        self.sma = window;
        self
    }

    /// Sets the EMA window.
    #[must_use]
    pub const fn ema(mut self, window: usize) -> Self {
        self.ema = window;
        self
    }

    /// Sets the MACD fast, slow and signal periods.
    #[must_use]
    pub const fn macd(mut self, fast: usize, slow: usize, signal: usize) -> Self {
        self.macd_fast = fast;
        self.macd_slow = slow;
        self.macd_signal = signal;
        self
    }

    /// Sets the RSI window.
    #[must_use]
    pub const fn rsi(mut self, window: usize) -> Self {
        self.rsi = window;
        self
    }

    /// Sets the Bollinger window and multiplier.
    #[must_use]
    pub const fn bollinger(mut self, window: usize, multiplier: f64) -> Self {
        self.bollinger = window;
        self.bollinger_multiplier = multiplier;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any window is zero or the cross-field
    /// rules fail.
    pub fn build(self) -> Result<IndicatorConfig, ConfigError> {
        let window = |value: usize, name: &'static str| {
            NonZero::new(value).ok_or(ConfigError::ZeroWindow { name })
        };

        let config = IndicatorConfig {
            sma: window(self.sma, "SMA")?,
            ema: window(self.ema, "EMA")?,
            macd_fast: window(self.macd_fast, "MACD fast")?,
            macd_slow: window(self.macd_slow, "MACD slow")?,
            macd_signal: window(self.macd_signal, "MACD signal")?,
            rsi: window(self.rsi, "RSI")?,
            bollinger: window(self.bollinger, "Bollinger")?,
            bollinger_multiplier: self.bollinger_multiplier,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = IndicatorConfig::default();
        assert_eq!(config.sma.get(), 10);
        assert_eq!(config.ema.get(), 30);
        assert_eq!(config.macd_fast.get(), 12);
        assert_eq!(config.macd_slow.get(), 26);
        assert_eq!(config.macd_signal.get(), 9);
        assert_eq!(config.rsi.get(), 14);
        assert_eq!(config.bollinger.get(), 20);
        assert_eq!(config.bollinger_multiplier, 2.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_rejects_zero_window() {
        let err = IndicatorConfig::builder().rsi(0).build().unwrap_err();
        assert_eq!(err, ConfigError::ZeroWindow { name: "RSI" });
    }

    #[test]
    fn test_macd_fast_must_be_shorter() {
        let err = IndicatorConfig::builder().macd(12, 12, 9).build().unwrap_err();
        assert_eq!(err, ConfigError::MacdPeriods { fast: 12, slow: 12 });
    }

    #[test]
    fn test_multiplier_range() {
        assert!(IndicatorConfig::builder().bollinger(20, -1.0).build().is_err());
        assert!(IndicatorConfig::builder().bollinger(20, f64::NAN).build().is_err());
        assert!(IndicatorConfig::builder().bollinger(20, 0.0).build().is_ok());
    }

    #[test]
    fn test_into_ohlcdash_error() {
        let err: OhlcdashError = ConfigError::ZeroWindow { name: "SMA" }.into();
        assert!(matches!(err, OhlcdashError::InvalidConfig(_)));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            IndicatorConfig::default().to_string(),
            "SMA(10) EMA(30) MACD(12,26,9) RSI(14) BB(20,2)"
        );
    }
}
