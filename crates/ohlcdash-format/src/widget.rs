//! Embedded advanced-chart widget.
//!
//! The widget is rendered by a third-party script that reads its options
//! from the JSON body of its own `<script>` tag. Nothing is fetched here;
//! [`WidgetConfig::embed_snippet`] only produces the markup.

use serde::{Deserialize, Serialize};

use crate::FormatError;

/// Script that renders the widget.
pub const WIDGET_SCRIPT_URL: &str =
    "https://s3.tradingview.com/external-embedding/embed-widget-advanced-chart.js";

/// Options blob for the advanced-chart widget.
///
/// Field names match the keys the widget script expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Fill the container.
    pub autosize: bool,
    /// Exchange-qualified symbol, e.g. `NASDAQ:AAPL`.
    pub symbol: String,
    /// Display timezone.
    pub timezone: String,
    /// `dark` or `light`.
    pub theme: String,
    /// Bar style code; `"1"` is candles.
    pub style: String,
    /// UI locale.
    pub locale: String,
    /// Show the date-range selector.
    pub withdateranges: bool,
    /// Initial visible range.
    pub range: String,
    /// Hide the drawing toolbar.
    pub hide_side_toolbar: bool,
    /// Let the user switch symbols.
    pub allow_symbol_change: bool,
    /// Show the details panel.
    pub details: bool,
    /// Show the hotlist panel.
    pub hotlist: bool,
    /// Show the calendar panel.
    pub calendar: bool,
    /// Show the pop-out button.
    pub show_popup_button: bool,
    /// Pop-out width in pixels.
    pub popup_width: String,
    /// Pop-out height in pixels.
    pub popup_height: String,
    /// Host the widget links back to.
    pub support_host: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            autosize: true,
            symbol: "NASDAQ:AAPL".to_string(),
            timezone: "Etc/UTC".to_string(),
            theme: "dark".to_string(),
            style: "1".to_string(),
            locale: "en".to_string(),
            withdateranges: true,
            range: "YTD".to_string(),
            hide_side_toolbar: false,
            allow_symbol_change: true,
            details: true,
            hotlist: true,
            calendar: true,
            show_popup_button: true,
            popup_width: "1000".to_string(),
            popup_height: "650".to_string(),
            support_host: "https://www.tradingview.com".to_string(),
        }
    }
}

impl WidgetConfig {
    /// Sets the symbol.
    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    /// Sets the theme.
    #[must_use]
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    /// Sets the initial range.
    #[must_use]
    pub fn with_range(mut self, range: impl Into<String>) -> Self {
        self.range = range.into();
        self
    }

    /// Serializes the options as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, FormatError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Renders the container markup with the widget script tag.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn embed_snippet(&self) -> Result<String, FormatError> {
        // `</` inside the JSON would close the script element early.
        let json = self.to_json()?.replace("</", "<\\/");
        Ok(format!(
            r#"<div class="tradingview-widget-container" style="height:100%;width:100%">
  <div class="tradingview-widget-container__widget" style="height:calc(100% - 32px);width:100%"></div>
  <script type="text/javascript" src="{WIDGET_SCRIPT_URL}" async>
{json}
  </script>
</div>
"#
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let json: serde_json::Value =
            serde_json::from_str(&WidgetConfig::default().to_json().unwrap()).unwrap();

        assert_eq!(json["symbol"], "NASDAQ:AAPL");
        assert_eq!(json["timezone"], "Etc/UTC");
        assert_eq!(json["style"], "1");
        assert_eq!(json["popup_height"], "650");
        assert_eq!(json["withdateranges"], true);
        assert_eq!(json["hide_side_toolbar"], false);
        assert_eq!(json.as_object().unwrap().len(), 17);
    }

    #[test]
    fn test_builders() {
        let config = WidgetConfig::default()
            .with_symbol("NYSE:IBM")
            .with_theme("light")
            .with_range("1M");
        assert_eq!(config.symbol, "NYSE:IBM");
        assert_eq!(config.theme, "light");
        assert_eq!(config.range, "1M");
    }

    #[test]
    fn test_embed_snippet() {
        let html = WidgetConfig::default().embed_snippet().unwrap();
        assert!(html.contains(WIDGET_SCRIPT_URL));
        assert!(html.contains("\"symbol\": \"NASDAQ:AAPL\""));
        assert!(html.trim_end().ends_with("</div>"));
    }

    #[test]
    fn test_embed_escapes_closing_tags() {
        let html = WidgetConfig::default()
            .with_symbol("</script><b>")
            .embed_snippet()
            .unwrap();
        assert_eq!(html.matches("</script>").count(), 1);
    }
}
