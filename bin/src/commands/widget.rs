//! Widget command implementation.

use anyhow::Result;
use ohlcdash_lib::widget::WidgetConfig;

/// Print the widget options, or the full embed snippet with `html`.
pub(crate) fn widget(
    symbol: Option<String>,
    theme: Option<String>,
    range: Option<String>,
    html: bool,
) -> Result<()> {
    let mut config = WidgetConfig::default();
    if let Some(symbol) = symbol {
        config = config.with_symbol(symbol);
    }
    if let Some(theme) = theme {
        config = config.with_theme(theme);
    }
    if let Some(range) = range {
        config = config.with_range(range);
    }

    let out = if html {
        config.embed_snippet()?
    } else {
        config.to_json()?
    };
    println!("{out}");
    Ok(())
}
