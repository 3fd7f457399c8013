use anyhow::Result;
use serde::Serialize;

/// Pretty output is meant for terminals; compact output keeps one document
/// per line for piping.
pub fn render_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}
