//! Theme export: ranked colors to a flat `{ key: "#rrggbb" }` JSON object.

use color_vision::Rgb;
use serde_json::{Map, Value};

/// Build the theme object for `colors`, in rank order.
///
/// The color at index `i` takes `keys[i]`. Colors past the end of `keys`,
/// or whose key was already used, are named `color-N` with `N` the 1-based
/// rank. A positional name that is itself taken gets a `-2`, `-3`, ...
/// suffix, so every color lands in the theme. Keys keep insertion order.
pub fn theme_export(colors: &[Rgb], keys: &[String]) -> Map<String, Value> {
    let mut theme = Map::new();
    for (i, color) in colors.iter().enumerate() {
        let key = match keys.get(i) {
            Some(key) if !theme.contains_key(key) => key.clone(),
            Some(key) => {
                tracing::warn!(key = %key, "Duplicate theme key, using positional name");
                positional_key(&theme, i)
            }
            None => positional_key(&theme, i),
        };
        theme.insert(key, Value::String(color.to_hex()));
    }
    theme
}

fn positional_key(theme: &Map<String, Value>, index: usize) -> String {
    let base = format!("color-{}", index + 1);
    if !theme.contains_key(&base) {
        return base;
    }
    let mut n = 2;
    let mut key = format!("{base}-{n}");
    while theme.contains_key(&key) {
        n += 1;
        key = format!("{base}-{n}");
    }
    tracing::warn!(key = %key, "Positional theme key taken, using suffixed name");
    key
}

/// Serialize a theme as pretty JSON.
pub fn theme_json(theme: &Map<String, Value>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(theme)
}
