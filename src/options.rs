//! The command table: trailing `[N]: {json}` lines and their application.
//!
//! References are two-part. A trailing line of the input registers a
//! blob under a decimal key; a `[N]` just inside a box's top-left corner
//! consumes it. Keys that never resolve stay in the grid and fall
//! through to the text parser.

use std::collections::HashMap;

use indexmap::IndexMap;
use regex::Regex;

#[cfg(feature = "tracing")]
use tracing::warn;

// Reference parsing degrades silently without the `tracing` feature.
#[cfg(not(feature = "tracing"))]
macro_rules! warn {
    ($($event:tt)*) => {};
}

/// Option blobs keyed by their decimal reference, stripped from the
/// tail of the input before the grid is built.
#[derive(Debug, Default)]
pub struct CommandTable {
    entries: HashMap<String, String>,
}

/// Split raw input into diagram text and the command table.
///
/// Matching lines are removed from the text so they never reach the
/// grid. Blob values may not contain braces, which keeps the pattern
/// honest about where a blob ends.
pub fn extract(source: &str) -> (String, CommandTable) {
    let pattern = Regex::new(r"(?m)^\[(\d+)\]:?\s+(\{[^}]+\})$").expect("valid pattern");
    let mut entries = HashMap::new();
    for caps in pattern.captures_iter(source) {
        entries.insert(caps[1].to_string(), caps[2].to_string());
    }
    let text = pattern.replace_all(source, "").into_owned();
    (text, CommandTable { entries })
}

impl CommandTable {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merge the blob registered under `key` into `options`.
    ///
    /// Returns `false` (merging nothing) when the key is unknown or the
    /// blob fails to parse as a JSON object; the caller then leaves the
    /// in-grid reference alone.
    pub fn merge_into(&self, key: &str, options: &mut IndexMap<String, String>) -> bool {
        let Some(blob) = self.entries.get(key) else {
            return false;
        };
        let parsed: serde_json::Value = match serde_json::from_str(blob) {
            Ok(value) => value,
            Err(_err) => {
                warn!(reference = key, error = %_err, "malformed option blob");
                return false;
            }
        };
        let Some(map) = parsed.as_object() else {
            return false;
        };
        for (name, value) in map {
            let rendered = match value {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                _ => continue,
            };
            options.insert(name.clone(), rendered);
        }
        true
    }
}
