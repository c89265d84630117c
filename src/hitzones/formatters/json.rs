use serde::Serialize;

/// JSON formatter for monster views
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format a view as pretty-printed JSON
    pub fn format<T: Serialize>(view: &T) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(view)
    }

    /// Format a view as compact JSON (no whitespace)
    pub fn format_compact<T: Serialize>(view: &T) -> Result<String, serde_json::Error> {
        serde_json::to_string(view)
    }
}
