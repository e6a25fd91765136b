//!
//! Markdown reports.
//!

pub mod environment;
pub mod optimization;
pub mod summary;

///
/// Formats an optional figure, rendering a missing one as `n/a`.
///
pub fn optional<T>(value: Option<T>) -> String
where
    T: std::fmt::Display,
{
    value
        .map(|value| value.to_string())
        .unwrap_or_else(|| "n/a".to_owned())
}

///
/// Escapes the table cell delimiter.
///
pub fn cell(text: &str) -> String {
    text.replace('|', "\\|")
}
