pub mod json;
pub mod markdown;
pub mod terminal;

use crate::domain::entities::AnalysisResult;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use terminal::TerminalFormatter;

/// Renders an analysis result for display
pub trait Formatter {
    fn format(&self, result: &AnalysisResult) -> String;
}

/// Shortens `s` to at most `max_len` characters, ending in `…` when cut.
///
/// Lengths are counted in `char`s, not terminal columns.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len == 0 {
        return String::new();
    }
    let mut out: String = s.chars().take(max_len - 1).collect();
    out.push('\u{2026}');
    out
}
