pub mod block_quote;
pub mod code_fence;
pub mod list_marker;
pub mod list_style;
pub mod paragraph;
pub mod setext;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind, FenceOpen};
pub use list_marker::{ListMarker, MarkerToken};
pub use list_style::{ListStyleClassifier, StyleGuess};
pub use paragraph::Paragraph;
pub use setext::SetextUnderline;
pub use thematic_break::ThematicBreak;

/// Number of leading spaces and tabs. Each counts as one column.
pub fn leading_whitespace(s: &str) -> usize {
    s.bytes().take_while(|&b| b == b' ' || b == b'\t').count()
}

/// Removes up to `columns` leading whitespace characters.
pub fn dedent(s: &str, columns: usize) -> &str {
    &s[leading_whitespace(s).min(columns)..]
}
