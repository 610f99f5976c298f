pub mod io;
pub mod parsing;
pub mod render;
pub mod tree;


// Re-export key types for easier usage
pub use io::*;
pub use parsing::{parse, parse_rope};
pub use render::{Format, Html, MarkSource, render, render_html, render_mark};
pub use tree::*;

/// Parses Mark source and renders it to HTML.
pub fn to_html(text: &str) -> String {
    render(&parse(text))
}

/// Parses Mark source and writes it back in canonical form.
pub fn format(text: &str) -> String {
    render_mark(&parse(text))
}
