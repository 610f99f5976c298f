//! Output formats for parsed documents.

pub mod html;
pub mod mark;

use serde::{Deserialize, Serialize};

use crate::tree::Document;

pub use html::Html;
pub use mark::MarkSource;

/// Target of [`Format::render`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Html,
    Mark,
}

impl Format {
    pub fn render(self, doc: &Document) -> String {
        match self {
            Format::Html => render_html(doc),
            Format::Mark => render_mark(doc),
        }
    }
}

/// Renders a document to HTML.
pub fn render(doc: &Document) -> String {
    render_html(doc)
}

pub fn render_html(doc: &Document) -> String {
    Html::new(doc).to_string()
}

/// Writes a document back out as canonical Mark source.
pub fn render_mark(doc: &Document) -> String {
    MarkSource::new(doc).to_string()
}
