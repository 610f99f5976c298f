/// Paragraph block type.
///
/// Paragraphs have no delimiters - they are the default leaf block when no
/// other block opener matches. Each line is kept trimmed.
pub struct Paragraph;

impl Paragraph {
    pub fn line(raw: &str) -> String {
        raw.trim().to_string()
    }
}
