use super::kinds::{
    BlockQuote, CodeFence, FenceOpen, ListMarker, SetextUnderline, ThematicBreak,
    leading_whitespace,
};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Which fact wins is decided by
/// [`super::open::try_open`] together with the builder's state.
#[derive(Debug, Clone)]
pub struct LineClass<'a> {
    /// The line without its line ending.
    pub text: &'a str,
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
    /// Leading whitespace columns.
    pub indent: usize,
    /// Header level if the line could underline a setext header.
    pub setext: Option<u8>,
    pub thematic_break: bool,
    /// If the line looks like a fence opener.
    pub fence: Option<FenceOpen>,
    pub list_marker: Option<ListMarker<'a>>,
    /// Remainder after one level of `>` quoting, if quoted.
    pub quote: Option<&'a str>,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkLineClassifier;

impl MarkLineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let text = line.trim_end_matches(['\r', '\n']);
        let is_blank = text.trim().is_empty();
        if is_blank {
            return LineClass {
                text,
                is_blank,
                indent: leading_whitespace(text),
                setext: None,
                thematic_break: false,
                fence: None,
                list_marker: None,
                quote: None,
            };
        }

        LineClass {
            text,
            is_blank,
            indent: leading_whitespace(text),
            setext: SetextUnderline::level(text),
            thematic_break: ThematicBreak::matches(text),
            fence: CodeFence::open(text),
            list_marker: ListMarker::parse(text),
            quote: BlockQuote::strip_one(text),
        }
    }
}
