/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// classifier code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips a single level of quoting from a line.
    ///
    /// Leading whitespace, the `>` and one optional following space are
    /// removed. Further `>` characters are left for the nested parse, so
    /// `>> text` yields `> text`.
    ///
    /// Returns `None` when the line is not quoted.
    pub fn strip_one(s: &str) -> Option<&str> {
        let rest = s.trim_start_matches([' ', '\t']);
        let rest = rest.strip_prefix(Self::PREFIX)?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }
}
