use super::leading_whitespace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    pub fn as_char(self) -> char {
        match self {
            FenceKind::Backticks => '`',
            FenceKind::Tildes => '~',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '`' => Some(FenceKind::Backticks),
            '~' => Some(FenceKind::Tildes),
            _ => None,
        }
    }
}

/// An opening fence line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceOpen {
    pub kind: FenceKind,
    /// Number of fence characters; the closing fence needs at least as many.
    pub len: usize,
    /// Leading whitespace before the fence, stripped from content lines.
    pub indent: usize,
    pub language: Option<String>,
}

pub struct CodeFence;

impl CodeFence {
    pub const MIN_LEN: usize = 3;

    /// Recognises an opening fence: three or more backticks or tildes, then
    /// an optional info string whose first word is the language tag.
    pub fn open(line: &str) -> Option<FenceOpen> {
        let indent = leading_whitespace(line);
        let rest = &line[indent..];
        let kind = FenceKind::from_char(rest.chars().next()?)?;
        let len = Self::run_len(rest, kind.as_char());
        if len < Self::MIN_LEN {
            return None;
        }

        let info = rest[len..].trim();
        // A backtick in a backtick fence's info string would make it
        // ambiguous with inline code.
        if kind == FenceKind::Backticks && info.contains('`') {
            return None;
        }

        Some(FenceOpen {
            kind,
            len,
            indent,
            language: info.split_whitespace().next().map(str::to_string),
        })
    }

    /// Whether `line` closes the fence opened by `open`: the same character,
    /// at least as many of them, and nothing else but whitespace.
    pub fn closes(open: &FenceOpen, line: &str) -> bool {
        let t = line.trim();
        let ch = open.kind.as_char();
        let len = Self::run_len(t, ch);
        len >= open.len && len == t.len()
    }

    /// Strips up to the opener's indentation from a content line.
    pub fn content_line<'a>(open: &FenceOpen, line: &'a str) -> &'a str {
        let strip = leading_whitespace(line).min(open.indent);
        &line[strip..]
    }

    fn run_len(s: &str, ch: char) -> usize {
        s.chars().take_while(|&c| c == ch).count()
    }
}
