//! The document tree produced by the parser.
//!
//! The root of the tree is a [`Document`]; everything below it is a [`Block`].
//! Ownership is strictly tree shaped: every block lives in exactly one parent
//! (`Document`, [`ListItem`] or `Blockquote`) and nothing is shared.

use serde::Serialize;

/// A parsed Mark document. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }
}

/// Block level elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum Block {
    /// Consecutive text lines, each trimmed of surrounding whitespace.
    Paragraph { lines: Vec<String> },
    /// A quoted sub-document.
    Blockquote { children: Vec<Block> },
    /// A setext header. `level` is 1 for `===` and 2 for `---`.
    Header { level: u8, content: String },
    List {
        ordered: bool,
        style: ListStyle,
        delimiter: Delimiter,
        /// Ordinal of the first item under `style`; 1 for bullet lists.
        start: u32,
        items: Vec<ListItem>,
    },
    ThematicBreak,
    /// Verbatim fenced code. `fenced` is always true: indentation never
    /// produces a code block in Mark.
    CodeBlock {
        language: Option<String>,
        lines: Vec<String>,
        fenced: bool,
    },
}

impl Block {
    pub fn paragraph<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Block::Paragraph {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn header(level: u8, content: impl Into<String>) -> Self {
        Block::Header {
            level,
            content: content.into(),
        }
    }

    pub fn code<I, S>(language: Option<&str>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Block::CodeBlock {
            language: language.map(str::to_string),
            lines: lines.into_iter().map(Into::into).collect(),
            fenced: true,
        }
    }

    /// Short name of the variant, used for structural comparisons.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Paragraph { .. } => "Paragraph",
            Block::Blockquote { .. } => "Blockquote",
            Block::Header { .. } => "Header",
            Block::List { .. } => "List",
            Block::ThematicBreak => "ThematicBreak",
            Block::CodeBlock { .. } => "CodeBlock",
        }
    }
}

/// A single entry of a [`Block::List`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub children: Vec<Block>,
}

impl ListItem {
    pub fn new(children: Vec<Block>) -> Self {
        Self { children }
    }

    /// A tight item holds nothing but a single paragraph.
    pub fn is_tight(&self) -> bool {
        matches!(self.children.as_slice(), [Block::Paragraph { .. }])
    }
}

/// Numbering style of a list, fixed by its first item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ListStyle {
    /// Bullet lists.
    None,
    LowerAlpha,
    UpperAlpha,
    LowerRoman,
    UpperRoman,
    Decimal,
}

impl ListStyle {
    pub fn is_ordered(self) -> bool {
        !matches!(self, ListStyle::None)
    }
}

/// The marker family a list was written with. Bullet lists record the
/// bullet character, ordered lists the character closing the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Delimiter {
    Dash,
    Star,
    Plus,
    Period,
    Paren,
}

impl Delimiter {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '-' => Some(Delimiter::Dash),
            '*' => Some(Delimiter::Star),
            '+' => Some(Delimiter::Plus),
            '.' => Some(Delimiter::Period),
            ')' => Some(Delimiter::Paren),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Delimiter::Dash => '-',
            Delimiter::Star => '*',
            Delimiter::Plus => '+',
            Delimiter::Period => '.',
            Delimiter::Paren => ')',
        }
    }

    pub fn is_bullet(self) -> bool {
        matches!(self, Delimiter::Dash | Delimiter::Star | Delimiter::Plus)
    }
}
