use std::sync::OnceLock;

use regex::Regex;

use crate::tree::Delimiter;

use super::{leading_whitespace, list_style::roman_value};

/// The part of a list marker before its delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerToken {
    Bullet,
    /// Decimal digits, a single letter, or a roman numeral.
    Ordered(String),
}

/// A list item marker found at the start of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListMarker<'a> {
    /// Whitespace before the marker.
    pub indent: usize,
    pub token: MarkerToken,
    pub delimiter: Delimiter,
    /// Width of the marker itself: 1 for `-`, 3 for `10.`.
    pub width: usize,
    /// Whitespace between the marker and the item content.
    pub spacing: usize,
    /// Item text on the marker line.
    pub content: &'a str,
}

fn ordered_re() -> &'static Regex {
    static ORDERED_RE: OnceLock<Regex> = OnceLock::new();
    ORDERED_RE.get_or_init(|| {
        Regex::new(r"^([0-9]{1,9}|[A-Za-z]+)([.)])").expect("Invalid list marker regex")
    })
}

impl<'a> ListMarker<'a> {
    /// More whitespace than this after a marker belongs to the content.
    pub const MAX_SPACING: usize = 4;

    /// Parses a bullet (`-`, `*`, `+`) or ordered (`1.`, `b)`, `iv.`) marker.
    /// The marker must be followed by whitespace or the end of the line.
    pub fn parse(line: &'a str) -> Option<Self> {
        let indent = leading_whitespace(line);
        let rest = &line[indent..];

        let (token, delimiter, width) = match rest.chars().next()? {
            c @ ('-' | '*' | '+') => (MarkerToken::Bullet, Delimiter::from_char(c)?, 1),
            _ => {
                let caps = ordered_re().captures(rest)?;
                let token = caps.get(1)?.as_str();
                let delimiter = Delimiter::from_char(caps.get(2)?.as_str().chars().next()?)?;
                if !is_ordered_token(token) {
                    return None;
                }
                (
                    MarkerToken::Ordered(token.to_string()),
                    delimiter,
                    token.len() + 1,
                )
            }
        };

        let after = &rest[width..];
        if !after.is_empty() && !after.starts_with([' ', '\t']) {
            return None;
        }

        let ws = leading_whitespace(after);
        let (spacing, content) = if after.trim().is_empty() {
            (1, "")
        } else if ws > Self::MAX_SPACING {
            (1, &after[1..])
        } else {
            (ws, &after[ws..])
        };

        Some(Self {
            indent,
            token,
            delimiter,
            width,
            spacing,
            content,
        })
    }

    /// Column at which the item's content starts. Continuation lines must be
    /// indented at least this far.
    pub fn content_column(&self) -> usize {
        self.indent + self.width + self.spacing
    }

    /// Whether the marker line carries no item text.
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// An empty item never interrupts a paragraph, and an ordered marker only
    /// does when it starts counting from one.
    pub fn can_interrupt_paragraph(&self) -> bool {
        if self.is_empty() {
            return false;
        }
        match &self.token {
            MarkerToken::Bullet => true,
            MarkerToken::Ordered(t) => matches!(t.as_str(), "1" | "a" | "A" | "i" | "I"),
        }
    }
}

fn is_ordered_token(token: &str) -> bool {
    token.bytes().all(|b| b.is_ascii_digit()) || token.len() == 1 || roman_value(token).is_some()
}
