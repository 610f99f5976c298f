use std::fmt;

use crate::parsing::blocks::{
    MarkLineClassifier,
    kinds::{FenceKind, list_style::to_roman},
    open::{OpenContext, try_open},
};
use crate::tree::{Block, Delimiter, Document, ListItem, ListStyle};

/// Canonical Mark source for a document.
///
/// Parsing the output yields the same tree as the document it was written
/// from. Blocks are separated by one blank line, except a header that has
/// to stay under its paragraph, and the output ends with a newline unless
/// the document is empty.
pub struct MarkSource<'a> {
    doc: &'a Document,
}

impl<'a> MarkSource<'a> {
    pub fn new(doc: &'a Document) -> Self {
        MarkSource { doc }
    }
}

impl fmt::Display for MarkSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for line in block_lines(self.doc.blocks()) {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

fn block_lines(blocks: &[Block]) -> Vec<String> {
    let mut out = vec![];
    let mut prev: Option<&Block> = None;
    for block in blocks {
        if let Some(prev) = prev
            && !continues_paragraph(prev, block)
        {
            out.push(String::new());
        }
        write_block(&mut out, block);
        prev = Some(block);
    }
    out
}

/// A header whose text would open a block on a fresh line (`2. Results`,
/// `-`) was read as text only because a paragraph was open above it. It
/// must stay directly under that paragraph.
fn continues_paragraph(prev: &Block, block: &Block) -> bool {
    match (prev, block) {
        (Block::Paragraph { .. }, Block::Header { content, .. }) => opens_block(content),
        _ => false,
    }
}

fn opens_block(line: &str) -> bool {
    let cx = OpenContext {
        in_paragraph: false,
        allow_containers: true,
    };
    try_open(&MarkLineClassifier.classify(line), cx).is_some()
}

fn write_block(out: &mut Vec<String>, block: &Block) {
    match block {
        Block::Paragraph { lines } => out.extend(lines.iter().cloned()),
        Block::Header { level, content } => {
            let ch = if *level == 1 { "=" } else { "-" };
            out.push(content.clone());
            out.push(ch.repeat(content.chars().count().max(3)));
        }
        Block::Blockquote { children } => {
            let inner = block_lines(children);
            if inner.is_empty() {
                out.push(">".to_string());
            }
            out.extend(inner.into_iter().map(|line| {
                if line.is_empty() {
                    ">".to_string()
                } else {
                    format!("> {line}")
                }
            }));
        }
        Block::List {
            style,
            delimiter,
            start,
            items,
            ..
        } => {
            for (n, item) in (*start..).zip(items) {
                write_item(out, &marker(*style, *delimiter, n), item);
            }
        }
        Block::ThematicBreak => out.push("---".to_string()),
        Block::CodeBlock {
            language, lines, ..
        } => {
            let kind = match language {
                Some(lang) if lang.contains('`') => FenceKind::Tildes,
                _ => FenceKind::Backticks,
            };
            let fence = fence_for(kind, lines);
            out.push(format!("{fence}{}", language.as_deref().unwrap_or("")));
            out.extend(lines.iter().cloned());
            out.push(fence);
        }
    }
}

fn write_item(out: &mut Vec<String>, marker: &str, item: &ListItem) {
    let inner = block_lines(&item.children);
    let indent = " ".repeat(marker.len() + 1);

    // A break right after a `-` or `*` marker would read as one long break.
    let inline_first = !matches!(item.children.first(), None | Some(Block::ThematicBreak));
    let mut lines = inner.into_iter();
    if inline_first && let Some(first) = lines.next() {
        out.push(format!("{marker} {first}"));
    } else {
        out.push(marker.to_string());
    }

    out.extend(lines.map(|line| {
        if line.is_empty() {
            line
        } else {
            format!("{indent}{line}")
        }
    }));
}

fn marker(style: ListStyle, delimiter: Delimiter, n: u32) -> String {
    let d = delimiter.as_char();
    match style {
        ListStyle::None => d.to_string(),
        ListStyle::Decimal => format!("{n}{d}"),
        ListStyle::LowerAlpha => format!("{}{d}", alpha(n)),
        ListStyle::UpperAlpha => format!("{}{d}", alpha(n).to_ascii_uppercase()),
        ListStyle::LowerRoman => format!("{}{d}", to_roman(n).to_ascii_lowercase()),
        ListStyle::UpperRoman => format!("{}{d}", to_roman(n)),
    }
}

/// Letter for ordinal `n`; past `z` the marker stays `z`.
fn alpha(n: u32) -> char {
    let offset = n.clamp(1, 26) - 1;
    char::from(b'a' + offset as u8)
}

/// A fence one longer than any run of its character in the content.
fn fence_for(kind: FenceKind, lines: &[String]) -> String {
    let ch = kind.as_char();
    let longest = lines
        .iter()
        .map(|line| longest_run(line, ch))
        .max()
        .unwrap_or(0);
    ch.to_string().repeat((longest + 1).max(3))
}

fn longest_run(s: &str, ch: char) -> usize {
    let mut best = 0;
    let mut run = 0;
    for c in s.chars() {
        if c == ch {
            run += 1;
            best = best.max(run);
        } else {
            run = 0;
        }
    }
    best
}
