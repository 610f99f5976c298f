use std::fmt::{self, Write};

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::tree::{Block, Document, ListItem, ListStyle};

/// HTML view of a document.
///
/// Blocks are written one after another separated by a newline; nothing is
/// emitted for an empty document.
pub struct Html<'a> {
    doc: &'a Document,
}

impl<'a> Html<'a> {
    pub fn new(doc: &'a Document) -> Self {
        Html { doc }
    }
}

impl fmt::Display for Html<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_blocks(f, self.doc.blocks())
    }
}

fn write_blocks(f: &mut impl Write, blocks: &[Block]) -> fmt::Result {
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            f.write_char('\n')?;
        }
        write_block(f, block)?;
    }
    Ok(())
}

fn write_block(f: &mut impl Write, block: &Block) -> fmt::Result {
    match block {
        Block::Paragraph { lines } => {
            f.write_str("<p>")?;
            write_lines(f, lines)?;
            f.write_str("</p>")
        }
        Block::Header { level, content } => {
            write!(f, "<h{level}>{}</h{level}>", encode_text(content))
        }
        Block::Blockquote { children } => {
            f.write_str("<blockquote>\n")?;
            if !children.is_empty() {
                write_blocks(f, children)?;
                f.write_char('\n')?;
            }
            f.write_str("</blockquote>")
        }
        Block::List {
            ordered,
            style,
            start,
            items,
            ..
        } => {
            let tag = if *ordered { "ol" } else { "ul" };
            write!(f, "<{tag}")?;
            if let Some(kind) = type_attribute(*style) {
                write!(f, " type=\"{kind}\"")?;
            }
            if *ordered && *start != 1 {
                write!(f, " start=\"{start}\"")?;
            }
            f.write_str(">\n")?;
            for item in items {
                write_item(f, item)?;
                f.write_char('\n')?;
            }
            write!(f, "</{tag}>")
        }
        Block::ThematicBreak => f.write_str("<hr />"),
        Block::CodeBlock {
            language, lines, ..
        } => {
            f.write_str("<pre><code")?;
            if let Some(lang) = language {
                write!(f, " class=\"language-{}\"", encode_double_quoted_attribute(lang))?;
            }
            f.write_char('>')?;
            for line in lines {
                f.write_str(&encode_text(line))?;
                f.write_char('\n')?;
            }
            f.write_str("</code></pre>")
        }
    }
}

fn write_item(f: &mut impl Write, item: &ListItem) -> fmt::Result {
    match item.children.as_slice() {
        [] => f.write_str("<li></li>"),
        [Block::Paragraph { lines }] => {
            f.write_str("<li>")?;
            write_lines(f, lines)?;
            f.write_str("</li>")
        }
        children => {
            f.write_str("<li>\n")?;
            write_blocks(f, children)?;
            f.write_str("\n</li>")
        }
    }
}

fn write_lines(f: &mut impl Write, lines: &[String]) -> fmt::Result {
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            f.write_char('\n')?;
        }
        f.write_str(&encode_text(line))?;
    }
    Ok(())
}

fn type_attribute(style: ListStyle) -> Option<&'static str> {
    match style {
        ListStyle::LowerAlpha => Some("a"),
        ListStyle::UpperAlpha => Some("A"),
        ListStyle::LowerRoman => Some("i"),
        ListStyle::UpperRoman => Some("I"),
        ListStyle::None | ListStyle::Decimal => None,
    }
}
