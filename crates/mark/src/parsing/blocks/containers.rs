use log::trace;

use crate::tree::{Block, Delimiter, ListItem};

use super::{
    classify::LineClass,
    kinds::{ListMarker, ListStyleClassifier, MarkerToken, StyleGuess, dedent},
};

/// An open container at one nesting level.
///
/// Lines that belong to the container are collected with its prefix removed
/// (one level of `>`, or the item's indentation) and parsed as a
/// sub-document once the container closes.
#[derive(Debug)]
pub enum ContainerFrame {
    BlockQuote {
        lines: Vec<String>,
        /// Blank lines seen since the last quoted line.
        pending: usize,
    },
    List(OpenList),
}

#[derive(Debug)]
pub struct OpenList {
    delimiter: Delimiter,
    style: StyleGuess,
    first_token: MarkerToken,
    items: Vec<OpenItem>,
    /// Blank lines seen since the last item line, already dedented.
    pending: Vec<String>,
}

#[derive(Debug)]
struct OpenItem {
    column: usize,
    lines: Vec<String>,
}

impl OpenItem {
    fn new(marker: &ListMarker) -> Self {
        let lines = if marker.is_empty() {
            vec![]
        } else {
            vec![marker.content.to_string()]
        };
        Self {
            column: marker.content_column(),
            lines,
        }
    }
}

impl ContainerFrame {
    pub fn block_quote(first: &str) -> Self {
        ContainerFrame::BlockQuote {
            lines: vec![first.to_string()],
            pending: 0,
        }
    }

    pub fn list(marker: &ListMarker) -> Self {
        ContainerFrame::List(OpenList {
            delimiter: marker.delimiter,
            style: ListStyleClassifier::guess(&marker.token),
            first_token: marker.token.clone(),
            items: vec![OpenItem::new(marker)],
            pending: vec![],
        })
    }

    /// Offers a line to the container. Returns `false` when the line does not
    /// belong to it, in which case the caller closes the container and
    /// handles the line itself.
    pub fn accept(&mut self, c: &LineClass) -> bool {
        match self {
            ContainerFrame::BlockQuote { lines, pending } => {
                if c.is_blank {
                    *pending += 1;
                    return true;
                }
                let Some(rest) = c.quote else {
                    return false;
                };
                // Blank lines between quoted lines stay inside the quote.
                lines.extend(std::iter::repeat_n(String::new(), *pending));
                *pending = 0;
                lines.push(rest.to_string());
                true
            }
            ContainerFrame::List(list) => list.accept(c),
        }
    }

    /// Closes the container, parsing its collected lines with `parse`.
    pub fn close(self, parse: impl Fn(&[String]) -> Vec<Block>) -> Block {
        match self {
            ContainerFrame::BlockQuote { lines, .. } => Block::Blockquote {
                children: parse(&lines),
            },
            ContainerFrame::List(list) => list.close(parse),
        }
    }
}

impl OpenList {
    fn accept(&mut self, c: &LineClass) -> bool {
        let Some(item) = self.items.last_mut() else {
            return false;
        };

        if c.is_blank {
            self.pending.push(dedent(c.text, item.column).to_string());
            return true;
        }

        if c.indent >= item.column {
            item.lines.append(&mut self.pending);
            item.lines.push(dedent(c.text, item.column).to_string());
            return true;
        }

        if c.thematic_break {
            return false;
        }
        let Some(marker) = &c.list_marker else {
            return false;
        };
        if marker.delimiter != self.delimiter {
            return false;
        }
        let Some(style) = ListStyleClassifier::refine(self.style, &marker.token) else {
            trace!("marker {:?} does not continue {:?} list", marker.token, self.style);
            return false;
        };

        self.style = style;
        self.pending.clear();
        self.items.push(OpenItem::new(marker));
        true
    }

    fn close(self, parse: impl Fn(&[String]) -> Vec<Block>) -> Block {
        let style = ListStyleClassifier::resolve(self.style);
        let start = ListStyleClassifier::ordinal(&self.first_token, style);
        let items = self
            .items
            .iter()
            .map(|item| ListItem::new(parse(&item.lines)))
            .collect();

        Block::List {
            ordered: style.is_ordered(),
            style,
            delimiter: self.delimiter,
            start,
            items,
        }
    }
}
