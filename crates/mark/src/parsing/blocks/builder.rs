use crate::tree::Block;

use super::{
    classify::{LineClass, MarkLineClassifier},
    containers::ContainerFrame,
    kinds::{CodeFence, FenceOpen, Paragraph},
    open::{BlockOpen, OpenContext, try_open},
};

#[derive(Debug)]
enum LeafState {
    None,
    Paragraph { lines: Vec<String> },
    Fence { open: FenceOpen, lines: Vec<String> },
}

/// Builds the blocks of one nesting level from a stream of lines.
///
/// At most one leaf (paragraph or fence) or one container is open at a time.
/// A container collects its lines and hands them to a builder one level
/// deeper when it closes.
pub struct BlockBuilder {
    depth: usize,
    container: Option<ContainerFrame>,
    leaf: LeafState,
    out: Vec<Block>,
}

impl BlockBuilder {
    /// Nesting depth past which `>` and list markers are read as text.
    pub const MAX_DEPTH: usize = 64;

    pub fn new() -> Self {
        Self::at_depth(0)
    }

    fn at_depth(depth: usize) -> Self {
        Self {
            depth,
            container: None,
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, line: &str) {
        let c = MarkLineClassifier.classify(line);

        if let Some(frame) = &mut self.container {
            if frame.accept(&c) {
                return;
            }
            self.close_container();
        }

        if self.in_fence() {
            self.consume_fence_line(c.text);
            return;
        }

        if c.is_blank {
            self.flush_paragraph();
            return;
        }

        let cx = OpenContext {
            in_paragraph: self.in_paragraph(),
            allow_containers: self.depth < Self::MAX_DEPTH,
        };
        match try_open(&c, cx) {
            Some(open) => self.open_block(open),
            None => self.extend_paragraph(&c),
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF closes whatever is still open.
        self.close_container();
        self.flush_paragraph();
        self.flush_fence();
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn in_paragraph(&self) -> bool {
        matches!(self.leaf, LeafState::Paragraph { .. })
    }

    fn open_block(&mut self, open: BlockOpen) {
        match open {
            BlockOpen::SetextUnderline { level } => self.underline_paragraph(level),
            BlockOpen::ThematicBreak => {
                self.flush_paragraph();
                self.out.push(Block::ThematicBreak);
            }
            BlockOpen::FencedCode(open) => {
                self.flush_paragraph();
                self.leaf = LeafState::Fence {
                    open,
                    lines: vec![],
                };
            }
            BlockOpen::ListItem(marker) => {
                self.flush_paragraph();
                self.container = Some(ContainerFrame::list(&marker));
            }
            BlockOpen::BlockQuote { remainder } => {
                self.flush_paragraph();
                self.container = Some(ContainerFrame::block_quote(remainder));
            }
        }
    }

    /// Turns the paragraph's last line into a header. Earlier lines stay a
    /// paragraph of their own.
    fn underline_paragraph(&mut self, level: u8) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        let LeafState::Paragraph { mut lines } = prev else {
            self.leaf = prev;
            return;
        };
        let Some(content) = lines.pop() else {
            return;
        };
        if !lines.is_empty() {
            self.out.push(Block::Paragraph { lines });
        }
        self.out.push(Block::Header { level, content });
    }

    fn consume_fence_line(&mut self, text: &str) {
        let LeafState::Fence { open, lines } = &mut self.leaf else {
            return;
        };
        if CodeFence::closes(open, text) {
            self.flush_fence();
        } else {
            lines.push(CodeFence::content_line(open, text).to_string());
        }
    }

    fn extend_paragraph(&mut self, c: &LineClass) {
        let line = Paragraph::line(c.text);
        match &mut self.leaf {
            LeafState::Paragraph { lines } => lines.push(line),
            _ => self.leaf = LeafState::Paragraph { lines: vec![line] },
        }
    }

    fn flush_paragraph(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Paragraph { lines } = prev {
            self.out.push(Block::Paragraph { lines });
        } else {
            self.leaf = prev; // put back non-paragraph leaf (e.g. fence)
        }
    }

    fn flush_fence(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Fence { open, lines } = prev {
            // Unterminated fences run to the end of input.
            self.out.push(Block::CodeBlock {
                language: open.language,
                lines,
                fenced: true,
            });
        } else {
            self.leaf = prev;
        }
    }

    fn close_container(&mut self) {
        if let Some(frame) = self.container.take() {
            let depth = self.depth + 1;
            self.out.push(frame.close(|lines| parse_lines(lines, depth)));
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a container's collected lines as a sub-document.
fn parse_lines(lines: &[String], depth: usize) -> Vec<Block> {
    let mut builder = BlockBuilder::at_depth(depth);
    for line in lines {
        builder.push(line);
    }
    builder.finish()
}
