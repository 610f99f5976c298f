//! Structural checks on parsed documents, used by the test suites.

use crate::tree::{Block, Document};

/// Panics if `doc` breaks an invariant the parser guarantees.
pub fn check(doc: &Document) {
    check_blocks(doc.blocks());
}

fn check_blocks(blocks: &[Block]) {
    for b in blocks {
        match b {
            Block::Paragraph { lines } => {
                assert!(!lines.is_empty(), "paragraph without lines");
                for line in lines {
                    assert!(
                        !line.is_empty() && line.trim() == line,
                        "paragraph line not trimmed: {line:?}"
                    );
                }
            }
            Block::Header { level, content } => {
                assert!(matches!(level, 1 | 2), "setext header level {level}");
                assert!(!content.is_empty(), "empty header");
            }
            Block::Blockquote { children } => check_blocks(children),
            Block::List {
                ordered,
                style,
                delimiter,
                items,
                ..
            } => {
                assert_eq!(*ordered, style.is_ordered(), "ordered flag disagrees with {style:?}");
                assert_eq!(
                    delimiter.is_bullet(),
                    !ordered,
                    "{delimiter:?} delimiter on {style:?} list"
                );
                assert!(!items.is_empty(), "list without items");
                for item in items {
                    check_blocks(&item.children);
                }
            }
            Block::ThematicBreak => {}
            Block::CodeBlock { fenced, .. } => assert!(fenced, "unfenced code block"),
        }
    }
}
