use super::{
    classify::LineClass,
    kinds::{FenceOpen, ListMarker},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockOpen<'a> {
    SetextUnderline { level: u8 },
    ThematicBreak,
    FencedCode(FenceOpen),
    ListItem(ListMarker<'a>),
    BlockQuote { remainder: &'a str },
}

/// What the builder knows when it asks for an opener.
#[derive(Debug, Clone, Copy)]
pub struct OpenContext {
    /// A paragraph is being accumulated at this level.
    pub in_paragraph: bool,
    /// Containers (lists, quotes) may still nest deeper.
    pub allow_containers: bool,
}

/// Picks the block a non-blank line opens, in priority order. `None` means
/// the line is paragraph text.
///
/// A setext underline is only considered below a paragraph line, so `---`
/// after a paragraph is a header and anywhere else a thematic break.
pub fn try_open<'a>(c: &LineClass<'a>, cx: OpenContext) -> Option<BlockOpen<'a>> {
    if cx.in_paragraph
        && let Some(level) = c.setext
    {
        return Some(BlockOpen::SetextUnderline { level });
    }
    if c.thematic_break {
        return Some(BlockOpen::ThematicBreak);
    }
    if let Some(fence) = &c.fence {
        return Some(BlockOpen::FencedCode(fence.clone()));
    }
    if !cx.allow_containers {
        return None;
    }
    if let Some(marker) = &c.list_marker
        && (!cx.in_paragraph || marker.can_interrupt_paragraph())
    {
        return Some(BlockOpen::ListItem(marker.clone()));
    }
    c.quote.map(|remainder| BlockOpen::BlockQuote { remainder })
}
