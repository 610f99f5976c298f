pub mod blocks;
pub mod invariants;
pub mod rope;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

use crate::tree::Document;
use blocks::BlockBuilder;
use rope::raw_lines;

/// Parses a rope into a [`Document`].
///
/// Total over its input: every line ends up in some block, unknown
/// constructs degrade to paragraph text and unterminated ones are closed at
/// the end of input.
pub fn parse_rope(rope: &Rope) -> Document {
    let mut builder = BlockBuilder::new();

    for line in raw_lines(rope) {
        builder.push(&line);
    }

    Document::new(builder.finish())
}

/// Convenience: parse a string.
pub fn parse(text: &str) -> Document {
    parse_rope(&Rope::from(text))
}
