use std::borrow::Cow;

use xi_rope::Rope;

/// Returns an iterator over the raw lines of the rope.
///
/// Uses `lines_raw` so line endings are kept; the classifier strips `\n` and
/// `\r\n` itself.
pub fn raw_lines(rope: &Rope) -> impl Iterator<Item = Cow<'_, str>> + '_ {
    rope.lines_raw(..)
}
