/// Setext header underline. Only valid directly below a paragraph line.
pub struct SetextUnderline;

impl SetextUnderline {
    pub const MIN_LEN: usize = 3;

    /// Returns the header level for an underline: 1 for `=`, 2 for `-`.
    ///
    /// The underline must be at least three characters long and may carry
    /// surrounding whitespace but no interior gaps.
    pub fn level(line: &str) -> Option<u8> {
        let t = line.trim();
        if t.len() < Self::MIN_LEN {
            return None;
        }
        if t.bytes().all(|b| b == b'=') {
            Some(1)
        } else if t.bytes().all(|b| b == b'-') {
            Some(2)
        } else {
            None
        }
    }
}
