//! Numbering style inference for ordered lists.
//!
//! Single letters `i`, `v` and `x` (in either case) read as both alphabetic
//! and roman markers. The tie-break policy is:
//!
//! 1. A list opened by one of those letters stays undecided.
//! 2. The first later item whose token is unambiguous and of the same case
//!    decides the style (`ii` makes it roman, `j` makes it alphabetic).
//! 3. A list that ends undecided is alphabetic.
//!
//! Once decided, the style is fixed and a token that does not fit it starts
//! a new list.

use log::trace;

use crate::tree::ListStyle;

use super::list_marker::MarkerToken;

const AMBIGUOUS: [u8; 3] = [b'i', b'v', b'x'];

/// The style of a list as known so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleGuess {
    Known(ListStyle),
    /// Alphabetic or roman, not yet decided.
    Ambiguous { upper: bool },
}

pub struct ListStyleClassifier;

impl ListStyleClassifier {
    /// Classifies the marker of a list's first item.
    pub fn guess(token: &MarkerToken) -> StyleGuess {
        let t = match token {
            MarkerToken::Bullet => return StyleGuess::Known(ListStyle::None),
            MarkerToken::Ordered(t) => t.as_str(),
        };
        if t.bytes().all(|b| b.is_ascii_digit()) {
            return StyleGuess::Known(ListStyle::Decimal);
        }

        let upper = t.bytes().all(|b| b.is_ascii_uppercase());
        if t.len() > 1 {
            StyleGuess::Known(roman(upper))
        } else if t.bytes().all(|b| AMBIGUOUS.contains(&b.to_ascii_lowercase())) {
            StyleGuess::Ambiguous { upper }
        } else {
            StyleGuess::Known(alpha(upper))
        }
    }

    /// Folds a further item's marker into the list's style.
    ///
    /// Returns `None` when the token cannot belong to the list, otherwise the
    /// (possibly now decided) style.
    pub fn refine(current: StyleGuess, token: &MarkerToken) -> Option<StyleGuess> {
        let next = Self::guess(token);
        match current {
            StyleGuess::Known(style) => {
                let fits = match next {
                    StyleGuess::Known(s) => s == style,
                    StyleGuess::Ambiguous { upper } => style == alpha(upper) || style == roman(upper),
                };
                fits.then_some(current)
            }
            StyleGuess::Ambiguous { upper } => match next {
                StyleGuess::Known(s) if s == alpha(upper) || s == roman(upper) => {
                    trace!("list style decided as {s:?} by later item");
                    Some(next)
                }
                StyleGuess::Ambiguous { upper: u } if u == upper => Some(current),
                _ => None,
            },
        }
    }

    /// Final style of a list; undecided lists fall back to alphabetic.
    pub fn resolve(guess: StyleGuess) -> ListStyle {
        match guess {
            StyleGuess::Known(style) => style,
            StyleGuess::Ambiguous { upper } => {
                trace!("ambiguous list style resolved as alphabetic");
                alpha(upper)
            }
        }
    }

    /// Ordinal value of `token` read under `style`. Bullets count as 1.
    pub fn ordinal(token: &MarkerToken, style: ListStyle) -> u32 {
        let MarkerToken::Ordered(t) = token else {
            return 1;
        };
        let value = match style {
            ListStyle::None => None,
            ListStyle::Decimal => t.parse().ok(),
            ListStyle::LowerAlpha | ListStyle::UpperAlpha => t
                .bytes()
                .next()
                .and_then(|b| b.to_ascii_lowercase().checked_sub(b'a'))
                .map(|d| u32::from(d) + 1),
            ListStyle::LowerRoman | ListStyle::UpperRoman => roman_value(t),
        };
        value.unwrap_or(1)
    }
}

fn alpha(upper: bool) -> ListStyle {
    if upper {
        ListStyle::UpperAlpha
    } else {
        ListStyle::LowerAlpha
    }
}

fn roman(upper: bool) -> ListStyle {
    if upper {
        ListStyle::UpperRoman
    } else {
        ListStyle::LowerRoman
    }
}

const ROMAN_TABLE: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Value of a roman numeral written in a single case.
///
/// Only canonical numerals are accepted (`iv`, not `iiii`), so words that
/// happen to use roman letters are not mistaken for list markers.
pub fn roman_value(s: &str) -> Option<u32> {
    let uniform =
        s.bytes().all(|b| b.is_ascii_lowercase()) || s.bytes().all(|b| b.is_ascii_uppercase());
    if s.is_empty() || !uniform {
        return None;
    }

    let digit = |c: char| match c {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    };
    let upper = s.to_ascii_uppercase();
    let values = upper.chars().map(digit).collect::<Option<Vec<i64>>>()?;

    let mut total = 0i64;
    for (i, &v) in values.iter().enumerate() {
        match values.get(i + 1) {
            Some(&next) if v < next => total -= v,
            _ => total += v,
        }
    }
    let total = u32::try_from(total).ok()?;
    (to_roman(total) == upper).then_some(total)
}

/// Upper case roman numeral for `n`; empty for zero.
pub fn to_roman(mut n: u32) -> String {
    let mut out = String::new();
    for (value, numeral) in ROMAN_TABLE {
        while n >= value {
            out.push_str(numeral);
            n -= value;
        }
    }
    out
}
