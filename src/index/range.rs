//! Half-open key ranges covering every string that starts with a prefix.

use std::ops::Bound;

/// The range `[prefix, upper)` holding exactly the strings that start with `prefix`.
///
/// The upper bound is the prefix with its last character incremented. When
/// that character is already `char::MAX` it is dropped and the increment
/// carries into the character before it; a prefix made only of `char::MAX`
/// (or the empty prefix) has no upper bound at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixRange {
    lower: String,
    upper: Bound<String>,
}

impl PrefixRange {
    /// Compute the range for `prefix`.
    pub fn new(prefix: &str) -> Self {
        let upper = match prefix_upper_bound(prefix) {
            Some(upper) => Bound::Excluded(upper),
            None => Bound::Unbounded,
        };

        PrefixRange {
            lower: prefix.to_string(),
            upper,
        }
    }

    /// Inclusive lower bound (the prefix itself).
    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Exclusive upper bound, or `Unbounded`.
    pub fn upper(&self) -> Bound<&str> {
        self.upper.as_ref().map(String::as_str)
    }

    /// Borrowed bounds suitable for `BTreeSet::range`.
    pub fn bounds(&self) -> (Bound<&str>, Bound<&str>) {
        (Bound::Included(self.lower.as_str()), self.upper())
    }

    /// Check if a string falls inside the range.
    pub fn contains(&self, value: &str) -> bool {
        let above_lower = value >= self.lower.as_str();
        let below_upper = match &self.upper {
            Bound::Excluded(upper) => value < upper.as_str(),
            Bound::Included(upper) => value <= upper.as_str(),
            Bound::Unbounded => true,
        };
        above_lower && below_upper
    }
}

/// Smallest string greater than every string starting with `prefix`.
///
/// Returns `None` when no such string exists, i.e. when every character of
/// `prefix` is `char::MAX` or `prefix` is empty.
pub fn prefix_upper_bound(prefix: &str) -> Option<String> {
    for (idx, c) in prefix.char_indices().rev() {
        if let Some(next) = next_char(c) {
            let mut upper = String::with_capacity(idx + next.len_utf8());
            upper.push_str(&prefix[..idx]);
            upper.push(next);
            return Some(upper);
        }
    }
    None
}

/// The next Unicode scalar value after `c`, skipping the surrogate block.
fn next_char(c: char) -> Option<char> {
    match c {
        char::MAX => None,
        '\u{D7FF}' => Some('\u{E000}'),
        _ => char::from_u32(c as u32 + 1),
    }
}
