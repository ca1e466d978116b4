//! Ordered set of words answering prefix queries.
//!
//! [`PrefixIndex`] keeps its words in a `BTreeSet<String>`, so the words
//! sharing a prefix form one contiguous run. A prefix query is a single
//! range scan over `[prefix, upper)` (see [`PrefixRange`]), which costs
//! `O(log n + k)` for `k` matches.
//!
//! # Examples
//!
//! ```
//! use quiver::index::PrefixIndex;
//!
//! let mut index = PrefixIndex::new();
//! index.insert("Einstein");
//! index.insert("Einhorn");
//! index.insert("Ein"); // too short, never stored
//!
//! assert_eq!(
//!     index.complete("Ein"),
//!     Some(vec!["Einhorn".to_string(), "Einstein".to_string()])
//! );
//! assert_eq!(index.complete("E"), None); // rejected: shorter than 2 characters
//! ```

use std::collections::BTreeSet;
use std::collections::btree_set;

use log::trace;

use crate::config::{CompletionConfig, MIN_INDEX_LENGTH, MIN_QUERY_LENGTH};
use crate::index::range::PrefixRange;

/// An ordered, duplicate-free set of words supporting prefix completion.
///
/// Lengths are counted in characters (Unicode scalar values), and ordering
/// is by code point.
///
/// A query shorter than the minimum query length yields `None`; a valid
/// query with no matches yields `Some(vec![])`. Callers can always tell a
/// rejected query from an empty one.
#[derive(Debug, Clone)]
pub struct PrefixIndex {
    words: BTreeSet<String>,
    min_query_length: usize,
    min_index_length: usize,
    label: String,
}

impl PrefixIndex {
    /// Create an empty index with the default thresholds.
    pub fn new() -> Self {
        Self::with_thresholds(MIN_QUERY_LENGTH, MIN_INDEX_LENGTH)
    }

    /// Create an empty index with explicit thresholds.
    pub fn with_thresholds(min_query_length: usize, min_index_length: usize) -> Self {
        PrefixIndex {
            words: BTreeSet::new(),
            min_query_length,
            min_index_length,
            label: String::new(),
        }
    }

    /// Create an empty index using the thresholds in `config`.
    pub fn from_config(config: &CompletionConfig) -> Self {
        Self::with_thresholds(config.min_query_length, config.min_index_length)
    }

    /// Tag this index with a category label.
    pub fn with_label<S: Into<String>>(mut self, label: S) -> Self {
        self.label = label.into();
        self
    }

    /// Add `word` if it is at least `min_index_length` characters long.
    ///
    /// Returns `true` if the word was newly stored. Short words and words
    /// already present leave the index unchanged.
    pub fn insert<S: AsRef<str> + Into<String>>(&mut self, word: S) -> bool {
        if word.as_ref().chars().count() < self.min_index_length {
            return false;
        }
        if self.words.contains(word.as_ref()) {
            return false;
        }
        self.words.insert(word.into())
    }

    /// Check if `word` is stored exactly.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// All stored words starting with `prefix`, in order.
    ///
    /// Returns `None` if `prefix` is shorter than `min_query_length`.
    pub fn complete(&self, prefix: &str) -> Option<Vec<String>> {
        if prefix.chars().count() < self.min_query_length {
            trace!("rejecting prefix query {prefix:?}: shorter than {}", self.min_query_length);
            return None;
        }
        Some(self.matches(prefix).cloned().collect())
    }

    /// Iterate the stored words starting with `prefix`, without the length guard.
    pub fn matches(&self, prefix: &str) -> btree_set::Range<'_, String> {
        let range = PrefixRange::new(prefix);
        self.words.range::<str, _>(range.bounds())
    }

    /// The category label of this index; empty unless set with [`with_label`](Self::with_label).
    pub fn prefix_label(&self) -> &str {
        &self.label
    }

    /// Minimum query length in characters.
    pub fn min_query_length(&self) -> usize {
        self.min_query_length
    }

    /// Minimum indexed word length in characters.
    pub fn min_index_length(&self) -> usize {
        self.min_index_length
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if no word is stored.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate all stored words in order.
    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.words.iter()
    }
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str> + Into<String>> Extend<S> for PrefixIndex {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl<'a> IntoIterator for &'a PrefixIndex {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_admission_filter() {
        let mut index = PrefixIndex::new();

        assert!(!index.insert(""));
        assert!(!index.insert("abc"));
        assert!(index.insert("abcd"));

        assert!(!index.contains("abc"));
        assert!(index.contains("abcd"));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_length_counts_characters() {
        let mut index = PrefixIndex::new();

        // Four characters, eight bytes.
        assert!(index.insert("\u{e9}\u{e9}\u{e9}\u{e9}"));
        // Three characters, six bytes.
        assert!(!index.insert("\u{e9}\u{e9}\u{e9}"));

        // Two characters pass the query guard even though one would be two bytes.
        assert_eq!(index.complete("\u{e9}"), None);
        assert_eq!(
            index.complete("\u{e9}\u{e9}"),
            Some(strings(&["\u{e9}\u{e9}\u{e9}\u{e9}"]))
        );
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut index = PrefixIndex::new();
        assert!(index.insert("Database"));
        assert!(!index.insert("Database"));
        assert!(!index.insert(String::from("Database")));

        assert_eq!(index.len(), 1);
        assert_eq!(index.complete("Da"), Some(strings(&["Database"])));
    }

    #[test]
    fn test_rejected_versus_empty() {
        let index = PrefixIndex::new();
        assert_eq!(index.complete(""), None);
        assert_eq!(index.complete("t"), None);
        assert_eq!(index.complete("test"), Some(Vec::new()));
    }

    #[test]
    fn test_results_are_ordered() {
        let mut index = PrefixIndex::new();
        index.extend(["Einstein", "Einhorn", "Eintopf", "Eimer", "Ein"]);

        assert_eq!(
            index.complete("Ein"),
            Some(strings(&["Einhorn", "Einstein", "Eintopf"]))
        );
        assert_eq!(
            index.complete("Ei"),
            Some(strings(&["Eimer", "Einhorn", "Einstein", "Eintopf"]))
        );
    }

    #[test]
    fn test_exclusive_upper_bound() {
        let mut index = PrefixIndex::with_thresholds(2, 3);
        index.extend(["abc", "abd", "abe"]);

        assert_eq!(index.complete("abc"), Some(strings(&["abc"])));
        assert_eq!(index.complete("ab"), Some(strings(&["abc", "abd", "abe"])));
    }

    #[test]
    fn test_case_sensitive() {
        let mut index = PrefixIndex::new();
        index.extend(["database", "Database"]);

        assert_eq!(index.complete("da"), Some(strings(&["database"])));
        assert_eq!(index.complete("Da"), Some(strings(&["Database"])));
    }

    #[test]
    fn test_max_char_prefix() {
        let max = char::MAX;
        let mut index = PrefixIndex::with_thresholds(2, 1);
        let word_a = format!("a{max}");
        let word_b = format!("a{max}zz");
        let word_c = format!("a{max}{max}");
        index.extend([word_a.clone(), word_b.clone(), word_c.clone()]);
        index.insert("b");
        index.insert("a");

        let prefix = format!("a{max}");
        assert_eq!(
            index.complete(&prefix),
            Some(vec![word_a, word_b, word_c.clone()])
        );

        let prefix = format!("a{max}{max}");
        assert_eq!(index.complete(&prefix), Some(vec![word_c]));
    }

    #[test]
    fn test_all_max_prefix_is_unbounded() {
        let max = char::MAX;
        let mut index = PrefixIndex::with_thresholds(2, 1);
        let word = format!("{max}{max}tail");
        index.insert(word.clone());
        index.insert("zzzz");

        assert_eq!(index.complete(&format!("{max}{max}")), Some(vec![word]));
    }

    #[test]
    fn test_custom_thresholds() {
        let mut index = PrefixIndex::with_thresholds(1, 1);
        index.insert("a");
        index.insert("ab");

        assert_eq!(index.complete("a"), Some(strings(&["a", "ab"])));
        assert_eq!(index.min_query_length(), 1);
        assert_eq!(index.min_index_length(), 1);
    }

    #[test]
    fn test_from_config() {
        let config = CompletionConfig::new()
            .with_min_query_length(3)
            .with_min_index_length(5);
        let mut index = PrefixIndex::from_config(&config);

        index.insert("abcd");
        index.insert("abcde");
        assert_eq!(index.complete("ab"), None);
        assert_eq!(index.complete("abc"), Some(strings(&["abcde"])));
    }

    #[test]
    fn test_prefix_label() {
        let index = PrefixIndex::new();
        assert_eq!(index.prefix_label(), "");

        let index = PrefixIndex::new().with_label("journal");
        assert_eq!(index.prefix_label(), "journal");
    }

    #[test]
    fn test_iteration_order() {
        let mut index = PrefixIndex::new();
        index.extend(["zeta", "alpha", "mike"]);

        let words: Vec<&String> = index.iter().collect();
        assert_eq!(words, ["alpha", "mike", "zeta"]);
        assert_eq!((&index).into_iter().count(), 3);
        assert!(!index.is_empty());
    }
}
