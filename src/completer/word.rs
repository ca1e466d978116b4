//! Word-level completion over a free-text field.

use unicode_segmentation::UnicodeSegmentation;

use crate::completer::{AutoCompleter, CompleterKind};
use crate::index::PrefixIndex;
use crate::record::Record;

/// Indexes every word of one field, split on Unicode word boundaries (UAX #29).
///
/// Punctuation and whitespace are dropped; words keep their original case.
#[derive(Debug, Clone)]
pub struct WordCompleter {
    field: String,
    index: PrefixIndex,
}

impl WordCompleter {
    pub fn new<S: Into<String>>(field: S) -> Self {
        Self::with_index(field, PrefixIndex::new())
    }

    pub fn with_index<S: Into<String>>(field: S, index: PrefixIndex) -> Self {
        WordCompleter {
            field: field.into(),
            index,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }
}

impl AutoCompleter for WordCompleter {
    fn add_record(&mut self, record: &Record) {
        if let Some(value) = record.field(&self.field) {
            self.index.extend(value.unicode_words());
        }
    }

    fn index(&self) -> &PrefixIndex {
        &self.index
    }

    fn index_mut(&mut self) -> &mut PrefixIndex {
        &mut self.index
    }

    fn is_single_unit_field(&self) -> bool {
        false
    }

    fn kind(&self) -> CompleterKind {
        CompleterKind::Word
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexes_each_word() {
        let mut completer = WordCompleter::new("title");
        let record = Record::builder()
            .field("title", "Die Grundlage der allgemeinen Relativitätstheorie")
            .field("journal", "Annalen der Physik")
            .build();

        completer.add_record(&record);

        assert!(completer.contains("Grundlage"));
        assert!(completer.contains("allgemeinen"));
        assert!(completer.contains("Relativitätstheorie"));
        // Shorter than four characters.
        assert!(!completer.contains("Die"));
        assert!(!completer.contains("der"));
        // Other fields are ignored.
        assert!(!completer.contains("Annalen"));
    }

    #[test]
    fn test_punctuation_is_dropped() {
        let mut completer = WordCompleter::new("title");
        let record = Record::builder()
            .field("title", "Databases: theory, practice (and more)!")
            .build();

        completer.add_record(&record);

        assert_eq!(
            completer.complete("Da"),
            Some(vec!["Databases".to_string()])
        );
        assert_eq!(
            completer.complete("pr"),
            Some(vec!["practice".to_string()])
        );
        assert_eq!(completer.complete("theory,"), Some(vec![]));
    }

    #[test]
    fn test_missing_field_is_ignored() {
        let mut completer = WordCompleter::new("abstract");
        completer.add_record(&Record::new("article", "k1"));
        assert!(completer.index().is_empty());
    }
}
