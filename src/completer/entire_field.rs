//! Whole-value completion for fields like journal or publisher names.

use crate::completer::{AutoCompleter, CompleterKind};
use crate::index::PrefixIndex;
use crate::record::Record;

/// Indexes the complete, trimmed value of one field.
#[derive(Debug, Clone)]
pub struct EntireFieldCompleter {
    field: String,
    index: PrefixIndex,
}

impl EntireFieldCompleter {
    pub fn new<S: Into<String>>(field: S) -> Self {
        Self::with_index(field, PrefixIndex::new())
    }

    pub fn with_index<S: Into<String>>(field: S, index: PrefixIndex) -> Self {
        EntireFieldCompleter {
            field: field.into(),
            index,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }
}

impl AutoCompleter for EntireFieldCompleter {
    fn add_record(&mut self, record: &Record) {
        if let Some(value) = record.field(&self.field) {
            self.index.insert(value.trim());
        }
    }

    fn index(&self) -> &PrefixIndex {
        &self.index
    }

    fn index_mut(&mut self) -> &mut PrefixIndex {
        &mut self.index
    }

    fn is_single_unit_field(&self) -> bool {
        true
    }

    fn kind(&self) -> CompleterKind {
        CompleterKind::EntireField
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexes_whole_value() {
        let mut completer = EntireFieldCompleter::new("journal");
        completer.add_record(&Record::builder().field("journal", "  Annalen der Physik ").build());
        completer.add_record(&Record::builder().field("journal", "Annals of Mathematics").build());
        completer.add_record(&Record::builder().field("journal", "ACM").build());

        assert!(completer.contains("Annalen der Physik"));
        assert!(!completer.contains("Annalen"));
        assert!(!completer.contains("ACM"));
        assert_eq!(
            completer.complete("Ann"),
            Some(vec![
                "Annalen der Physik".to_string(),
                "Annals of Mathematics".to_string(),
            ])
        );
        assert_eq!(
            completer.complete("Annalen d"),
            Some(vec!["Annalen der Physik".to_string()])
        );
    }
}
