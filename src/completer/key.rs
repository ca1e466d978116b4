//! Citation key completion, used for cross-reference fields.

use crate::completer::{AutoCompleter, CompleterKind};
use crate::index::PrefixIndex;
use crate::record::Record;

/// Indexes the citation key of every record it sees.
#[derive(Debug, Clone, Default)]
pub struct KeyCompleter {
    index: PrefixIndex,
}

impl KeyCompleter {
    pub fn new() -> Self {
        Self::with_index(PrefixIndex::new())
    }

    pub fn with_index(index: PrefixIndex) -> Self {
        KeyCompleter { index }
    }
}

impl AutoCompleter for KeyCompleter {
    fn add_record(&mut self, record: &Record) {
        self.index.insert(record.key().trim());
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
        CompleterKind::Key
    }
}
