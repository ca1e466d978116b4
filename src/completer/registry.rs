//! Per-field completers fed from one stream of records.

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::completer::{AutoCompleter, CompleterKind, create_completer};
use crate::config::CompletionConfig;
use crate::error::{QuiverError, Result};
use crate::record::Record;

/// Word counts for one registered field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompleterStats {
    pub field: String,
    pub kind: CompleterKind,
    pub words: usize,
    pub single_unit: bool,
}

/// Holds one completer per field name and routes records to all of them.
#[derive(Debug, Default)]
pub struct CompleterRegistry {
    completers: BTreeMap<String, Box<dyn AutoCompleter>>,
    records_added: usize,
}

impl CompleterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with a completer for each of `fields`, using the
    /// flavor and thresholds from `config`.
    pub fn for_fields<I, S>(fields: I, config: &CompletionConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        config.validate()?;

        let mut registry = Self::new();
        for field in fields {
            let field = field.as_ref().to_lowercase();
            let kind = config.kind_for(&field);
            let completer = create_completer(kind, &field, config);
            registry.register(field, completer);
        }
        Ok(registry)
    }

    /// Register `completer` for `field`, returning any completer it replaces.
    pub fn register<S: AsRef<str>>(
        &mut self,
        field: S,
        completer: Box<dyn AutoCompleter>,
    ) -> Option<Box<dyn AutoCompleter>> {
        let field = field.as_ref().to_lowercase();
        debug!("registering {} completer for field '{field}'", completer.kind());
        self.completers.insert(field, completer)
    }

    /// Feed `record` to every registered completer.
    pub fn add_record(&mut self, record: &Record) {
        for completer in self.completers.values_mut() {
            completer.add_record(record);
        }
        self.records_added += 1;
    }

    /// Feed every record in `records` to the registered completers.
    pub fn add_records<'a, I: IntoIterator<Item = &'a Record>>(&mut self, records: I) {
        let before = self.records_added;
        for record in records {
            self.add_record(record);
        }
        debug!(
            "added {} records to {} completers",
            self.records_added - before,
            self.completers.len()
        );
    }

    /// Completions for `prefix` in `field`.
    ///
    /// The inner `None` means the prefix was too short; an unregistered
    /// field is an error.
    pub fn complete(&self, field: &str, prefix: &str) -> Result<Option<Vec<String>>> {
        let completer = self
            .get(field)
            .ok_or_else(|| QuiverError::field(format!("no completer registered for '{field}'")))?;
        Ok(completer.complete(prefix))
    }

    pub fn get(&self, field: &str) -> Option<&dyn AutoCompleter> {
        self.completers
            .get(&field.to_lowercase())
            .map(|completer| completer.as_ref())
    }

    pub fn get_mut(&mut self, field: &str) -> Option<&mut (dyn AutoCompleter + 'static)> {
        self.completers
            .get_mut(&field.to_lowercase())
            .map(|completer| completer.as_mut())
    }

    /// Registered field names, in order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.completers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.completers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.completers.is_empty()
    }

    /// Number of records fed so far.
    pub fn records_added(&self) -> usize {
        self.records_added
    }

    /// Word counts per registered field.
    pub fn stats(&self) -> Vec<CompleterStats> {
        self.completers
            .iter()
            .map(|(field, completer)| CompleterStats {
                field: field.clone(),
                kind: completer.kind(),
                words: completer.index().len(),
                single_unit: completer.is_single_unit_field(),
            })
            .collect()
    }
}
