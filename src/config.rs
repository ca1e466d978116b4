//! Configuration for prefix completion.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::completer::CompleterKind;
use crate::error::{QuiverError, Result};

/// Queries shorter than this many characters are rejected.
pub const MIN_QUERY_LENGTH: usize = 2;

/// Words shorter than this many characters are never indexed.
pub const MIN_INDEX_LENGTH: usize = 4;

/// Configuration for prefix indices and the completers built on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    /// Minimum prefix length, in characters, for a query to be served.
    pub min_query_length: usize,

    /// Minimum word length, in characters, for a word to be indexed.
    pub min_index_length: usize,

    /// Completer flavor per record field.
    pub fields: BTreeMap<String, CompleterKind>,

    /// Flavor used for fields without an explicit mapping.
    pub default_kind: CompleterKind,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        let mut fields = BTreeMap::new();
        fields.insert("author".to_string(), CompleterKind::Name);
        fields.insert("editor".to_string(), CompleterKind::Name);
        fields.insert("journal".to_string(), CompleterKind::EntireField);
        fields.insert("publisher".to_string(), CompleterKind::EntireField);
        fields.insert("crossref".to_string(), CompleterKind::Key);

        Self {
            min_query_length: MIN_QUERY_LENGTH,
            min_index_length: MIN_INDEX_LENGTH,
            fields,
            default_kind: CompleterKind::Word,
        }
    }
}

impl CompletionConfig {
    /// Create a configuration with the default thresholds and field mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum query length.
    pub fn with_min_query_length(mut self, length: usize) -> Self {
        self.min_query_length = length;
        self
    }

    /// Set the minimum index length.
    pub fn with_min_index_length(mut self, length: usize) -> Self {
        self.min_index_length = length;
        self
    }

    /// Map a field to a completer flavor.
    pub fn with_field<S: Into<String>>(mut self, field: S, kind: CompleterKind) -> Self {
        self.fields.insert(field.into().to_lowercase(), kind);
        self
    }

    /// Set the flavor used for unmapped fields.
    pub fn with_default_kind(mut self, kind: CompleterKind) -> Self {
        self.default_kind = kind;
        self
    }

    /// The completer flavor serving `field`.
    pub fn kind_for(&self, field: &str) -> CompleterKind {
        self.fields
            .get(&field.to_lowercase())
            .copied()
            .unwrap_or(self.default_kind)
    }

    /// Check that the thresholds are usable.
    pub fn validate(&self) -> Result<()> {
        if self.min_query_length == 0 {
            return Err(QuiverError::config("min_query_length must be at least 1"));
        }
        if self.min_index_length == 0 {
            return Err(QuiverError::config("min_index_length must be at least 1"));
        }
        Ok(())
    }

    /// Load a configuration from a JSON file. Missing keys take their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let mut config: CompletionConfig = serde_json::from_reader(BufReader::new(file))?;
        config.fields = config
            .fields
            .into_iter()
            .map(|(field, kind)| (field.to_lowercase(), kind))
            .collect();
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration as pretty-printed JSON.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }
}
