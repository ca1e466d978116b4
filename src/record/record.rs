//! Structured records feeding the completers.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::Result;
use crate::record::jsonl::parse_record;

/// A bibliographic-style record: an entry type, a citation key and named text fields.
///
/// Field names are stored lower-case, so lookups are case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Entry type such as `article` or `book`.
    #[serde(rename = "type")]
    entry_type: String,

    /// Citation key identifying this record.
    key: String,

    /// Field values by lower-case field name.
    #[serde(flatten)]
    fields: BTreeMap<String, String>,
}

impl Record {
    /// Create a new record with no fields.
    pub fn new<T: Into<String>, K: Into<String>>(entry_type: T, key: K) -> Self {
        Record {
            entry_type: entry_type.into(),
            key: key.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Parse a record from a single JSON object (see [`crate::record::jsonl`]).
    pub fn from_json(json: &str) -> Result<Self> {
        parse_record(json)
    }

    /// Create a builder for constructing records.
    pub fn builder() -> RecordBuilder {
        RecordBuilder::new()
    }

    pub fn entry_type(&self) -> &str {
        &self.entry_type
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn set_key<K: Into<String>>(&mut self, key: K) {
        self.key = key.into();
    }

    pub fn set_entry_type<T: Into<String>>(&mut self, entry_type: T) {
        self.entry_type = entry_type.into();
    }

    /// Set a field value, replacing any previous value.
    pub fn set_field<S: AsRef<str>, V: Into<String>>(&mut self, name: S, value: V) {
        self.fields
            .insert(name.as_ref().to_lowercase(), value.into());
    }

    /// Get a field value.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Check if the record has a field.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(&name.to_lowercase())
    }

    /// All field names, in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A builder for constructing records in a fluent manner.
#[derive(Debug, Default)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    pub fn new() -> Self {
        RecordBuilder {
            record: Record::default(),
        }
    }

    pub fn entry_type<T: Into<String>>(mut self, entry_type: T) -> Self {
        self.record.set_entry_type(entry_type);
        self
    }

    pub fn key<K: Into<String>>(mut self, key: K) -> Self {
        self.record.set_key(key);
        self
    }

    pub fn field<S: AsRef<str>, V: Into<String>>(mut self, name: S, value: V) -> Self {
        self.record.set_field(name, value);
        self
    }

    pub fn build(self) -> Record {
        self.record
    }
}
