//! Completer flavors deciding which words of a record get indexed.
//!
//! Every flavor owns a [`PrefixIndex`] and differs only in how it turns a
//! [`Record`] into words:
//!
//! - [`WordCompleter`] indexes each word of a field value
//! - [`EntireFieldCompleter`] indexes the whole field value
//! - [`NameCompleter`] indexes last names and full names of a person list
//! - [`KeyCompleter`] indexes record citation keys
//!
//! [`create_completer`] builds the flavor named by a [`CompleterKind`].

pub mod entire_field;
pub mod key;
pub mod name;
pub mod registry;
pub mod word;

use std::fmt::{self, Debug};

use serde::{Deserialize, Serialize};

use crate::config::CompletionConfig;
use crate::index::PrefixIndex;
use crate::record::Record;

pub use entire_field::EntireFieldCompleter;
pub use key::KeyCompleter;
pub use name::NameCompleter;
pub use registry::{CompleterRegistry, CompleterStats};
pub use word::WordCompleter;

/// A source of completions built from records.
pub trait AutoCompleter: Send + Sync + Debug {
    /// Extract this completer's words from `record` and index them.
    fn add_record(&mut self, record: &Record);

    /// The underlying index.
    fn index(&self) -> &PrefixIndex;

    /// Mutable access to the underlying index.
    fn index_mut(&mut self) -> &mut PrefixIndex;

    /// Whether a completion replaces the whole field value rather than one word of it.
    fn is_single_unit_field(&self) -> bool;

    /// The flavor of this completer.
    fn kind(&self) -> CompleterKind;

    /// Add a single word directly, bypassing record extraction.
    fn add_word(&mut self, word: &str) -> bool {
        self.index_mut().insert(word)
    }

    fn contains(&self, word: &str) -> bool {
        self.index().contains(word)
    }

    /// Completions for `prefix`; `None` if the prefix is too short to be served.
    fn complete(&self, prefix: &str) -> Option<Vec<String>> {
        self.index().complete(prefix)
    }

    fn prefix_label(&self) -> &str {
        self.index().prefix_label()
    }
}

/// The closed set of completer flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompleterKind {
    /// Each word of the field value.
    Word,
    /// The whole field value.
    EntireField,
    /// Names in a person list.
    Name,
    /// Record citation keys.
    Key,
}

impl CompleterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompleterKind::Word => "word",
            CompleterKind::EntireField => "entire_field",
            CompleterKind::Name => "name",
            CompleterKind::Key => "key",
        }
    }
}

impl fmt::Display for CompleterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build a completer of `kind` reading `field`, with thresholds from `config`.
pub fn create_completer(
    kind: CompleterKind,
    field: &str,
    config: &CompletionConfig,
) -> Box<dyn AutoCompleter> {
    let index = PrefixIndex::from_config(config);
    match kind {
        CompleterKind::Word => Box::new(WordCompleter::with_index(field, index)),
        CompleterKind::EntireField => Box::new(EntireFieldCompleter::with_index(field, index)),
        CompleterKind::Name => Box::new(NameCompleter::with_index(field, index)),
        CompleterKind::Key => Box::new(KeyCompleter::with_index(index)),
    }
}
