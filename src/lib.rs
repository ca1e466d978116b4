//! # Quiver
//!
//! Prefix autocompletion for words extracted from structured records.
//!
//! ## Features
//!
//! - Ordered, duplicate-free word index with `O(log n + k)` prefix queries
//! - Minimum word and query lengths, configurable per index
//! - Rejected queries (`None`) kept distinct from empty results (`Some(vec![])`)
//! - Completer flavors for free text, whole values, person names and citation keys
//! - JSONL record loading and a command line front end

pub mod cli;
pub mod completer;
pub mod config;
pub mod error;
pub mod index;
pub mod record;

pub mod prelude {
    pub use crate::completer::{
        AutoCompleter, CompleterKind, CompleterRegistry, create_completer,
    };
    pub use crate::config::CompletionConfig;
    pub use crate::error::{QuiverError, Result};
    pub use crate::index::{PrefixIndex, SharedPrefixIndex};
    pub use crate::record::Record;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
