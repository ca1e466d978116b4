//! Records and record loading.

pub mod jsonl;
pub mod record;

pub use jsonl::{load_jsonl, parse_jsonl, parse_record};
pub use record::{Record, RecordBuilder};
