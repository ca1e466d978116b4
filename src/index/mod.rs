//! Prefix indices.
//!
//! [`PrefixIndex`] is the single-owner ordered word set; [`SharedPrefixIndex`]
//! wraps one behind a reader/writer lock for callers that need to share it.

pub mod prefix_index;
pub mod range;
pub mod shared;

pub use prefix_index::PrefixIndex;
pub use range::{PrefixRange, prefix_upper_bound};
pub use shared::SharedPrefixIndex;
