//! Pure formatting and comparison helpers
//!
//! Contains the version comparator plus the duration and ordinal formatters.
//! Nothing here performs I/O.

pub mod duration;
pub mod ordinal;
pub mod version;

pub use duration::human_duration;
pub use ordinal::ordinal;
pub use version::{Version, compare, is_newer, sort_versions};
