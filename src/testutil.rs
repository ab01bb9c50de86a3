//! Shared test utilities
//!
//! Common helpers used across test modules. Only compiled in test builds.

use crate::log::jsonl::Resolution;

/// Create a `Resolution` for the given flag, timestamped now.
#[must_use]
pub fn make_test_resolution(flag: Option<bool>) -> Resolution {
    Resolution::new(flag.into())
}
