//! Business display logic
//!
//! The display value resolver and the parsing of tri-state flags.

pub mod flag;
pub mod resolver;

pub use resolver::{display_value, DisplayValue, MyBusiness, TriState};
