//! mybusiness - Tri-state display values
//!
//! Resolves an optional boolean to one of three display labels:
//! absent is `maybe`, true is `yes`, false is `no`.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod business;
pub mod cli;
pub mod config;
pub mod log;

#[cfg(test)]
mod testutil;

// Re-export commonly used types
pub use business::{display_value, DisplayValue, MyBusiness, TriState};
pub use config::{Config, OutputFormat};
pub use log::{tally, JsonlLogger, Resolution, Tally};
