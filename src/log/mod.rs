//! Logging and observability
//!
//! JSONL history of resolved flags.

pub mod jsonl;

pub use jsonl::{tally, JsonlLogger, Resolution, Tally};
