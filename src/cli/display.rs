//! Terminal rendering of resolutions
//!
//! Resolutions go to stdout, one per line, either as plain text or JSON.
//! Summaries and diagnostics are written to stderr by the caller.

use anyhow::{Context, Result};
use colored::Colorize;

use crate::business::DisplayValue;
use crate::log::{Resolution, Tally};

/// Render a resolution as `<input> -> <label>`
///
/// The input is shown as `true`, `false` or `null`. With `color` set the
/// label is coloured; otherwise the line is plain ASCII.
#[must_use]
pub fn render_plain(resolution: &Resolution, color: bool) -> String {
    let input = format_input(resolution.input);
    let label = resolution.output.as_str();

    if !color {
        return format!("{input} -> {label}");
    }

    let label = match resolution.output {
        DisplayValue::Yes => label.green().bold(),
        DisplayValue::No => label.red().bold(),
        DisplayValue::Maybe => label.yellow().bold(),
    };
    format!("{} {} {label}", input.dimmed(), "->".dimmed())
}

/// Render a resolution as a single-line JSON object
pub fn render_json(resolution: &Resolution) -> Result<String> {
    serde_json::to_string(resolution).context("Failed to serialize resolution to JSON")
}

/// Render per-label counts as a one-line summary
#[must_use]
pub fn render_tally(tally: &Tally) -> String {
    format!(
        "maybe: {}, yes: {}, no: {} (total {})",
        tally.maybe,
        tally.yes,
        tally.no,
        tally.total()
    )
}

fn format_input(input: Option<bool>) -> &'static str {
    match input {
        None => "null",
        Some(true) => "true",
        Some(false) => "false",
    }
}
