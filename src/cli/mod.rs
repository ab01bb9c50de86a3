//! CLI output formatting
//!
//! Plain, coloured or JSON rendering of resolutions for the terminal.

pub mod display;

pub use display::render_json;
pub use display::render_plain;
pub use display::render_tally;
