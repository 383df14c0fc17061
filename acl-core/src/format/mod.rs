//! Text and JSON formatters for entries and changes.

pub mod json;
pub mod text;

pub use json::format_json;
pub use text::{format_block, format_summary, format_text};
