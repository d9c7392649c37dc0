//! Output formatting for subnet calculations.
//!
//! - [`terminal`] - console text and error messages
//! - [`csv`] - CSV rows
//! - [`json`] - JSON documents

mod csv;
mod json;
mod terminal;

pub use csv::{render_csv, CSV_HEADER};
pub use json::render_json;
pub use terminal::{error_message, format_field, render_text};
