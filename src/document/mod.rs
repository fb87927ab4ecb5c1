//! Markdown input documents.
//!
//! This module handles:
//! - Choosing between a named file and piped standard input
//! - Reading the raw markdown bytes
//! - Deriving the display name shown in the rendered page

mod input;
mod types;

pub use input::InputSource;
pub use types::{Document, STDIN_DISPLAY_NAME};
