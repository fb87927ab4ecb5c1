// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. preview::PreviewError)
    clippy::module_name_repetitions
)]

//! # mdp
//!
//! Preview a markdown file in the default browser.
//!
//! A run renders markdown to HTML with comrak, sanitizes it with ammonia,
//! merges it into a tera page template, writes the page to a temp file and
//! hands that file to the OS launcher.
//!
//! ## Modules
//!
//! - [`app`]: Run orchestration and preview-file lifecycle
//! - [`document`]: Markdown input from a file or standard input
//! - [`render`]: Markdown to sanitized, templated HTML
//! - [`output`]: Writing the preview file
//! - [`preview`]: Opening the file with the platform launcher
//! - [`config`]: Template resolution
//! - [`error`]: Error kinds for each stage

pub mod app;
pub mod config;
pub mod document;
pub mod error;
pub mod output;
pub mod preview;
pub mod render;

pub use error::{Error, PreviewError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::App;
    pub use crate::document::{Document, InputSource};
    pub use crate::preview::{Opener, SystemOpener};
    pub use crate::render::{TemplateSource, render};
}
