//! Core document types.

use std::path::Path;

/// Display name used for markdown read from standard input.
pub const STDIN_DISPLAY_NAME: &str = "stdin";

/// Raw markdown source plus the name shown in the preview page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Original markdown bytes
    source: Vec<u8>,
    /// File base name, or [`STDIN_DISPLAY_NAME`]
    display_name: String,
}

impl Document {
    pub fn new(source: impl Into<Vec<u8>>, display_name: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            display_name: display_name.into(),
        }
    }

    /// Create a document for a file on disk, named by its final path component.
    pub fn for_path(path: &Path, source: impl Into<Vec<u8>>) -> Self {
        let display_name = path.file_name().map_or_else(
            || path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        );
        Self::new(source, display_name)
    }

    /// Create a document for markdown piped on standard input.
    pub fn from_stdin(source: impl Into<Vec<u8>>) -> Self {
        Self::new(source, STDIN_DISPLAY_NAME)
    }

    pub fn source(&self) -> &[u8] {
        &self.source
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}
