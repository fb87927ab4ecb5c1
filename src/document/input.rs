//! Where the markdown comes from.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use tracing::debug;

use super::types::Document;
use crate::error::{Error, Result};

/// A markdown input, either a named file or bytes already read from a stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stream(Vec<u8>),
}

impl InputSource {
    /// Pick the input for a run.
    ///
    /// A named file always wins. Without one, `stdin` is drained when it is
    /// piped or redirected; an interactive terminal is a usage error and
    /// nothing is read.
    ///
    /// # Errors
    /// Returns [`Error::Usage`] when there is no input, or
    /// [`Error::StdinRead`] if the stream cannot be read.
    pub fn resolve(
        file: Option<PathBuf>,
        stdin_is_terminal: bool,
        mut stdin: impl Read,
    ) -> Result<Self> {
        if let Some(path) = file {
            return Ok(Self::File(path));
        }
        if stdin_is_terminal {
            return Err(Error::Usage);
        }
        let mut buf = Vec::new();
        stdin.read_to_end(&mut buf).map_err(Error::StdinRead)?;
        debug!(bytes = buf.len(), "read markdown from stdin");
        Ok(Self::Stream(buf))
    }

    /// Read the source into a [`Document`].
    ///
    /// # Errors
    /// Returns [`Error::InputRead`] if a named file cannot be read.
    pub fn into_document(self) -> Result<Document> {
        match self {
            Self::File(path) => {
                let source = fs::read(&path).map_err(|source| Error::InputRead {
                    path: path.clone(),
                    source,
                })?;
                debug!(path = %path.display(), bytes = source.len(), "read markdown file");
                Ok(Document::for_path(&path, source))
            }
            Self::Stream(bytes) => Ok(Document::from_stdin(bytes)),
        }
    }
}
