//! Error kinds for each stage of the preview pipeline.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// Neither a file was named nor markdown piped on standard input.
    #[error("no input: pass --file <PATH> or pipe markdown on standard input")]
    Usage,

    #[error("failed to read {}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read standard input")]
    StdinRead(#[source] std::io::Error),

    #[error("failed to load template file {}", path.display())]
    TemplateLoad {
        path: PathBuf,
        #[source]
        source: tera::Error,
    },

    #[error("failed to render template")]
    Render(#[source] tera::Error),

    #[error("failed to write preview file")]
    OutputWrite(#[source] std::io::Error),

    #[error(transparent)]
    Preview(#[from] PreviewError),
}

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("previewing is not supported on {os}")]
    Unsupported { os: &'static str },

    #[error("launcher `{launcher}` not found on PATH")]
    LauncherNotFound { launcher: &'static str },

    #[error("failed to run launcher `{launcher}`")]
    Launch {
        launcher: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("launcher `{launcher}` exited with {status}")]
    LauncherFailed {
        launcher: &'static str,
        status: ExitStatus,
    },
}

impl PreviewError {
    /// True when the launcher process actually ran, so a viewer may already
    /// have been handed the file.
    pub const fn launcher_ran(&self) -> bool {
        matches!(self, Self::LauncherFailed { .. })
    }
}
