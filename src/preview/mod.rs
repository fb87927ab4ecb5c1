//! Opening the preview file with the platform's default application.
//!
//! Each supported platform maps to a launcher program plus the arguments that
//! precede the file path. The launcher usually hands the file to a long-lived
//! browser process and exits straight away, so the file must stay on disk for
//! a short grace period after the launcher returns. Viewers slower than
//! [`GRACE_PERIOD`] may find the file already deleted.

mod launcher;

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Duration;

use tracing::debug;

pub use launcher::{Launcher, Platform, find_in_dirs, find_in_path};

use crate::error::PreviewError;

/// How long the preview file is kept after the launcher returns.
pub const GRACE_PERIOD: Duration = Duration::from_secs(2);

/// Opens a file for the user to look at.
pub trait Opener {
    /// Open `path` and return once the launch has finished.
    ///
    /// # Errors
    /// Returns a [`PreviewError`] if the file could not be handed off.
    fn open(&self, path: &Path) -> Result<(), PreviewError>;
}

/// Opens files with the host OS default application.
#[derive(Debug, Clone, Default)]
pub struct SystemOpener {
    /// Directories searched for the launcher; `PATH` when unset.
    search_path: Option<OsString>,
}

impl SystemOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search `paths` (a `PATH`-style list) instead of the process `PATH`.
    #[must_use]
    pub fn with_search_path(mut self, paths: impl Into<OsString>) -> Self {
        self.search_path = Some(paths.into());
        self
    }

    fn locate(&self, program: &str) -> Option<PathBuf> {
        match &self.search_path {
            Some(paths) => find_in_dirs(program, paths),
            None => find_in_path(program),
        }
    }
}

impl Opener for SystemOpener {
    fn open(&self, path: &Path) -> Result<(), PreviewError> {
        let platform = Platform::current();
        let launcher = platform
            .launcher()
            .ok_or(PreviewError::Unsupported { os: std::env::consts::OS })?;
        let program = self
            .locate(launcher.program)
            .ok_or(PreviewError::LauncherNotFound {
                launcher: launcher.program,
            })?;

        debug!(
            launcher = %program.display(),
            file = %path.display(),
            "opening preview"
        );
        // stdout belongs to the preview path line
        let status = Command::new(&program)
            .args(launcher.args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| PreviewError::Launch {
                launcher: launcher.program,
                source,
            })?;
        if status.success() {
            Ok(())
        } else {
            Err(PreviewError::LauncherFailed {
                launcher: launcher.program,
                status,
            })
        }
    }
}
