//! Persisting rendered HTML to a preview file.

use std::io::Write;
use std::path::PathBuf;

use tracing::debug;

use crate::error::{Error, Result};

/// Prefix for preview file names in the temp directory.
pub const FILE_PREFIX: &str = "mdp";
pub const FILE_SUFFIX: &str = ".html";

/// Write `html` to a new uniquely named file in the system temp directory.
///
/// The file is persisted: removing it is the caller's job.
///
/// # Errors
/// Returns [`Error::OutputWrite`] if the file cannot be created, written or kept.
pub fn write_html(html: &[u8]) -> Result<PathBuf> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(FILE_PREFIX).suffix(FILE_SUFFIX);
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o644));
    }

    let mut file = builder.tempfile().map_err(Error::OutputWrite)?;
    file.write_all(html).map_err(Error::OutputWrite)?;
    file.flush().map_err(Error::OutputWrite)?;
    let (_, path) = file.keep().map_err(|err| Error::OutputWrite(err.error))?;

    debug!(path = %path.display(), bytes = html.len(), "wrote preview file");
    Ok(path)
}
