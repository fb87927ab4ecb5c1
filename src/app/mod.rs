//! Run orchestration: render, write, preview, clean up.
//!
//! A run is strictly sequential. The only waiting is the fixed grace period
//! between launching the viewer and deleting the preview file.

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use crate::config::resolve_template;
use crate::document::InputSource;
use crate::error::{Error, Result};
use crate::output::write_html;
use crate::preview::{GRACE_PERIOD, Opener};
use crate::render::{TemplateSource, render};

/// One preview run.
#[derive(Debug, Clone)]
pub struct App {
    input: InputSource,
    template: Option<PathBuf>,
    env_template: Option<OsString>,
    skip_preview: bool,
    grace_period: Duration,
}

impl App {
    pub fn new(input: InputSource) -> Self {
        Self {
            input,
            template: None,
            env_template: None,
            skip_preview: false,
            grace_period: GRACE_PERIOD,
        }
    }

    /// Template given explicitly on the command line.
    #[must_use]
    pub fn with_template(mut self, template: Option<PathBuf>) -> Self {
        self.template = template;
        self
    }

    /// Value of `MDP_TEMPLATE`, read by the caller.
    #[must_use]
    pub fn with_env_template(mut self, value: Option<OsString>) -> Self {
        self.env_template = value;
        self
    }

    #[must_use]
    pub fn with_skip_preview(mut self, skip: bool) -> Self {
        self.skip_preview = skip;
        self
    }

    #[must_use]
    pub fn with_grace_period(mut self, grace_period: Duration) -> Self {
        self.grace_period = grace_period;
        self
    }

    pub fn template_source(&self) -> TemplateSource {
        resolve_template(self.template.as_deref(), self.env_template.clone())
    }

    /// Render the input, write the preview file and open it.
    ///
    /// The preview file path is printed to `out` as a single line. When
    /// previewing is skipped the file is left on disk; otherwise it is removed
    /// after the grace period even if opening failed.
    ///
    /// # Errors
    /// Returns the first failing stage's error. Nothing is left on disk if
    /// reading, rendering or reporting the path fails.
    pub fn run(self, out: &mut impl Write, opener: &impl Opener) -> Result<PathBuf> {
        let template = self.template_source();
        let document = self.input.into_document()?;
        debug!(name = document.display_name(), ?template, "rendering");

        let html = render(document.source(), &template, document.display_name())?;
        let path = write_html(&html)?;
        if let Err(err) = writeln!(out, "{}", path.display()) {
            // The path was never reported
            remove_preview_file(&path);
            return Err(Error::OutputWrite(err));
        }

        if self.skip_preview {
            debug!(path = %path.display(), "preview skipped, keeping file");
            return Ok(path);
        }

        let opened = opener.open(&path);
        // The viewer may read the file after the launcher has exited.
        let launched = match &opened {
            Ok(()) => true,
            Err(err) => err.launcher_ran(),
        };
        if launched {
            thread::sleep(self.grace_period);
        }
        remove_preview_file(&path);
        opened?;
        Ok(path)
    }
}

fn remove_preview_file(path: &Path) {
    if let Err(err) = fs::remove_file(path) {
        warn!(path = %path.display(), %err, "failed to remove preview file");
    }
}
