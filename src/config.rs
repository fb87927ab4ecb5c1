use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::render::TemplateSource;

/// Environment variable naming a fallback template file.
pub const TEMPLATE_ENV: &str = "MDP_TEMPLATE";

/// Pick the template for a run.
///
/// An explicit `--template` wins, then `MDP_TEMPLATE`, then the built-in page.
/// An empty environment value counts as unset.
pub fn resolve_template(explicit: Option<&Path>, env_value: Option<OsString>) -> TemplateSource {
    if let Some(path) = explicit {
        return TemplateSource::File(path.to_path_buf());
    }
    env_value
        .filter(|value| !value.is_empty())
        .map_or(TemplateSource::Default, |value| {
            TemplateSource::File(PathBuf::from(value))
        })
}
