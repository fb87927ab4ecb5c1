//! Page template loading and execution.

use std::path::PathBuf;

use tera::{Context, Tera};
use tracing::debug;

use super::RenderContext;
use crate::error::{Error, Result};

/// Name every template is registered under. The `.html` suffix turns on
/// tera's auto-escaping for `title` and `filename`.
const TEMPLATE_NAME: &str = "preview.html";

/// Page used when no template file is configured.
pub const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8">
    <title>{{ title }}</title>
  </head>
  <body>
    <p>Previewing file: {{ filename }}</p>
    {{ body | safe }}
  </body>
</html>
"#;

/// Where the page template comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TemplateSource {
    File(PathBuf),
    #[default]
    Default,
}

pub(super) fn load(source: &TemplateSource) -> Result<Tera> {
    let mut tera = Tera::default();
    match source {
        TemplateSource::File(path) => {
            tera.add_template_file(path, Some(TEMPLATE_NAME))
                .map_err(|source| Error::TemplateLoad {
                    path: path.clone(),
                    source,
                })?;
            debug!(path = %path.display(), "loaded template file");
        }
        TemplateSource::Default => {
            tera.add_raw_template(TEMPLATE_NAME, DEFAULT_TEMPLATE)
                .map_err(Error::Render)?;
        }
    }
    Ok(tera)
}

pub(super) fn execute(tera: &Tera, context: &RenderContext<'_>) -> Result<String> {
    let context = Context::from_serialize(context).map_err(Error::Render)?;
    tera.render(TEMPLATE_NAME, &context).map_err(Error::Render)
}
