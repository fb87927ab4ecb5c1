//! Markdown to sanitized, templated HTML.
//!
//! The pipeline is:
//! 1. comrak converts markdown to an HTML fragment (raw HTML passes through)
//! 2. ammonia strips anything able to run script
//! 3. tera merges the fragment into the page template
//!
//! Sanitization is the only security boundary, so the fragment must never
//! reach a template without going through [`sanitize`].

mod template;

use std::sync::LazyLock;

use comrak::{Options, markdown_to_html};
use serde::Serialize;
use tracing::debug;

pub use template::{DEFAULT_TEMPLATE, TemplateSource};

use crate::error::Result;

/// Title placed in every rendered page.
pub const PAGE_TITLE: &str = "Markdown Preview Tool";

static SANITIZER: LazyLock<ammonia::Builder<'static>> = LazyLock::new(build_sanitizer);

/// Values exposed to the page template.
///
/// `body` is already sanitized; templates emit it with `{{ body | safe }}`.
#[derive(Debug, Clone, Serialize)]
pub struct RenderContext<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub filename: &'a str,
}

/// Render markdown bytes into a complete HTML document.
///
/// Invalid UTF-8 in `markdown` is replaced rather than rejected.
///
/// # Errors
/// Returns [`crate::Error::TemplateLoad`] if a template file cannot be read or
/// parsed, and [`crate::Error::Render`] if the template fails to execute.
///
/// # Example
///
/// ```
/// use mdp::render::{render, TemplateSource};
///
/// let html = render(b"# Hello", &TemplateSource::Default, "hello.md").unwrap();
/// let html = String::from_utf8(html).unwrap();
/// assert!(html.contains("<h1>Hello</h1>"));
/// assert!(html.contains("Previewing file: hello.md"));
/// ```
pub fn render(markdown: &[u8], template: &TemplateSource, display_name: &str) -> Result<Vec<u8>> {
    let fragment = markdown_fragment(&String::from_utf8_lossy(markdown));
    let body = sanitize(&fragment);
    debug!(
        fragment_len = fragment.len(),
        body_len = body.len(),
        "rendered markdown body"
    );

    let tera = template::load(template)?;
    let context = RenderContext {
        title: PAGE_TITLE,
        body: &body,
        filename: display_name,
    };
    template::execute(&tera, &context).map(String::into_bytes)
}

/// Convert markdown to an unsanitized HTML fragment.
pub fn markdown_fragment(source: &str) -> String {
    let mut options = Options::default();
    configure_options(&mut options);
    markdown_to_html(source, &options)
}

/// Remove script-capable constructs from an HTML fragment.
pub fn sanitize(html: &str) -> String {
    SANITIZER.clean(html).to_string()
}

fn configure_options(options: &mut Options) {
    // Enable GFM extensions
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;

    // Raw HTML is left for the sanitizer to filter
    options.render.unsafe_ = true;
}

fn build_sanitizer() -> ammonia::Builder<'static> {
    let mut builder = ammonia::Builder::default();
    builder
        .add_tag_attributes("th", &["align"])
        .add_tag_attributes("td", &["align"]);
    builder
}
