//! mdp - preview a markdown file in the default browser.
//!
//! # Usage
//!
//! ```bash
//! mdp --file README.md
//! mdp --file README.md --template page.html
//! cat README.md | mdp --skip-preview
//! ```

use std::io::{IsTerminal, stdin, stdout};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use mdp::app::App;
use mdp::config::TEMPLATE_ENV;
use mdp::document::InputSource;
use mdp::error::Error;
use mdp::preview::SystemOpener;

const ENV_HELP: &str = "\
Environment Variables:
  MDP_TEMPLATE  Path to a default template file. Used when --template is not given.

Examples:
  mdp --file example.md
  mdp --file example.md --template /path/to/template.html
  MDP_TEMPLATE=/path/to/template.html mdp --file example.md
  cat example.md | mdp --skip-preview";

/// Exit status for usage errors and failed runs.
const FAILURE: i32 = 1;

/// Render a markdown file to sanitized HTML and open it in the default browser
#[derive(Parser, Debug)]
#[command(name = "mdp", version, about, long_about = None, after_help = ENV_HELP)]
struct Cli {
    /// Markdown file to preview; standard input is read when omitted and piped
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Skip opening the preview in a browser
    #[arg(short, long)]
    skip_preview: bool,

    /// Alternate HTML template file
    #[arg(short, long, value_name = "PATH")]
    template: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the preview path
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            let _ = err.print();
            std::process::exit(FAILURE);
        }
    };

    let stdin = stdin();
    let input = match InputSource::resolve(cli.file, stdin.is_terminal(), stdin.lock()) {
        Ok(input) => input,
        Err(Error::Usage) => {
            eprintln!("{}\n", Error::Usage);
            eprintln!("{}", Cli::command().render_help());
            std::process::exit(FAILURE);
        }
        Err(err) => return Err(err).context("Failed to read input"),
    };

    let app = App::new(input)
        .with_template(cli.template)
        .with_env_template(std::env::var_os(TEMPLATE_ENV))
        .with_skip_preview(cli.skip_preview);

    let mut out = stdout().lock();
    app.run(&mut out, &SystemOpener::new())?;
    Ok(())
}
