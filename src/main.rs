//! Terminal image viewer (default binary).
//!
//! A file argument renders one image to stdout. A directory argument opens
//! the interactive slideshow.

use std::io::{self, IsTerminal, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use timview::config::{Cli, ViewerConfig};
use timview::loader::render_file;
use timview::term::terminal_width;
use timview::viewer::run_slideshow;

fn main() -> Result<()> {
    let config = ViewerConfig::from_cli(Cli::parse());

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(config.log_level().into()))
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let stdout = io::stdout();
    if !stdout.is_terminal() {
        warn!("stdout is not a terminal");
    }

    let term_width = config.term_width(terminal_width());
    let meta = std::fs::metadata(&config.path)
        .with_context(|| format!("cannot access {}", config.path.display()))?;

    if meta.is_dir() {
        return run_slideshow(&config, &config.path, term_width);
    }

    let target_width = config.target_width(term_width);
    info!(
        path = %config.path.display(),
        target_width,
        kernel = %config.resample.kernel,
        samples = config.resample.samples,
        "rendering image"
    );
    let text = render_file(&config.path, target_width, &config.resample)?;

    let mut out = stdout.lock();
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}
