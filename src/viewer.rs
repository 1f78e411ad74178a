//! Interactive slideshow over a directory of images.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use crate::config::ViewerConfig;
use crate::core::{Slideshow, Transition};
use crate::input::{handle_key_event, KeyThrottle};
use crate::loader::{scan_dir, BackgroundRenderer};
use crate::term::{controls_line, TerminalRenderer};
use crate::types::INPUT_THROTTLE_MS;

/// Upper bound on how long the loop blocks waiting for a key.
const POLL_MS: u64 = 30;

/// Browse every supported image in `dir`.
///
/// The terminal is switched to raw mode for the duration and restored on
/// every exit path.
pub fn run_slideshow(config: &ViewerConfig, dir: &Path, term_width: u16) -> Result<()> {
    let paths = scan_dir(dir)?;
    if paths.is_empty() {
        bail!("no png or jpeg images found in {}", dir.display());
    }

    let target_width = config.target_width(term_width);
    info!(
        dir = %dir.display(),
        images = paths.len(),
        target_width,
        "starting slideshow"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &paths, target_width, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, paths: &[PathBuf], target_width: usize, config: &ViewerConfig) -> Result<()> {
    let mut renders = BackgroundRenderer::start(paths, target_width, config.resample)
        .context("could not start render workers")?;
    let mut show = Slideshow::new(paths.len());
    let mut throttle = KeyThrottle::new(INPUT_THROTTLE_MS);
    let clock = Instant::now();

    loop {
        // Collect finished renders.
        while let Some(done) = renders.try_recv() {
            let transition = match done.outcome {
                Ok(text) => show.complete(done.index, text),
                Err(_) => show.fail(done.index),
            };
            debug!(
                index = done.index,
                settled = show.settled(),
                total = show.len(),
                "render finished"
            );
            if transition == Transition::Redraw {
                draw(term, &show, paths, target_width)?;
            }
        }

        if show.all_failed() {
            bail!("none of the images in the directory could be loaded");
        }

        // Input with timeout, shortened while a throttled action is waiting.
        let now_ms = clock.elapsed().as_millis() as u64;
        let wait_ms = throttle
            .time_until_ready(now_ms)
            .map_or(POLL_MS, |ms| ms.min(POLL_MS));

        if event::poll(Duration::from_millis(wait_ms))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(action) = handle_key_event(key) {
                        if throttle.push(action).is_some() && show.apply(action) == Transition::Quit {
                            return Ok(());
                        }
                    }
                }
            }
        }

        let now_ms = clock.elapsed().as_millis() as u64;
        if let Some(action) = throttle.poll(now_ms) {
            match show.apply(action) {
                Transition::Quit => return Ok(()),
                Transition::Redraw => draw(term, &show, paths, target_width)?,
                Transition::None => {}
            }
        }
    }
}

fn draw(term: &mut TerminalRenderer, show: &Slideshow, paths: &[PathBuf], target_width: usize) -> Result<()> {
    let Some(frame) = show.current_frame() else {
        return Ok(());
    };
    let caption = paths
        .get(show.current_index())
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    let footer = controls_line(show.position(), show.len(), target_width);
    term.present(&caption, frame, &footer)
}
