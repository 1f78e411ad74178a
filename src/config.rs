//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::Parser;
use tracing::{warn, Level};

use crate::core::{Kernel, ResampleConfig};
use crate::types::{clamp_ratio, clamp_samples, DEFAULT_RATIO, DEFAULT_SAMPLES, FALLBACK_TERM_WIDTH};

const BANNER: &str = r"
  _____ ___ __  ____   ___
 |_   _|_ _|  \/  \ \ / (_)_____ __ __
   | |  | || |\/| |\ V /| / -_) V  V /
   |_| |___|_|  |_| \_/ |_\___|\_/\_/

Terminal IMage VIEWer: shows png/jpeg images in the terminal with ANSI
true-color half blocks. Pass a directory to browse it with the arrow keys.";

/// Environment variable consulted when `--width` is not given.
pub const WIDTH_ENV: &str = "TIMVIEW_WIDTH";

#[derive(Parser, Debug, Clone)]
#[command(name = "timview", version, about = "Terminal image viewer", long_about = BANNER)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Image file, or a directory to browse as a slideshow
    pub path: PathBuf,

    /// Share of the terminal width used by the image (0.1 - 1.0)
    #[arg(short = 'r', long, default_value_t = DEFAULT_RATIO)]
    pub ratio: f64,

    /// Sub-samples per axis used for smoothing (2 - 16)
    #[arg(short = 's', long, default_value_t = DEFAULT_SAMPLES)]
    pub samples: u32,

    /// Interpolation kernel: linear, cubic, mitchell, bicubic, lanczos
    #[arg(short = 'k', long, default_value = "mitchell", value_parser = parse_kernel)]
    pub kernel: Kernel,

    /// Terminal width in columns (overrides detection and TIMVIEW_WIDTH)
    #[arg(short = 'w', long)]
    pub width: Option<u16>,

    /// Only log errors
    #[arg(long)]
    pub nowarn: bool,

    /// Log debug details to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

fn parse_kernel(s: &str) -> Result<Kernel, String> {
    Kernel::from_str(s).ok_or_else(|| {
        format!("unknown kernel '{s}' (expected linear, cubic, mitchell, bicubic or lanczos)")
    })
}

/// Resolved viewer settings. Built once in `main` and passed down.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub path: PathBuf,
    pub ratio: f64,
    pub resample: ResampleConfig,
    pub width_override: Option<u16>,
    pub nowarn: bool,
    pub verbose: bool,
}

impl ViewerConfig {
    /// Resolve CLI arguments, falling back to `TIMVIEW_WIDTH` for the width.
    pub fn from_cli(cli: Cli) -> Self {
        let env_width = std::env::var(WIDTH_ENV).ok();
        Self::from_parts(cli, env_width.as_deref())
    }

    pub fn from_parts(cli: Cli, env_width: Option<&str>) -> Self {
        let width_override = cli.width.filter(|&w| w > 0).or_else(|| env_width.and_then(parse_width));

        Self {
            path: cli.path,
            ratio: clamp_ratio(cli.ratio),
            resample: ResampleConfig::new(cli.kernel, clamp_samples(cli.samples)),
            width_override,
            nowarn: cli.nowarn,
            verbose: cli.verbose,
        }
    }

    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else if self.nowarn {
            Level::ERROR
        } else {
            Level::WARN
        }
    }

    /// Pick the terminal width: override, then the queried size, then 100 columns.
    pub fn term_width(&self, queried: Option<u16>) -> u16 {
        if let Some(w) = self.width_override {
            return w;
        }
        match queried {
            Some(w) if w > 0 => w,
            _ => {
                warn!("could not get terminal bounds, width set to {FALLBACK_TERM_WIDTH} columns");
                FALLBACK_TERM_WIDTH
            }
        }
    }

    /// Image width in pixels (= glyph columns) for a terminal `term_width` wide.
    pub fn target_width(&self, term_width: u16) -> usize {
        ((f64::from(term_width) * self.ratio).round() as usize).max(1)
    }
}

/// Parse a positive column count.
pub fn parse_width(s: &str) -> Option<u16> {
    s.trim().parse::<u16>().ok().filter(|&w| w > 0)
}
