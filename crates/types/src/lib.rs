//! Shared types and constants for the terminal image viewer.
//!
//! This crate has no dependencies. Everything here is plain data that the
//! resampling core, the terminal layer and the input layer agree on.
//!
//! # Output Geometry
//!
//! One terminal cell shows two vertical pixels: the upper half block glyph is
//! painted with the foreground color (top pixel) over the background color
//! (bottom pixel). Horizontal resolution is therefore one pixel per column.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_RATIO` | 0.5 | Fraction of the terminal width used for the image |
//! | `MIN_RATIO` / `MAX_RATIO` | 0.1 / 1.0 | Ratio clamp bounds |
//! | `DEFAULT_SAMPLES` | 2 | Sub-samples per axis for smoothing |
//! | `MIN_SAMPLES` / `MAX_SAMPLES` | 2 / 16 | Sample count clamp bounds |
//! | `FALLBACK_TERM_WIDTH` | 100 | Columns assumed when the terminal size is unknown |
//! | `INPUT_THROTTLE_MS` | 333 | Minimum interval between navigation actions |
//!
//! # Examples
//!
//! ```
//! use timview_types::{ViewerAction, DEFAULT_RATIO, MAX_SAMPLES};
//!
//! let action = ViewerAction::from_str("next").unwrap();
//! assert_eq!(action, ViewerAction::Next);
//! assert!(!action.is_quit());
//!
//! assert_eq!(DEFAULT_RATIO, 0.5);
//! assert_eq!(MAX_SAMPLES, 16);
//! ```

/// Default share of the terminal width occupied by the image.
pub const DEFAULT_RATIO: f64 = 0.5;

/// Lower bound for the width ratio.
pub const MIN_RATIO: f64 = 0.1;

/// Upper bound for the width ratio.
pub const MAX_RATIO: f64 = 1.0;

/// Default sub-sample count per axis.
pub const DEFAULT_SAMPLES: u32 = 2;

/// Lower bound for the sample count accepted from the command line.
pub const MIN_SAMPLES: u32 = 2;

/// Upper bound for the sample count accepted from the command line.
pub const MAX_SAMPLES: u32 = 16;

/// Terminal width used when the real size cannot be queried.
pub const FALLBACK_TERM_WIDTH: u16 = 100;

/// Navigation keys are coalesced to at most one action per interval (~3 per second).
pub const INPUT_THROTTLE_MS: u64 = 333;

/// Upper half block. Foreground paints the top half, background the bottom half.
pub const HALF_BLOCK: char = '\u{2580}';

/// Footer hint printed under the image in slideshow mode.
pub const EXIT_HINT: &str = "CTRL+C to EXIT";

/// Actions the slideshow understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewerAction {
    /// Show the previous image.
    Prev,
    /// Show the next image.
    Next,
    /// Leave the viewer.
    Quit,
}

impl ViewerAction {
    /// Parse an action name (case-insensitive).
    ///
    /// ```
    /// use timview_types::ViewerAction;
    ///
    /// assert_eq!(ViewerAction::from_str("PREV"), Some(ViewerAction::Prev));
    /// assert_eq!(ViewerAction::from_str("jump"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "prev" => Some(ViewerAction::Prev),
            "next" => Some(ViewerAction::Next),
            "quit" => Some(ViewerAction::Quit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewerAction::Prev => "prev",
            ViewerAction::Next => "next",
            ViewerAction::Quit => "quit",
        }
    }

    /// Quit bypasses input throttling.
    pub fn is_quit(&self) -> bool {
        matches!(self, ViewerAction::Quit)
    }
}

/// Clamp a ratio into `[MIN_RATIO, MAX_RATIO]`. NaN falls back to the default.
pub fn clamp_ratio(ratio: f64) -> f64 {
    if ratio.is_nan() {
        return DEFAULT_RATIO;
    }
    ratio.clamp(MIN_RATIO, MAX_RATIO)
}

/// Clamp a sample count into `[MIN_SAMPLES, MAX_SAMPLES]`.
pub fn clamp_samples(samples: u32) -> u32 {
    samples.clamp(MIN_SAMPLES, MAX_SAMPLES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewer_defaults() {
        assert_eq!(DEFAULT_RATIO, 0.5);
        assert_eq!(DEFAULT_SAMPLES, 2);
        assert_eq!(FALLBACK_TERM_WIDTH, 100);
        assert_eq!(INPUT_THROTTLE_MS, 333);
        assert_eq!(HALF_BLOCK, '▀');
    }

    #[test]
    fn action_names_round_trip() {
        for action in [ViewerAction::Prev, ViewerAction::Next, ViewerAction::Quit] {
            assert_eq!(ViewerAction::from_str(action.as_str()), Some(action));
        }
        assert!(ViewerAction::Quit.is_quit());
        assert!(!ViewerAction::Prev.is_quit());
    }

    #[test]
    fn ratio_is_clamped() {
        assert_eq!(clamp_ratio(0.0), MIN_RATIO);
        assert_eq!(clamp_ratio(-3.0), MIN_RATIO);
        assert_eq!(clamp_ratio(2.5), MAX_RATIO);
        assert_eq!(clamp_ratio(0.7), 0.7);
        assert_eq!(clamp_ratio(f64::NAN), DEFAULT_RATIO);
    }

    #[test]
    fn samples_are_clamped() {
        assert_eq!(clamp_samples(0), 2);
        assert_eq!(clamp_samples(1), 2);
        assert_eq!(clamp_samples(8), 8);
        assert_eq!(clamp_samples(64), 16);
    }
}
