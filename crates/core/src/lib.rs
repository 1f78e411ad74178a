//! Resampling core - pure, deterministic, and testable
//!
//! This crate turns a decoded pixel grid into a smaller (or larger) pixel grid
//! ready for half-block rendering. It has **no I/O**: decoding and terminal
//! output live elsewhere.
//!
//! # Module Structure
//!
//! - [`image`]: immutable RGBA grid with 16-bit channels
//! - [`kernel`]: the closed set of interpolation kernels
//! - [`sample`]: weighted neighborhood sampler (one output color per call)
//! - [`resize`]: two-stage and multi-sample resize strategies
//! - [`slideshow`]: navigation state for the directory viewer
//!
//! # Sampling Conventions
//!
//! Coordinates passed to the sampler are continuous positions in source
//! pixel space. The neighborhood spans `2r + 2` taps per axis starting at
//! `floor(x) - r`. Taps outside the image are omitted (not clamped or
//! mirrored), so edge pixels are normalized by a smaller total weight.
//! Kernel distances are divided by the radius before evaluation.
//!
//! # Example
//!
//! ```
//! use timview_core::{resize, Image, Kernel, ResampleConfig, Rgba8};
//!
//! let red = Image::new_fill(4, 4, Rgba8::new(255, 0, 0, 255).into());
//! let small = resize(&red, 2, 0, &ResampleConfig::new(Kernel::MitchellNetravali, 2)).unwrap();
//!
//! assert_eq!((small.width(), small.height()), (2, 2));
//! assert_eq!(small.get(0, 0).unwrap().to_rgba8().r, 255);
//! ```

pub mod error;
pub mod image;
pub mod kernel;
pub mod resize;
pub mod sample;
pub mod slideshow;

pub use timview_types as types;

pub use error::ResizeError;
pub use image::{Image, Rgba16, Rgba8};
pub use kernel::Kernel;
pub use resize::{derive_dimensions, resize, ResampleConfig, ResizeStrategy, MAIN_PASS_RADIUS};
pub use sample::sample_weighted;
pub use slideshow::{Slideshow, Slot, Transition};
