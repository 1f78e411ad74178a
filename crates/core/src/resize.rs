//! Resampler: produces a target-resolution image from a source image.
//!
//! Two strategies exist and exactly one is chosen per call:
//!
//! - **Two-stage**: when `samples > 1` and `source / samples` is non-zero on
//!   both axes, the source is first shrunk to that intermediate size, then the
//!   intermediate is resampled to the target. Both passes take one sample per
//!   pixel. The pre-shrink approximates heavy multi-sampling at a fraction of
//!   the cost.
//! - **Multi-sample**: otherwise every target pixel averages a regular
//!   `samples x samples` grid of sub-samples centered on the pixel.

use crate::error::ResizeError;
use crate::image::{Image, Rgba16, Rgba8};
use crate::kernel::Kernel;
use crate::sample::{quantize, sample_weighted};
use crate::types::DEFAULT_SAMPLES;

/// Support radius used by every resize pass.
pub const MAIN_PASS_RADIUS: u32 = 2;

/// Parameters threaded into [`resize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResampleConfig {
    pub kernel: Kernel,
    /// Sub-samples per axis. Must be at least 1.
    pub samples: u32,
}

impl Default for ResampleConfig {
    fn default() -> Self {
        Self {
            kernel: Kernel::default(),
            samples: DEFAULT_SAMPLES,
        }
    }
}

impl ResampleConfig {
    pub fn new(kernel: Kernel, samples: u32) -> Self {
        Self { kernel, samples }
    }
}

/// How a single resize call is carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeStrategy {
    /// Pre-shrink to `width x height`, then resample to the target.
    TwoStage { width: usize, height: usize },
    /// Average a `samples x samples` sub-pixel grid per target pixel.
    MultiSample,
}

impl ResizeStrategy {
    /// Choose the strategy for a source of `src_w x src_h`.
    ///
    /// ```
    /// use timview_core::ResizeStrategy;
    ///
    /// assert_eq!(
    ///     ResizeStrategy::select(100, 60, 4),
    ///     ResizeStrategy::TwoStage { width: 25, height: 15 }
    /// );
    /// assert_eq!(ResizeStrategy::select(3, 60, 4), ResizeStrategy::MultiSample);
    /// assert_eq!(ResizeStrategy::select(100, 60, 1), ResizeStrategy::MultiSample);
    /// ```
    pub fn select(src_w: usize, src_h: usize, samples: u32) -> Self {
        if samples > 1 {
            let s = samples as usize;
            let width = src_w / s;
            let height = src_h / s;
            if width > 0 && height > 0 {
                return ResizeStrategy::TwoStage { width, height };
            }
        }
        ResizeStrategy::MultiSample
    }
}

/// Fill in a zero target dimension from the source aspect ratio.
///
/// The derived side is rounded and never smaller than 1. When both sides are
/// zero they are returned unchanged.
pub fn derive_dimensions(
    src_w: usize,
    src_h: usize,
    width: usize,
    height: usize,
) -> (usize, usize) {
    match (width, height) {
        (0, 0) => (0, 0),
        (0, h) => {
            let ratio = src_w as f64 / src_h as f64;
            (((h as f64 * ratio).round() as usize).max(1), h)
        }
        (w, 0) => {
            let ratio = src_h as f64 / src_w as f64;
            (w, ((w as f64 * ratio).round() as usize).max(1))
        }
        dims => dims,
    }
}

/// Resize `src` to `width x height`.
///
/// - `0 x 0` returns a copy of the source.
/// - A single zero side is derived from the source aspect ratio.
///
/// # Errors
///
/// [`ResizeError::InvalidDimensions`] for a source without pixels and
/// [`ResizeError::InvalidSampleCount`] for `config.samples == 0`.
pub fn resize(
    src: &Image,
    width: usize,
    height: usize,
    config: &ResampleConfig,
) -> Result<Image, ResizeError> {
    if src.is_empty() {
        return Err(ResizeError::InvalidDimensions {
            width: src.width(),
            height: src.height(),
        });
    }
    if config.samples == 0 {
        return Err(ResizeError::InvalidSampleCount(config.samples));
    }
    if width == 0 && height == 0 {
        return Ok(src.clone());
    }

    let (width, height) = derive_dimensions(src.width(), src.height(), width, height);

    let out = match ResizeStrategy::select(src.width(), src.height(), config.samples) {
        ResizeStrategy::TwoStage {
            width: iw,
            height: ih,
        } => {
            let intermediate = resample_single(src, iw, ih, config.kernel)?;
            resample_single(&intermediate, width, height, config.kernel)?
        }
        ResizeStrategy::MultiSample => resample_multi(src, width, height, config)?,
    };
    Ok(out)
}

/// One sample per target pixel at `(x * scale_x, y * scale_y)`.
fn resample_single(
    src: &Image,
    width: usize,
    height: usize,
    kernel: Kernel,
) -> Result<Image, ResizeError> {
    let scale_x = src.width() as f64 / width as f64;
    let scale_y = src.height() as f64 / height as f64;

    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        let sy = y as f64 * scale_y;
        for x in 0..width {
            let c = sample_weighted(src, x as f64 * scale_x, sy, kernel, MAIN_PASS_RADIUS);
            pixels.push(Rgba16::from(c));
        }
    }

    Image::from_vec(width, height, pixels)
}

fn resample_multi(
    src: &Image,
    width: usize,
    height: usize,
    config: &ResampleConfig,
) -> Result<Image, ResizeError> {
    let scale_x = src.width() as f64 / width as f64;
    let scale_y = src.height() as f64 / height as f64;

    let n = config.samples;
    let offsets: Vec<f64> = (0..n).map(|k| f64::from(k) / f64::from(n) - 0.5).collect();
    let count = f64::from(n) * f64::from(n);

    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let mut acc = [0.0f64; 4];
            for &oy in &offsets {
                let sy = (y as f64 + oy) * scale_y;
                for &ox in &offsets {
                    let sx = (x as f64 + ox) * scale_x;
                    let c = sample_weighted(src, sx, sy, config.kernel, MAIN_PASS_RADIUS);
                    acc[0] += f64::from(c.r);
                    acc[1] += f64::from(c.g);
                    acc[2] += f64::from(c.b);
                    acc[3] += f64::from(c.a);
                }
            }

            let c = Rgba8 {
                r: quantize(acc[0] / count),
                g: quantize(acc[1] / count),
                b: quantize(acc[2] / count),
                a: quantize(acc[3] / count),
            };
            pixels.push(Rgba16::from(c));
        }
    }

    Image::from_vec(width, height, pixels)
}
