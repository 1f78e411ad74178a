//! Image loading: decode, resize, render, and background rendering.
//!
//! Decoding is delegated to the `image` crate. Pixels are widened to 16-bit
//! RGBA with color channels premultiplied by alpha, so transparent areas come
//! out black in the terminal.

use std::fs;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageReader};
use thiserror::Error;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::core::{resize, Image, ResampleConfig, ResizeError, ResizeStrategy, Rgba16};
use crate::term::render_image;

/// File extensions the viewer picks up (compared case-insensitively).
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not open file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("could not read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Resize(#[from] ResizeError),

    #[error(transparent)]
    Render(#[from] anyhow::Error),
}

/// Decode an image file into the core pixel grid.
pub fn decode_file(path: &Path) -> Result<Image, LoadError> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    let decoded = reader.decode().map_err(|source| LoadError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        path = %path.display(),
        width = decoded.width(),
        height = decoded.height(),
        "decoded image"
    );
    Ok(to_core_image(&decoded)?)
}

/// Convert a decoded image into a premultiplied 16-bit [`Image`].
pub fn to_core_image(img: &DynamicImage) -> Result<Image, ResizeError> {
    let rgba = img.to_rgba16();
    let (width, height) = rgba.dimensions();
    let pixels = rgba
        .pixels()
        .map(|p| premultiply(p[0], p[1], p[2], p[3]))
        .collect();
    Image::from_vec(width as usize, height as usize, pixels)
}

fn premultiply(r: u16, g: u16, b: u16, a: u16) -> Rgba16 {
    let mul = |c: u16| (u32::from(c) * u32::from(a) / 0xffff) as u16;
    Rgba16::new(mul(r), mul(g), mul(b), a)
}

/// Decode `path` and resize it to `target_width` columns, height derived.
pub fn prepare(path: &Path, target_width: usize, config: &ResampleConfig) -> Result<Image, LoadError> {
    let source = decode_file(path)?;
    debug!(
        path = %path.display(),
        target_width,
        kernel = %config.kernel,
        strategy = ?ResizeStrategy::select(source.width(), source.height(), config.samples),
        "resizing"
    );
    Ok(resize(&source, target_width, 0, config)?)
}

/// Decode, resize and render `path` into terminal text.
pub fn render_file(path: &Path, target_width: usize, config: &ResampleConfig) -> Result<String, LoadError> {
    let resized = prepare(path, target_width, config)?;
    Ok(render_image(&resized)?)
}

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|s| ext.eq_ignore_ascii_case(s))
        })
        .unwrap_or(false)
}

/// List supported images directly inside `dir`, sorted by path.
pub fn scan_dir(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let entries = fs::read_dir(dir).map_err(|source| LoadError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|e| e.path())
        .filter(|p| is_supported_image(p))
        .collect();
    paths.sort();

    debug!(dir = %dir.display(), count = paths.len(), "scanned directory");
    Ok(paths)
}

/// Outcome of one background render.
#[derive(Debug)]
pub struct Rendered {
    pub index: usize,
    pub path: PathBuf,
    pub outcome: Result<String, LoadError>,
}

/// Renders every image on its own blocking task and hands results back over
/// a channel, in completion order.
///
/// Bridges the sync viewer loop with the tokio blocking pool.
pub struct BackgroundRenderer {
    rt: Option<Runtime>,
    rx: mpsc::UnboundedReceiver<Rendered>,
}

impl BackgroundRenderer {
    pub fn start(paths: &[PathBuf], target_width: usize, config: ResampleConfig) -> std::io::Result<Self> {
        let rt = Runtime::new()?;
        let (tx, rx) = mpsc::unbounded_channel::<Rendered>();

        for (index, path) in paths.iter().cloned().enumerate() {
            let tx = tx.clone();
            rt.spawn_blocking(move || {
                let outcome = render_file(&path, target_width, &config);
                if let Err(e) = &outcome {
                    warn!("skipping {}: {e}", path.display());
                }
                // Receiver gone means the viewer already quit.
                let _ = tx.send(Rendered {
                    index,
                    path,
                    outcome,
                });
            });
        }

        Ok(Self { rt: Some(rt), rx })
    }

    pub fn try_recv(&mut self) -> Option<Rendered> {
        self.rx.try_recv().ok()
    }
}

impl Drop for BackgroundRenderer {
    fn drop(&mut self) {
        // Do not wait for renders still in flight.
        if let Some(rt) = self.rt.take() {
            rt.shutdown_background();
        }
    }
}
