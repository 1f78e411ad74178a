//! Immutable RGBA pixel grid.
//!
//! Channels are stored at 16-bit precision. Consumers normalize to 8-bit by
//! dropping the low byte (`>> 8`), so an 8-bit value `v` stored as
//! `v * 257` reads back as exactly `v`.

use crate::error::ResizeError;

/// 8-bit RGBA color, the precision the sampler and renderer work in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

/// 16-bit RGBA color as stored in an [`Image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgba16 {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

impl Rgba16 {
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    /// Normalize to 8-bit by discarding the low 8 bits of each channel.
    #[inline]
    pub const fn to_rgba8(self) -> Rgba8 {
        Rgba8 {
            r: (self.r >> 8) as u8,
            g: (self.g >> 8) as u8,
            b: (self.b >> 8) as u8,
            a: (self.a >> 8) as u8,
        }
    }

    /// Channels normalized to 0-255 as floats, in R, G, B, A order.
    #[inline]
    pub(crate) fn channels8(self) -> [f64; 4] {
        let c = self.to_rgba8();
        [
            f64::from(c.r),
            f64::from(c.g),
            f64::from(c.b),
            f64::from(c.a),
        ]
    }
}

impl From<Rgba8> for Rgba16 {
    fn from(c: Rgba8) -> Self {
        // 0xAB -> 0xABAB
        Self {
            r: u16::from(c.r) * 257,
            g: u16::from(c.g) * 257,
            b: u16::from(c.b) * 257,
            a: u16::from(c.a) * 257,
        }
    }
}

/// A 2D grid of pixels in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: usize,
    height: usize,
    pixels: Vec<Rgba16>,
}

impl Image {
    pub fn from_vec(width: usize, height: usize, pixels: Vec<Rgba16>) -> Result<Self, ResizeError> {
        let expected = width.checked_mul(height).ok_or(ResizeError::SizeMismatch {
            expected: usize::MAX,
            actual: pixels.len(),
        })?;

        if pixels.len() != expected {
            return Err(ResizeError::SizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn new_fill(width: usize, height: usize, value: Rgba16) -> Self {
        Self {
            width,
            height,
            pixels: vec![value; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn pixels(&self) -> &[Rgba16] {
        &self.pixels
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Rgba16> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }
}
