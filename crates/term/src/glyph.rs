//! Glyph renderer: pairs of pixel rows to half-block terminal text.
//!
//! Row `y` paints the foreground (top half of the glyph) and row `y + 1` the
//! background (bottom half). An odd final row has no background partner and
//! is emitted with a foreground color only. Every glyph row ends with a
//! color reset and `\r\n`, so output is correct in raw and cooked mode.

use anyhow::Result;

use crossterm::{
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};

use crate::core::Image;
use crate::types::HALF_BLOCK;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// One terminal cell worth of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub fg: Rgb,
    /// `None` on the last row of an odd-height image.
    pub bg: Option<Rgb>,
    pub ch: char,
}

/// One line of glyphs, left to right.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GlyphRow {
    glyphs: Vec<Glyph>,
}

impl GlyphRow {
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }
}

/// Convert an image into glyph rows, top to bottom.
pub fn rasterize(img: &Image) -> Vec<GlyphRow> {
    let rows = img.height().div_ceil(2);
    let mut out = Vec::with_capacity(rows);

    for y in (0..img.height()).step_by(2) {
        let mut glyphs = Vec::with_capacity(img.width());
        for x in 0..img.width() {
            let fg = img.get(x, y).map(to_rgb).unwrap_or_default();
            let bg = img.get(x, y + 1).map(to_rgb);
            glyphs.push(Glyph {
                fg,
                bg,
                ch: HALF_BLOCK,
            });
        }
        out.push(GlyphRow { glyphs });
    }

    out
}

/// Encode glyph rows as SGR true-color escape sequences into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_rows_into(rows: &[GlyphRow], out: &mut Vec<u8>) -> Result<()> {
    for row in rows {
        for glyph in row.glyphs() {
            out.queue(SetForegroundColor(rgb_to_color(glyph.fg)))?;
            if let Some(bg) = glyph.bg {
                out.queue(SetBackgroundColor(rgb_to_color(bg)))?;
            }
            out.queue(Print(glyph.ch))?;
        }
        out.queue(ResetColor)?;
        out.queue(Print("\r\n"))?;
    }
    Ok(())
}

/// Render an image to a single text blob.
pub fn render_image(img: &Image) -> Result<String> {
    // Roughly 40 bytes of escapes per glyph.
    let mut buf = Vec::with_capacity(img.width() * img.height().div_ceil(2) * 40);
    encode_rows_into(&rasterize(img), &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

fn to_rgb(px: crate::core::Rgba16) -> Rgb {
    let (r, g, b) = px.to_rgba8().rgb();
    Rgb::new(r, g, b)
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
