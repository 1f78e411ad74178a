//! Terminal output for the image viewer.
//!
//! Two layers:
//! - [`glyph`] is pure: it turns a resized image into half-block glyph rows
//!   and encodes them as 24-bit SGR escape sequences.
//! - [`renderer`] owns the real terminal (raw mode, cursor, clearing) and
//!   flushes whole frames.

pub mod controls;
pub mod glyph;
pub mod renderer;

pub use timview_core as core;
pub use timview_types as types;

pub use controls::controls_line;
pub use glyph::{encode_rows_into, rasterize, render_image, Glyph, GlyphRow, Rgb};
pub use renderer::{encode_frame_into, terminal_width, TerminalRenderer};
