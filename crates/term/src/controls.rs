//! Slideshow footer line.

use crate::types::EXIT_HINT;

/// Build the footer shown under the image.
///
/// `< i/n >` is centered in `width` columns and the exit hint is flushed to
/// the right edge. When `width` is too narrow the two parts are simply
/// concatenated.
pub fn controls_line(position: usize, total: usize, width: usize) -> String {
    let counter = format!("< {position}/{total} >");
    let centered = format!("{counter:>pad$}", pad = (width + counter.len()) / 2);
    let left = format!("{centered:<pad$}", pad = width.saturating_sub(EXIT_HINT.len()));
    format!("{left}{EXIT_HINT}")
}
