//! TerminalRenderer: owns the terminal while the slideshow runs.
//!
//! Frames are full redraws: clear, caption, pre-rendered image text, footer.
//! Everything is queued into one buffer and written with a single flush.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
    raw: bool,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(256 * 1024),
            raw: false,
        }
    }

    /// Switch to raw mode and hide the cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.raw = true;
        self.buf.clear();
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()?;
        Ok(())
    }

    /// Clear the screen, restore the cursor and leave raw mode.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        encode_clear_into(&mut self.buf)?;
        self.buf.queue(cursor::Show)?;
        self.flush_buf()?;
        if self.raw {
            terminal::disable_raw_mode()?;
            self.raw = false;
        }
        Ok(())
    }

    /// Draw one slideshow frame.
    pub fn present(&mut self, caption: &str, image: &str, footer: &str) -> Result<()> {
        self.buf.clear();
        encode_frame_into(caption, image, footer, &mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Current terminal width in columns, if it can be queried.
pub fn terminal_width() -> Option<u16> {
    terminal::size().ok().map(|(w, _)| w).filter(|&w| w > 0)
}

/// Encode a full-frame redraw into `out`.
pub fn encode_frame_into(caption: &str, image: &str, footer: &str, out: &mut Vec<u8>) -> Result<()> {
    encode_clear_into(out)?;
    out.queue(Print(format!("Displaying: {caption}\r\n")))?;
    out.queue(Print(image))?;
    out.queue(Print(footer))?;
    Ok(())
}

fn encode_clear_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(terminal::Clear(terminal::ClearType::Purge))?;
    out.queue(cursor::MoveTo(0, 0))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_starts_with_clear_and_keeps_order() {
        let mut out = Vec::new();
        encode_frame_into("a.png", "IMG\r\n", "FOOT", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("\x1b[2J\x1b[3J\x1b[1;1H"));
        let caption = text.find("Displaying: a.png\r\n").unwrap();
        let image = text.find("IMG\r\n").unwrap();
        let footer = text.find("FOOT").unwrap();
        assert!(caption < image && image < footer);
    }
}
