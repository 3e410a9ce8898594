//! Plain text and ANSI terminal sinks

use crate::core::{append_timestamp, Level, Message, Result, Sink};
use std::io::Write;

/// Initial capacity of the per-message line buffer
pub const LINE_BUF_SIZE: usize = 4096;

const RESET: &[u8] = b"\x1b[0m";

/// Build `[color]glyph timestamp file:line body[reset]\n`.
pub(crate) fn render_line(message: &Message<'_>, colored: bool) -> Vec<u8> {
    let mut buf = Vec::with_capacity(LINE_BUF_SIZE);
    if colored {
        append_color(&mut buf, message.level);
    }
    buf.push(message.level.glyph());
    buf.push(b' ');
    append_timestamp(&mut buf, &message.timestamp);
    buf.push(b' ');
    message.append_source(&mut buf);
    message.append_body(&mut buf);
    if colored {
        buf.extend_from_slice(RESET);
    }
    buf.push(b'\n');
    buf
}

fn append_color(buf: &mut Vec<u8>, level: Level) {
    buf.extend_from_slice(b"\x1b[");
    buf.extend_from_slice(level.color_code().to_fg_str().as_bytes());
    buf.push(b'm');
}

/// Writes uncolored lines to a byte stream, flushing after every message.
pub struct TextSink {
    out: Box<dyn Write + Send>,
}

impl TextSink {
    pub fn new(out: impl Write + Send + 'static) -> Self {
        Self { out: Box::new(out) }
    }

    pub fn from_boxed(out: Box<dyn Write + Send>) -> Self {
        Self { out }
    }
}

impl Sink for TextSink {
    fn render(&mut self, message: &Message<'_>) -> Result<()> {
        let line = render_line(message, false);
        self.out.write_all(&line)?;
        message.write_extra(&mut *self.out)?;
        self.out.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "text"
    }
}

/// Like [`TextSink`], with each header line wrapped in the level's ANSI color.
pub struct TerminalSink {
    out: Box<dyn Write + Send>,
}

impl TerminalSink {
    pub fn new(out: impl Write + Send + 'static) -> Self {
        Self { out: Box::new(out) }
    }

    pub fn from_boxed(out: Box<dyn Write + Send>) -> Self {
        Self { out }
    }
}

impl Sink for TerminalSink {
    fn render(&mut self, message: &Message<'_>) -> Result<()> {
        let line = render_line(message, true);
        self.out.write_all(&line)?;
        message.write_extra(&mut *self.out)?;
        self.out.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "terminal"
    }
}

impl Drop for TextSink {
    fn drop(&mut self) {
        let _ = self.out.flush();
    }
}

impl Drop for TerminalSink {
    fn drop(&mut self) {
        let _ = self.out.flush();
    }
}
