//! In-flight representation of one log event

use super::log_level::Level;
use chrono::{DateTime, Local};
use std::fmt;
use std::io::{self, Write};

/// Appends the message body to the sink's line buffer.
pub type AppendFn<'a> = &'a dyn Fn(&mut Vec<u8>);

/// Writes an extra payload (text block, hex dump, stack trace) directly to the
/// sink's output, after the header line.
pub type ExtraFn<'a> = &'a dyn Fn(&mut dyn Write) -> io::Result<()>;

/// One log event.
///
/// Built by the logger for a single sink call and dropped right after it.
/// Sinks must not keep references to it.
pub struct Message<'a> {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub file: &'a str,
    pub line: u32,
    append: AppendFn<'a>,
    extra: Option<ExtraFn<'a>>,
}

impl<'a> Message<'a> {
    pub fn new(
        timestamp: DateTime<Local>,
        level: Level,
        file: &'a str,
        line: u32,
        append: AppendFn<'a>,
        extra: Option<ExtraFn<'a>>,
    ) -> Self {
        Self {
            timestamp,
            level,
            file,
            line,
            append,
            extra,
        }
    }

    /// Run the deferred body formatter into `buf`.
    #[inline]
    pub fn append_body(&self, buf: &mut Vec<u8>) {
        (self.append)(buf)
    }

    #[inline]
    pub fn has_extra(&self) -> bool {
        self.extra.is_some()
    }

    /// Run the extra payload writer, if any.
    pub fn write_extra(&self, out: &mut dyn Write) -> io::Result<()> {
        match self.extra {
            Some(extra) => extra(out),
            None => Ok(()),
        }
    }

    /// Append `file:line ` to `buf`.
    pub fn append_source(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self.file.as_bytes());
        let _ = write!(buf, ":{} ", self.line);
    }
}

impl fmt::Debug for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message")
            .field("timestamp", &self.timestamp)
            .field("level", &self.level)
            .field("file", &self.file)
            .field("line", &self.line)
            .field("has_extra", &self.has_extra())
            .finish()
    }
}

/// Append `args` to `buf`, the `printf` flavour of message bodies.
pub fn append_args(buf: &mut Vec<u8>, args: fmt::Arguments<'_>) {
    // A Display impl returning an error leaves whatever it wrote so far.
    let _ = buf.write_fmt(args);
}

/// Append `values` separated by single spaces, the `print` flavour of message
/// bodies.
pub fn append_values(buf: &mut Vec<u8>, values: &[&dyn fmt::Display]) {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            buf.push(b' ');
        }
        let _ = write!(buf, "{}", value);
    }
}
