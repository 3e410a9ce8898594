//! Android log daemon sink
//!
//! Writes the `logdw` wire format: an 11-byte header (log id, pid, seconds,
//! nanoseconds), a priority byte, the NUL-terminated tag and the
//! NUL-terminated payload, all in one datagram.

use crate::core::{Level, LoggerError, Message, Result, Sink};
use std::io;
use std::os::unix::net::UnixDatagram;
use std::path::Path;

pub const LOGDW_PATH: &str = "/dev/socket/logdw";

const LOG_ID_MAIN: u8 = 0;
const HEADER_LEN: usize = 11;

/// Android log priority for `level`.
pub fn priority(level: Level) -> u8 {
    match level {
        Level::Silence => 8,
        Level::Fatal => 7,
        Level::Error => 6,
        Level::Warning => 5,
        Level::Notice | Level::Info => 4,
        Level::Debug => 3,
        Level::Verbose | Level::VeryVerbose => 2,
    }
}

pub struct LogdSink {
    socket: UnixDatagram,
    tag: Vec<u8>,
    pid: u16,
    buf: Vec<u8>,
}

impl LogdSink {
    pub fn new(tag: impl Into<String>) -> Result<Self> {
        Self::connect(LOGDW_PATH, tag)
    }

    pub fn connect(path: impl AsRef<Path>, tag: impl Into<String>) -> Result<Self> {
        let path = path.as_ref();
        let socket = UnixDatagram::unbound().map_err(|e| {
            LoggerError::io_operation("creating logd socket", "unbound UNIX datagram", e)
        })?;
        socket
            .connect(path)
            .map_err(|e| LoggerError::connect(path.display().to_string(), e))?;
        Ok(Self {
            socket,
            tag: tag.into().into_bytes(),
            // The header field is 16 bits wide.
            pid: std::process::id() as u16,
            buf: Vec::with_capacity(super::LINE_BUF_SIZE),
        })
    }

    fn frame(&mut self, message: &Message<'_>) -> io::Result<()> {
        let buf = &mut self.buf;
        buf.clear();
        buf.push(LOG_ID_MAIN);
        buf.extend_from_slice(&self.pid.to_le_bytes());
        buf.extend_from_slice(&(message.timestamp.timestamp() as u32).to_le_bytes());
        buf.extend_from_slice(&message.timestamp.timestamp_subsec_nanos().to_le_bytes());
        debug_assert_eq!(buf.len(), HEADER_LEN);

        buf.push(priority(message.level));
        buf.extend_from_slice(&self.tag);
        buf.push(0);

        buf.push(message.level.glyph());
        buf.push(b' ');
        message.append_source(buf);
        message.append_body(buf);
        if message.has_extra() {
            buf.push(b'\n');
            message.write_extra(&mut *buf)?;
        }
        buf.push(0);
        Ok(())
    }
}

impl Sink for LogdSink {
    fn render(&mut self, message: &Message<'_>) -> Result<()> {
        self.frame(message)?;
        self.socket.send(&self.buf)?;
        Ok(())
    }

    fn name(&self) -> &str {
        "logd"
    }
}
