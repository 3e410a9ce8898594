//! Syslog sink over the local Unix datagram socket
//!
//! Messages are framed in the RFC 3164 local form `<PRI>tag[pid]: body`.
//! The daemon stamps the receive time, so the body carries no timestamp.

use crate::core::{Level, LoggerError, Message, Result, Sink};
use std::io::{self, Write};
use std::os::unix::net::UnixDatagram;
use std::path::Path;

/// Well-known syslog socket locations, tried in order.
pub const SYSLOG_PATHS: [&str; 3] = ["/dev/log", "/var/run/syslog", "/var/run/log"];

const FACILITY_USER: u8 = 1 << 3;

/// Syslog severities (RFC 5424 section 6.2.1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Severity {
    Emergency = 0,
    Alert = 1,
    Critical = 2,
    Err = 3,
    Warning = 4,
    Notice = 5,
    Info = 6,
    Debug = 7,
}

impl From<Level> for Severity {
    fn from(level: Level) -> Self {
        match level {
            Level::Silence | Level::Fatal => Severity::Alert,
            Level::Error => Severity::Err,
            Level::Warning => Severity::Warning,
            Level::Notice => Severity::Notice,
            Level::Info => Severity::Info,
            Level::Debug | Level::Verbose | Level::VeryVerbose => Severity::Debug,
        }
    }
}

pub struct SyslogSink {
    socket: UnixDatagram,
    tag: String,
    pid: u32,
}

impl SyslogSink {
    /// Connect to the first reachable well-known syslog socket.
    pub fn new(tag: impl Into<String>) -> Result<Self> {
        let tag = tag.into();
        let mut last_err = None;
        for path in SYSLOG_PATHS {
            match Self::connect(path, tag.clone()) {
                Ok(sink) => return Ok(sink),
                Err(err) => last_err = Some(err),
            }
        }
        Err(last_err.unwrap_or_else(|| LoggerError::unsupported("syslog")))
    }

    /// Connect to the syslog socket at `path`.
    pub fn connect(path: impl AsRef<Path>, tag: impl Into<String>) -> Result<Self> {
        let path = path.as_ref();
        let socket = UnixDatagram::unbound().map_err(|e| {
            LoggerError::io_operation("creating syslog socket", "unbound UNIX datagram", e)
        })?;
        socket
            .connect(path)
            .map_err(|e| LoggerError::connect(path.display().to_string(), e))?;
        Ok(Self {
            socket,
            tag: tag.into(),
            pid: std::process::id(),
        })
    }

    fn frame(&self, message: &Message<'_>) -> io::Result<Vec<u8>> {
        let priority = FACILITY_USER | Severity::from(message.level) as u8;
        let mut buf = Vec::with_capacity(super::LINE_BUF_SIZE);
        write!(buf, "<{}>{}[{}]: ", priority, self.tag, self.pid)?;
        buf.push(message.level.glyph());
        buf.push(b' ');
        message.append_source(&mut buf);
        message.append_body(&mut buf);
        if message.has_extra() {
            buf.push(b'\n');
            message.write_extra(&mut buf)?;
        }
        Ok(buf)
    }
}

impl Sink for SyslogSink {
    fn render(&mut self, message: &Message<'_>) -> Result<()> {
        let datagram = self.frame(message)?;
        self.socket.send(&datagram)?;
        Ok(())
    }

    fn name(&self) -> &str {
        "syslog"
    }
}
