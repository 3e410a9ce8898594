//! Sink implementations and the output selector used to configure a logger

pub mod discard;
#[cfg(all(unix, feature = "logd"))]
pub mod logd;
#[cfg(unix)]
pub mod syslog;
pub mod text;

pub use discard::DiscardSink;
#[cfg(all(unix, feature = "logd"))]
pub use logd::LogdSink;
#[cfg(unix)]
pub use syslog::SyslogSink;
pub use text::{TerminalSink, TextSink, LINE_BUF_SIZE};

pub use crate::core::Sink;

use crate::core::{LoggerError, Result};
use std::fmt;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Which sink a logger should render to.
///
/// Passed to [`Logger::set_output`](crate::Logger::set_output); the sink is
/// built before the swap, so a failing output leaves the previous one active.
pub enum Output {
    Discard,
    /// Plain text lines to a byte stream
    Text(Box<dyn Write + Send>),
    /// ANSI-colored lines to a byte stream
    Terminal(Box<dyn Write + Send>),
    /// Local syslog daemon. `path` overrides the well-known socket locations.
    Syslog { tag: String, path: Option<PathBuf> },
    /// Android log daemon. `path` overrides `/dev/socket/logdw`.
    #[cfg(feature = "logd")]
    Logd { tag: String, path: Option<PathBuf> },
}

impl Output {
    pub fn text(out: impl Write + Send + 'static) -> Self {
        Output::Text(Box::new(out))
    }

    pub fn terminal(out: impl Write + Send + 'static) -> Self {
        Output::Terminal(Box::new(out))
    }

    pub fn syslog(tag: impl Into<String>) -> Self {
        Output::Syslog {
            tag: tag.into(),
            path: None,
        }
    }

    #[cfg(feature = "logd")]
    pub fn logd(tag: impl Into<String>) -> Self {
        Output::Logd {
            tag: tag.into(),
            path: None,
        }
    }

    /// Plain text appended to the file at `path`.
    pub fn file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(LoggerError::config("output", "empty file path"));
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation("opening log file", path.display().to_string(), e)
            })?;
        Ok(Output::text(BufWriter::new(file)))
    }

    /// Select an output by name, the way configuration files spell it.
    ///
    /// | name       | argument        |
    /// |------------|-----------------|
    /// | `discard`  | ignored         |
    /// | `stdout`   | ignored         |
    /// | `stderr`   | ignored         |
    /// | `terminal` | ignored         |
    /// | `file`     | path            |
    /// | `syslog`   | tag             |
    /// | `logd`     | tag             |
    pub fn from_config(name: &str, arg: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "discard" | "null" | "" => Ok(Output::Discard),
            "stdout" => Ok(Output::text(std::io::stdout())),
            "stderr" => Ok(Output::text(std::io::stderr())),
            "terminal" | "term" => Ok(Output::terminal(std::io::stdout())),
            "file" => Output::file(arg),
            "syslog" => Ok(Output::syslog(arg)),
            #[cfg(feature = "logd")]
            "logd" => Ok(Output::logd(arg)),
            #[cfg(not(feature = "logd"))]
            "logd" => Err(LoggerError::unsupported(
                "logd (rebuild with the `logd` feature)",
            )),
            other => Err(LoggerError::config(
                "output",
                format!("unknown output '{}'", other),
            )),
        }
    }

    /// Build the sink, connecting to its transport if it has one.
    pub fn into_sink(self) -> Result<Box<dyn Sink>> {
        match self {
            Output::Discard => Ok(Box::new(DiscardSink)),
            Output::Text(out) => Ok(Box::new(TextSink::from_boxed(out))),
            Output::Terminal(out) => Ok(Box::new(TerminalSink::from_boxed(out))),
            Output::Syslog { tag, path } => syslog_sink(tag, path),
            #[cfg(feature = "logd")]
            Output::Logd { tag, path } => logd_sink(tag, path),
        }
    }
}

#[cfg(unix)]
fn syslog_sink(tag: String, path: Option<PathBuf>) -> Result<Box<dyn Sink>> {
    let sink = match path {
        Some(path) => SyslogSink::connect(path, tag)?,
        None => SyslogSink::new(tag)?,
    };
    Ok(Box::new(sink))
}

#[cfg(not(unix))]
fn syslog_sink(_tag: String, _path: Option<PathBuf>) -> Result<Box<dyn Sink>> {
    Err(LoggerError::unsupported("syslog is not available on this platform"))
}

#[cfg(all(unix, feature = "logd"))]
fn logd_sink(tag: String, path: Option<PathBuf>) -> Result<Box<dyn Sink>> {
    let sink = match path {
        Some(path) => LogdSink::connect(path, tag)?,
        None => LogdSink::new(tag)?,
    };
    Ok(Box::new(sink))
}

#[cfg(all(not(unix), feature = "logd"))]
fn logd_sink(_tag: String, _path: Option<PathBuf>) -> Result<Box<dyn Sink>> {
    Err(LoggerError::unsupported("logd is not available on this platform"))
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Discard => f.write_str("Discard"),
            Output::Text(_) => f.write_str("Text(..)"),
            Output::Terminal(_) => f.write_str("Terminal(..)"),
            Output::Syslog { tag, path } => f
                .debug_struct("Syslog")
                .field("tag", tag)
                .field("path", path)
                .finish(),
            #[cfg(feature = "logd")]
            Output::Logd { tag, path } => f
                .debug_struct("Logd")
                .field("tag", tag)
                .field("path", path)
                .finish(),
        }
    }
}
