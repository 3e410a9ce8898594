//! # Rust Slog
//!
//! A leveled, allocation-conscious logger with pluggable sinks.
//!
//! ## Features
//!
//! - **Lazy**: message bodies are formatted only after the level check passes
//! - **Pluggable sinks**: discard, plain text, ANSI terminal, syslog and the
//!   Android log daemon (`logd` feature)
//! - **Thread safe**: messages never interleave; the sink can be swapped at runtime
//! - **Instrumentation helpers**: numbered text blocks, hex dumps and stack traces
//!
//! Every text line has the fixed layout
//! `<glyph> <timestamp> <file>:<line> <message>`, for example
//! `I 2024-01-02T15:04:05-07:00 src/main.rs:12 listening on 0.0.0.0:80`.

pub mod core;
pub mod global;
#[macro_use]
mod macros;
pub mod render;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Level, LogWriter, Logger, LoggerBuilder, LoggerConfig, LoggerError, Message, Result,
        Sink,
    };
    pub use crate::global::default_logger;
    pub use crate::sinks::Output;
}

pub use crate::core::{
    Level, LogWriter, Logger, LoggerBuilder, LoggerConfig, LoggerError, Message, Result, Sink,
    TIME_LAYOUT,
};
pub use global::*;
pub use sinks::{DiscardSink, Output, TerminalSink, TextSink};
