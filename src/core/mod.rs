//! Core logger types and traits

pub mod callsite;
pub mod config;
pub mod error;
pub mod log_level;
pub mod logger;
pub mod message;
pub mod sink;
pub mod timestamp;

#[cfg(test)]
pub(crate) mod test_support;

pub use callsite::{strip_file_prefix, UNKNOWN_FILE};
pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use log_level::Level;
pub use logger::{LogWriter, Logger, LoggerBuilder};
pub use message::{append_args, append_values, AppendFn, ExtraFn, Message};
pub use sink::Sink;
pub use timestamp::{append_timestamp, parse_timestamp, TIME_LAYOUT, TIME_WIDTH};
