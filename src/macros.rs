//! Logging macros for ergonomic log message formatting.
//!
//! Every macro takes either an explicit logger followed by `format!`-style
//! arguments, or just the format arguments to log through the default logger.
//! Arguments are only formatted when the level is enabled, and the reported
//! source location is the macro invocation.
//!
//! # Examples
//!
//! ```
//! use rust_slog::prelude::*;
//! use rust_slog::info;
//!
//! let logger = Logger::new();
//!
//! // Basic logging
//! info!(logger, "Server started").unwrap();
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port).unwrap();
//!
//! // Through the default logger
//! info!("User {} logged in", 42).unwrap();
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_slog::prelude::*;
/// # let logger = Logger::new();
/// use rust_slog::log;
/// log!(logger, Level::Info, "Simple message").unwrap();
/// log!(Level::Error, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::default_logger().logf($level, format_args!($fmt $(, $arg)*))
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.logf($level, format_args!($($arg)+))
    };
}

macro_rules! level_macro {
    ($d:tt $name:ident, $method:ident, $level:ident) => {
        #[doc = concat!("Log a `", stringify!($level), "` message.")]
        ///
        /// Takes `(logger, fmt, args...)` or `(fmt, args...)` for the default logger.
        #[macro_export]
        macro_rules! $name {
            ($d fmt:literal $d(, $d arg:expr)* $d(,)?) => {
                $d crate::default_logger().$method(format_args!($d fmt $d(, $d arg)*))
            };
            ($d logger:expr, $d($d arg:tt)+) => {
                $d logger.$method(format_args!($d($d arg)+))
            };
        }
    };
}

level_macro!($ fatal, fatalf, Fatal);
level_macro!($ error, errorf, Error);
level_macro!($ warning, warningf, Warning);
level_macro!($ notice, noticef, Notice);
level_macro!($ info, infof, Info);
level_macro!($ debug, debugf, Debug);
level_macro!($ verbose, verbosef, Verbose);
level_macro!($ very_verbose, very_verbosef, VeryVerbose);
