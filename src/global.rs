//! Process-wide default logger
//!
//! The default logger is created on first use, starts at [`Level::Info`] with
//! the discard sink, and lives until the process exits. Configure it once at
//! startup through [`default_logger`]; the free functions below forward to it
//! so call sites need no logger reference.

use crate::core::{ExtraFn, Level, Logger, Result};
use std::fmt;
use std::sync::LazyLock;

static DEFAULT_LOGGER: LazyLock<Logger> = LazyLock::new(Logger::new);

/// The process-wide logger.
pub fn default_logger() -> &'static Logger {
    &DEFAULT_LOGGER
}

/// Returns true if the default logger emits messages at `level`.
pub fn check_level(level: Level) -> bool {
    DEFAULT_LOGGER.check_level(level)
}

/// [`Logger::output`] on the default logger. `calldepth` counts from the
/// caller of this function.
#[track_caller]
#[inline(never)]
pub fn output(
    calldepth: usize,
    level: Level,
    extra: Option<ExtraFn<'_>>,
    values: &[&dyn fmt::Display],
) -> Result<()> {
    DEFAULT_LOGGER.output(calldepth + 1, level, extra, values)
}

/// [`Logger::outputf`] on the default logger.
#[track_caller]
#[inline(never)]
pub fn outputf(
    calldepth: usize,
    level: Level,
    extra: Option<ExtraFn<'_>>,
    args: fmt::Arguments<'_>,
) -> Result<()> {
    DEFAULT_LOGGER.outputf(calldepth + 1, level, extra, args)
}

macro_rules! forward_levels {
    ($($print:ident, $printf:ident;)*) => {
        $(
            #[doc = concat!("[`Logger::", stringify!($print), "`] on the default logger.")]
            #[track_caller]
            pub fn $print(values: &[&dyn fmt::Display]) -> Result<()> {
                DEFAULT_LOGGER.$print(values)
            }

            #[doc = concat!("[`Logger::", stringify!($printf), "`] on the default logger.")]
            #[track_caller]
            pub fn $printf(args: fmt::Arguments<'_>) -> Result<()> {
                DEFAULT_LOGGER.$printf(args)
            }
        )*
    };
}

forward_levels! {
    fatal, fatalf;
    error, errorf;
    warning, warningf;
    notice, noticef;
    info, infof;
    debug, debugf;
    verbose, verbosef;
    very_verbose, very_verbosef;
    temporary, temporaryf;
}

#[track_caller]
pub fn log(level: Level, values: &[&dyn fmt::Display]) -> Result<()> {
    DEFAULT_LOGGER.log(level, values)
}

#[track_caller]
pub fn logf(level: Level, args: fmt::Arguments<'_>) -> Result<()> {
    DEFAULT_LOGGER.logf(level, args)
}

#[track_caller]
pub fn text(level: Level, txt: &str, values: &[&dyn fmt::Display]) -> Result<()> {
    DEFAULT_LOGGER.text(level, txt, values)
}

#[track_caller]
pub fn textf(level: Level, txt: &str, args: fmt::Arguments<'_>) -> Result<()> {
    DEFAULT_LOGGER.textf(level, txt, args)
}

#[track_caller]
pub fn binary(level: Level, bin: &[u8], values: &[&dyn fmt::Display]) -> Result<()> {
    DEFAULT_LOGGER.binary(level, bin, values)
}

#[track_caller]
pub fn binaryf(level: Level, bin: &[u8], args: fmt::Arguments<'_>) -> Result<()> {
    DEFAULT_LOGGER.binaryf(level, bin, args)
}

#[track_caller]
#[inline(never)]
pub fn stack(level: Level, calldepth: usize, values: &[&dyn fmt::Display]) -> Result<()> {
    DEFAULT_LOGGER.stack(level, calldepth + 1, values)
}

#[track_caller]
#[inline(never)]
pub fn stackf(level: Level, calldepth: usize, args: fmt::Arguments<'_>) -> Result<()> {
    DEFAULT_LOGGER.stackf(level, calldepth + 1, args)
}

#[track_caller]
pub fn check(cond: bool, values: &[&dyn fmt::Display]) {
    DEFAULT_LOGGER.check(cond, values)
}

#[track_caller]
pub fn checkf(cond: bool, args: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.checkf(cond, args)
}
