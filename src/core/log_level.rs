//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log message.
///
/// Lower values are more severe. A message is emitted when its level is
/// less than or equal to the logger's threshold, so `Silence` as a threshold
/// disables everything except `Silence`-level (temporary) messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(try_from = "String", into = "String")]
#[repr(u8)]
pub enum Level {
    /// Disables all regular messages as a threshold. The glyph is '-'.
    Silence = 0,
    /// Serious problems that are likely to cause the program to exit.
    Fatal = 1,
    /// Issues that shouldn't be ignored.
    Error = 2,
    /// Issues that may be ignored.
    Warning = 3,
    /// Important status changes. The glyph is 'I'.
    Notice = 4,
    /// Normal work reports.
    #[default]
    Info = 5,
    /// Extra information for debugging.
    Debug = 6,
    /// Details for inspecting specific issues.
    Verbose = 7,
    /// More details that may significantly impact performance. The glyph is 'V'.
    VeryVerbose = 8,
}

const LEVEL_CHARS: [u8; 9] = *b"-FEWIIDVV";

impl Level {
    pub const ALL: [Level; 9] = [
        Level::Silence,
        Level::Fatal,
        Level::Error,
        Level::Warning,
        Level::Notice,
        Level::Info,
        Level::Debug,
        Level::Verbose,
        Level::VeryVerbose,
    ];

    /// Returns true if a message at this level passes `threshold`.
    #[inline]
    pub fn enabled_at(self, threshold: Level) -> bool {
        self <= threshold
    }

    /// One-character glyph written at the start of every rendered line.
    #[inline]
    pub fn glyph(self) -> u8 {
        LEVEL_CHARS[self as usize]
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            Level::Silence => "SILENCE",
            Level::Fatal => "FATAL",
            Level::Error => "ERROR",
            Level::Warning => "WARNING",
            Level::Notice => "NOTICE",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Verbose => "VERBOSE",
            Level::VeryVerbose => "VERYVERBOSE",
        }
    }

    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Level::Silence => White,
            Level::Fatal => BrightRed,
            Level::Error => Red,
            Level::Warning => Yellow,
            Level::Notice => Green,
            Level::Info => BrightWhite,
            Level::Debug => Blue,
            Level::Verbose => Cyan,
            Level::VeryVerbose => BrightBlack,
        }
    }

    /// Decode a stored level. Out-of-range values clamp to `VeryVerbose`.
    #[inline]
    pub(crate) fn from_u8_clamped(value: u8) -> Level {
        Level::ALL[usize::from(value).min(Level::ALL.len() - 1)]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl TryFrom<i64> for Level {
    type Error = LoggerError;

    fn try_from(value: i64) -> Result<Self, LoggerError> {
        usize::try_from(value)
            .ok()
            .and_then(|index| Level::ALL.get(index).copied())
            .ok_or_else(|| LoggerError::InvalidLevel(value.to_string()))
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, LoggerError> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            return Level::try_from(value);
        }
        match trimmed.to_uppercase().as_str() {
            "SILENCE" => Ok(Level::Silence),
            "FATAL" => Ok(Level::Fatal),
            "ERROR" => Ok(Level::Error),
            "WARN" | "WARNING" => Ok(Level::Warning),
            "NOTICE" => Ok(Level::Notice),
            "INFO" => Ok(Level::Info),
            "DEBUG" => Ok(Level::Debug),
            "VERBOSE" => Ok(Level::Verbose),
            "VERYVERBOSE" | "VERY_VERBOSE" => Ok(Level::VeryVerbose),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}

impl TryFrom<String> for Level {
    type Error = LoggerError;

    fn try_from(value: String) -> Result<Self, LoggerError> {
        value.parse()
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.to_str().to_lowercase()
    }
}
