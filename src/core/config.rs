//! Declarative logger configuration

use super::error::Result;
use super::log_level::Level;
use serde::{Deserialize, Serialize};

/// Serializable logger settings, applied with
/// [`Logger::apply_config`](crate::Logger::apply_config).
///
/// # Example
///
/// ```
/// use rust_slog::{Level, LoggerConfig};
///
/// let config = LoggerConfig::from_json(
///     r#"{ "level": "debug", "output": "stderr", "file_prefix": "/build/" }"#,
/// )
/// .unwrap();
/// assert_eq!(config.level, Level::Debug);
/// assert_eq!(config.output, "stderr");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub level: Level,
    /// Output name, see [`Output::from_config`](crate::Output::from_config)
    pub output: String,
    /// Output argument: file path for `file`, tag for `syslog` and `logd`
    pub target: String,
    pub file_prefix: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Level::default(),
            output: "discard".to_string(),
            target: String::new(),
            file_prefix: None,
        }
    }
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
