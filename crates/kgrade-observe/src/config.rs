use std::io::IsTerminal;

use serde::{Deserialize, Serialize};

use crate::{error::LoggerResult, format::LoggerFormat, level::LoggerLevel};

/// Environment variable selecting [`LoggerFormat`].
pub const ENV_LOG_FORMAT: &str = "KGRADE_LOG_FORMAT";
/// Environment variable holding the [`LoggerLevel`] filter expression.
pub const ENV_LOG_LEVEL: &str = "KGRADE_LOG_LEVEL";

/// Logger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub format: LoggerFormat,
    pub level: LoggerLevel,
    /// Include module targets in each line.
    pub with_targets: bool,
    /// Color text output when stdout is a terminal.
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::default(),
            level: LoggerLevel::default(),
            with_targets: true,
            use_color: true,
        }
    }
}

impl LoggerConfig {
    /// Build from `KGRADE_LOG_FORMAT` / `KGRADE_LOG_LEVEL`, defaulting what is unset.
    pub fn from_env() -> LoggerResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`LoggerConfig::from_env`] over an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> LoggerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(format) = lookup(ENV_LOG_FORMAT).filter(|v| !v.trim().is_empty()) {
            cfg.format = format.parse()?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL).filter(|v| !v.trim().is_empty()) {
            cfg.level = level.parse()?;
        }
        Ok(cfg)
    }

    /// Color only when enabled and stdout is a terminal.
    pub fn should_use_color(&self) -> bool {
        self.use_color && std::io::stdout().is_terminal()
    }
}
