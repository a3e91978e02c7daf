use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::error::LoggerError;

/// Validated `EnvFilter` expression such as `"info"` or `"kgrade_api=debug,info"`.
///
/// Validation happens once at construction, so [`LoggerLevel::to_env_filter`] cannot fail.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LoggerLevel(String);

impl LoggerLevel {
    /// ```
    /// use kgrade_observe::LoggerLevel;
    ///
    /// assert_eq!(LoggerLevel::new("warn").unwrap().as_str(), "warn");
    /// assert!(LoggerLevel::new("kgrade=loud").is_err());
    /// ```
    pub fn new(s: impl Into<String>) -> Result<Self, LoggerError> {
        Self::try_from(s.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(self.as_str()).expect("LoggerLevel is validated on construction")
    }
}

impl Default for LoggerLevel {
    fn default() -> Self {
        Self("info".to_string())
    }
}

impl FromStr for LoggerLevel {
    type Err = LoggerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

impl TryFrom<String> for LoggerLevel {
    type Error = LoggerError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match EnvFilter::try_new(&s) {
            Ok(_) => Ok(LoggerLevel(s)),
            Err(e) => Err(LoggerError::InvalidLevel(format!("{}: {}", s, e))),
        }
    }
}

impl From<LoggerLevel> for String {
    fn from(l: LoggerLevel) -> Self {
        l.0
    }
}

#[cfg(test)]
mod tests {
    use super::LoggerLevel;

    #[test]
    fn accepts_directives() {
        for lvl in ["info", "warn", "trace", "kgrade_api=debug,info", "kube=warn,info"] {
            assert!(lvl.parse::<LoggerLevel>().is_ok(), "{lvl}");
        }
    }

    #[test]
    fn rejects_bad_directives() {
        for lvl in ["kgrade_api=verbose", "other=trace,another=wat"] {
            assert!(lvl.parse::<LoggerLevel>().is_err(), "{lvl}");
        }
    }

    #[test]
    fn default_is_info() {
        let lvl = LoggerLevel::default();
        assert_eq!(lvl.as_str(), "info");
        let _ = lvl.to_env_filter();
    }

    #[test]
    fn deserializes_from_plain_string() {
        let lvl: LoggerLevel = serde_json::from_str(r#""debug""#).unwrap();
        assert_eq!(lvl.as_str(), "debug");
        assert!(serde_json::from_str::<LoggerLevel>(r#""x=nope""#).is_err());
    }
}
