//! Logging setup shared by the server binary and tests.

mod config;
mod error;
mod format;
mod init;
mod level;
mod timer;

pub use config::{ENV_LOG_FORMAT, ENV_LOG_LEVEL, LoggerConfig};
pub use error::{LoggerError, LoggerResult};
pub use format::LoggerFormat;
pub use level::LoggerLevel;
pub use timer::UtcRfc3339;

/// Installs the global tracing subscriber described by `cfg`.
///
/// Once installed, all `tracing` macros (`info!`, `warn!`, ...) go through it.
/// A second call fails with [`LoggerError::AlreadyInitialized`].
///
/// ```rust
/// use kgrade_observe::{LoggerConfig, init_logger};
///
/// init_logger(&LoggerConfig::default()).expect("logger");
/// tracing::info!("logger initialized");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<()> {
    match cfg.format {
        LoggerFormat::Text => init::text(cfg),
        LoggerFormat::Json => init::json(cfg),
        LoggerFormat::Journald => init::journald(cfg),
    }
}
