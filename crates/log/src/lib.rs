//! # billform-log
//!
//! Logging bootstrap for billform binaries over `tracing-subscriber`.
//!
//! ```no_run
//! let _guard = billform_log::auto_init()?;
//! tracing::info!(fields = 3, "validating form");
//! # Ok::<(), billform_log::LogError>(())
//! ```

#![forbid(unsafe_code)]

mod builder;
mod config;
mod error;

pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, DisplayConfig, Format, Level};
pub use error::{LogError, LogResult};

/// Detect and initialize the best logging configuration
///
/// Environment variables win when set; otherwise debug builds get the
/// development preset and release builds the production preset. If a global
/// subscriber is already installed the call is a no-op.
pub fn auto_init() -> LogResult<LoggerGuard> {
    if tracing::dispatcher::has_been_set() {
        return Ok(LoggerGuard::noop());
    }

    if std::env::var("BILLFORM_LOG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        init_with(Config::from_env())
    } else if cfg!(debug_assertions) {
        init_with(Config::development())
    } else {
        init_with(Config::production())
    }
}

/// Initialize with default configuration
pub fn init() -> LogResult<LoggerGuard> {
    init_with(Config::default())
}

/// Initialize with custom configuration
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}
