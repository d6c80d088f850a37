/// Error type for logger setup.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The level filter string could not be parsed.
    #[error("invalid log filter `{filter}`: {reason}")]
    Filter { filter: String, reason: String },

    /// A global subscriber could not be installed.
    #[error("failed to install logger: {0}")]
    Init(String),
}

/// Result type for logger operations.
pub type LogResult<T> = Result<T, LogError>;
