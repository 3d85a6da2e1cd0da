//! Error handling for formwork-log

/// Result type for logger operations
pub type LogResult<T> = Result<T, LogError>;

/// Error type for logger operations
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LogError {
    /// The filter directive could not be parsed
    #[error("invalid filter `{filter}`: {reason}")]
    Filter {
        /// The rejected directive
        filter: String,
        /// Parser diagnostic
        reason: String,
    },

    /// Installing the global subscriber failed
    #[error("failed to install subscriber: {0}")]
    Init(String),
}
