//! Errors raised while *building* rules.
//!
//! A rule that fails on a value is not an error: it is an ordinary `true`
//! from [`Rule::check`](super::Rule::check). The only thing that can go wrong
//! in this crate is constructing a rule from bad parameters.

/// Error returned by fallible rule factories.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum RuleError {
    /// The regular expression given to [`matches`](crate::validators::matches)
    /// does not compile.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// The regex compiler's diagnostic.
        #[source]
        source: regex::Error,
    },
}

impl RuleError {
    /// Stable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidPattern { .. } => "invalid_pattern",
        }
    }
}
