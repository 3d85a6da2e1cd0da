pub mod forms;
pub mod login;
pub mod validate;

use std::process::ExitCode;

/// Result of a command that judged a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Valid (and, for `login`, authenticated).
    Accepted,
    /// Validation or authentication failed.
    Rejected,
}

impl Outcome {
    pub fn from_validity(is_valid: bool) -> Self {
        if is_valid { Self::Accepted } else { Self::Rejected }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Accepted => Self::SUCCESS,
            Outcome::Rejected => Self::from(1),
        }
    }
}
