//! User notifications (the "snackbar" of a terminal).

use std::fmt;
use std::io::Write;

/// How a notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The action succeeded.
    Success,
    /// The action failed.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Success => "success",
            Self::Error => "error",
        })
    }
}

/// One message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

/// Receives notifications.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Prints notifications on stdout, one per line.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        tracing::debug!(severity = %notification.severity, "notify");
        // A closed stdout is not worth failing the command over.
        let _ = writeln!(std::io::stdout().lock(), "{notification}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_severity_and_message() {
        assert_eq!(
            Notification::error("Form validation failed").to_string(),
            "[error] Form validation failed"
        );
        assert_eq!(
            Notification::success("Access granted").to_string(),
            "[success] Access granted"
        );
    }
}
