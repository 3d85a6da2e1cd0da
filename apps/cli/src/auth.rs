//! Authentication collaborator for the `login` flow.

use crate::config::UserRecord;

/// Authentication failure with a message meant for the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AuthError {
    message: String,
}

impl AuthError {
    /// Creates an error carrying `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The user-facing message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Checks credentials of a submission that already passed validation.
pub trait Authenticator {
    /// Returns `Ok(())` when the credentials are accepted.
    fn authenticate(&self, email: &str, password: &str) -> Result<(), AuthError>;
}

/// Accepts the accounts listed in the configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticUsers {
    users: Vec<UserRecord>,
}

impl StaticUsers {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self { users }
    }
}

impl Authenticator for StaticUsers {
    fn authenticate(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let user = self
            .users
            .iter()
            .find(|user| user.email.eq_ignore_ascii_case(email))
            .ok_or_else(|| AuthError::new("No account found for this email"))?;

        if user.password != password {
            tracing::debug!(email, "password mismatch");
            return Err(AuthError::new("Wrong password"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> StaticUsers {
        StaticUsers::new(vec![UserRecord {
            email: "user@example.com".to_string(),
            password: "secret1".to_string(),
        }])
    }

    #[test]
    fn accepts_known_user() {
        assert_eq!(users().authenticate("user@example.com", "secret1"), Ok(()));
        assert_eq!(users().authenticate("User@Example.com", "secret1"), Ok(()));
    }

    #[test]
    fn rejects_unknown_user_and_wrong_password() {
        let unknown = users().authenticate("other@example.com", "secret1").unwrap_err();
        assert_eq!(unknown.message(), "No account found for this email");

        let wrong = users().authenticate("user@example.com", "secret2").unwrap_err();
        assert_eq!(wrong.to_string(), "Wrong password");
    }
}
