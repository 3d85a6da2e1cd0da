//! String content rules
//!
//! Both rules here only look at non-empty input. An absent or empty value
//! passes: whether the field may be empty is decided by `required`.

use std::sync::LazyLock;

use crate::foundation::{Rule, RuleError, RuleParam, RuleResult};

// Single address: local-part `@` one or more dot-separated labels, with at
// least one `.` in the domain.
static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
    .expect("email pattern is valid")
});

// ============================================================================
// EMAIL
// ============================================================================

crate::rule! {
    /// Fails when the value is non-empty and is not a single email address.
    ///
    /// Passes on empty and absent input.
    ///
    /// ```rust
    /// use formwork_validator::validators::email;
    ///
    /// let rule = email();
    /// assert!(rule.check(Some("not-an-email")));
    /// assert!(rule.check(Some("a@b")));
    /// assert!(!rule.check(Some("")));
    /// assert!(!rule.check(Some("user@example.com")));
    /// ```
    pub fn email() as "email";
    check(value) {
        match value {
            Some(v) if !v.is_empty() => !EMAIL_REGEX.is_match(v),
            _ => false,
        }
    }
}

// ============================================================================
// PATTERN
// ============================================================================

/// Fails when the value is non-empty and does not match `pattern`.
///
/// The report key is `pattern`; use [`Rule::named`] to attach two patterns
/// to one field.
///
/// # Errors
///
/// Returns [`RuleError::InvalidPattern`] when `pattern` does not compile.
///
/// ```rust
/// use formwork_validator::validators::matches;
///
/// let zip = matches(r"^\d{5}$").unwrap();
/// assert!(zip.check(Some("1234")));
/// assert!(!zip.check(Some("12345")));
/// assert!(!zip.check(None));
/// ```
pub fn matches(pattern: &str) -> RuleResult<Rule> {
    let regex = regex::Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;
    Ok(Rule::new(
        "pattern",
        [RuleParam::new("pattern", pattern)],
        move |value: Option<&str>| match value {
            Some(v) if !v.is_empty() => !regex.is_match(v),
            _ => false,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_rejects_malformed() {
        let rule = email();
        assert!(rule.check(Some("not-an-email")));
        assert!(rule.check(Some("a@b")));
        assert!(rule.check(Some("@example.com")));
        assert!(rule.check(Some("user@")));
        assert!(rule.check(Some("a@b@c.com")));
        assert!(rule.check(Some("user @example.com")));
    }

    #[test]
    fn email_accepts_addresses() {
        let rule = email();
        assert!(!rule.check(Some("user@example.com")));
        assert!(!rule.check(Some("a@b.com")));
        assert!(!rule.check(Some("first.last+tag@mail.example.co.uk")));
    }

    #[test]
    fn email_ignores_empty() {
        assert!(!email().check(None));
        assert!(!email().check(Some("")));
    }

    #[test]
    fn matches_compiles_pattern() {
        let rule = matches(r"^[a-z]+$").unwrap();
        assert_eq!(rule.name().as_str(), "pattern");
        assert_eq!(rule.param("pattern"), Some("^[a-z]+$"));
        assert!(rule.check(Some("ABC")));
        assert!(!rule.check(Some("abc")));
        assert!(!rule.check(Some("")));
    }

    #[test]
    fn matches_rejects_invalid_pattern() {
        let err = matches("(").unwrap_err();
        assert!(matches!(err, RuleError::InvalidPattern { ref pattern, .. } if pattern == "("));
    }
}
