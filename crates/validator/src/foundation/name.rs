//! Rule identifiers and captured parameters.
//!
//! Both types use `Cow<'static, str>` so the built-in rules, whose names and
//! parameter keys are compile-time constants, never allocate for them.

use serde::{Deserialize, Serialize};
use std::borrow::{Borrow, Cow};
use std::fmt;

// ============================================================================
// RULE NAME
// ============================================================================

/// The identifier of a rule.
///
/// Unique within the rule list of one field; it is the key under which the
/// rule's outcome appears in a validation report (`errors.email.required`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleName(Cow<'static, str>);

impl RuleName {
    /// Creates a rule name from a static string without allocating.
    #[must_use]
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Creates a rule name.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RuleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Hash of `Cow<str>` equals the hash of the borrowed `str`, which keeps map
// lookups by `&str` consistent.
impl Borrow<str> for RuleName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for RuleName {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for RuleName {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl PartialEq<str> for RuleName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RuleName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// ============================================================================
// RULE PARAM
// ============================================================================

/// A value captured when a rule was constructed, e.g. `min = 6`.
///
/// Parameters are informational: the predicate already closes over them.
/// They exist so hosts can interpolate them into messages
/// ("at least {min} characters") without knowing how the rule was built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleParam {
    /// Parameter key.
    pub key: Cow<'static, str>,
    /// Parameter value, rendered as text.
    pub value: String,
}

impl RuleParam {
    /// Creates a parameter from any displayable value.
    pub fn new(key: impl Into<Cow<'static, str>>, value: impl fmt::Display) -> Self {
        Self {
            key: key.into(),
            value: value.to_string(),
        }
    }
}

impl fmt::Display for RuleParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn rule_name_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(RuleName::from_static("minLength"), true);
        assert_eq!(map.get("minLength"), Some(&true));
        assert_eq!(map.get("maxLength"), None);
    }

    #[test]
    fn owned_and_static_names_are_equal() {
        assert_eq!(
            RuleName::from_static("email"),
            RuleName::from(String::from("email"))
        );
        assert_eq!(RuleName::new("email"), "email");
    }

    #[test]
    fn rule_name_serializes_as_plain_string() {
        let json = serde_json::to_string(&RuleName::from_static("required")).unwrap();
        assert_eq!(json, "\"required\"");
    }

    #[test]
    fn param_display() {
        assert_eq!(RuleParam::new("min", 6).to_string(), "min=6");
    }
}
