//! The [`Rule`] value type.

use super::{RuleName, RuleParam};
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

type Predicate = dyn Fn(Option<&str>) -> bool + Send + Sync;

/// A named, pure, synchronous predicate over one field value.
///
/// [`check`](Self::check) returns `true` when the value **fails** the rule.
/// `None` stands for an absent value; every rule is total over `None` and
/// over arbitrary strings and never panics.
///
/// Rules are cheap to clone: the predicate sits behind an `Arc`, so the same
/// rule can be shared by several forms.
///
/// # Examples
///
/// ```rust
/// use formwork_validator::foundation::{Rule, RuleParam};
///
/// let no_spaces = Rule::new("noSpaces", [], |value: Option<&str>| {
///     value.is_some_and(|v| v.contains(' '))
/// });
/// assert!(no_spaces.check(Some("a b")));
/// assert!(!no_spaces.check(None));
///
/// let digits = Rule::new("digits", [RuleParam::new("count", 4)], |value: Option<&str>| {
///     value.is_some_and(|v| v.chars().filter(char::is_ascii_digit).count() < 4)
/// });
/// assert_eq!(digits.param("count"), Some("4"));
/// ```
#[derive(Clone)]
pub struct Rule {
    name: RuleName,
    params: SmallVec<[RuleParam; 2]>,
    predicate: Arc<Predicate>,
}

impl Rule {
    /// Creates a rule from a name, its captured parameters and a predicate
    /// that returns `true` on failure.
    pub fn new<F>(
        name: impl Into<RuleName>,
        params: impl IntoIterator<Item = RuleParam>,
        predicate: F,
    ) -> Self
    where
        F: Fn(Option<&str>) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            params: params.into_iter().collect(),
            predicate: Arc::new(predicate),
        }
    }

    /// Returns the rule's name, the key used in validation reports.
    #[must_use]
    pub fn name(&self) -> &RuleName {
        &self.name
    }

    /// Returns the parameters captured at construction.
    #[must_use]
    pub fn params(&self) -> &[RuleParam] {
        &self.params
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.as_str())
    }

    /// Returns `true` when `value` fails this rule.
    #[inline]
    #[must_use]
    pub fn check(&self, value: Option<&str>) -> bool {
        (self.predicate)(value)
    }

    /// Returns `true` when `value` passes this rule.
    #[inline]
    #[must_use]
    pub fn passes(&self, value: Option<&str>) -> bool {
        !self.check(value)
    }

    /// Returns the same rule under a different report key.
    ///
    /// Needed when one field carries two instances of the same factory,
    /// e.g. two `matches` rules.
    #[must_use = "builder methods must be chained or built"]
    pub fn named(mut self, name: impl Into<RuleName>) -> Self {
        self.name = name.into();
        self
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("predicate", &"<function>")
            .finish()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name.as_str())?;
        if !self.params.is_empty() {
            f.write_str("(")?;
            for (i, param) in self.params.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{param}")?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

/// Creates a parameterless rule from a name and a failure predicate.
///
/// ```rust
/// use formwork_validator::prelude::*;
///
/// let lowercase = custom("lowercase", |value| {
///     value.is_some_and(|v| v.chars().any(char::is_uppercase))
/// });
/// assert!(lowercase.check(Some("Hello")));
/// assert!(!lowercase.check(Some("hello")));
/// ```
pub fn custom<F>(name: impl Into<RuleName>, predicate: F) -> Rule
where
    F: Fn(Option<&str>) -> bool + Send + Sync + 'static,
{
    Rule::new(name, [], predicate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn always_fails() -> Rule {
        custom("alwaysFails", |_| true)
    }

    #[test]
    fn check_and_passes_are_complementary() {
        let rule = always_fails();
        assert!(rule.check(None));
        assert!(!rule.passes(Some("x")));
    }

    #[test]
    fn named_changes_report_key_only() {
        let rule = always_fails().named("other");
        assert_eq!(rule.name().as_str(), "other");
        assert!(rule.check(Some("x")));
    }

    #[test]
    fn clone_shares_predicate() {
        let rule = always_fails();
        let copy = rule.clone();
        assert!(Arc::ptr_eq(&rule.predicate, &copy.predicate));
    }

    #[test]
    fn display_includes_params() {
        let rule = Rule::new("between", [RuleParam::new("min", 1), RuleParam::new("max", 3)], |_| false);
        assert_eq!(rule.to_string(), "between(min=1, max=3)");
        assert_eq!(always_fails().to_string(), "alwaysFails");
    }

    #[test]
    fn debug_hides_predicate() {
        let debug = format!("{:?}", always_fails());
        assert!(debug.contains("alwaysFails"));
        assert!(debug.contains("<function>"));
    }
}
