//! Declarative rule specifications.
//!
//! [`RuleSpec`] is the serializable form of a built-in rule, used to load
//! form descriptors from configuration files:
//!
//! ```toml
//! email = ["required", "email"]
//! password = ["required", { minLength = 6 }]
//! ```
//!
//! Unit rules are written as bare strings, parameterised rules as single-key
//! tables. Unknown rule names are rejected at deserialization time.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::foundation::{Rule, RuleResult};
use crate::validators;

/// A built-in rule, described by name and parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleSpec {
    /// [`required`](validators::required)
    Required,
    /// [`email`](validators::email)
    Email,
    /// [`min_length`](validators::min_length)
    MinLength(usize),
    /// [`max_length`](validators::max_length)
    MaxLength(usize),
    /// [`matches`](validators::matches)
    Pattern(String),
}

impl RuleSpec {
    /// Builds the rule this spec describes.
    ///
    /// # Errors
    ///
    /// Fails only for [`RuleSpec::Pattern`] with a pattern that does not
    /// compile.
    pub fn build(&self) -> RuleResult<Rule> {
        Ok(match self {
            Self::Required => validators::required(),
            Self::Email => validators::email(),
            Self::MinLength(min) => validators::min_length(*min),
            Self::MaxLength(max) => validators::max_length(*max),
            Self::Pattern(pattern) => validators::matches(pattern)?,
        })
    }

    /// The report key of the rule this spec builds.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Email => "email",
            Self::MinLength(_) => "minLength",
            Self::MaxLength(_) => "maxLength",
            Self::Pattern(_) => "pattern",
        }
    }

    /// Builds every spec in order, stopping at the first bad pattern.
    pub fn build_all<'a>(specs: impl IntoIterator<Item = &'a RuleSpec>) -> RuleResult<Vec<Rule>> {
        specs.into_iter().map(RuleSpec::build).collect()
    }
}

impl fmt::Display for RuleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required | Self::Email => f.write_str(self.name()),
            Self::MinLength(n) | Self::MaxLength(n) => write!(f, "{}({n})", self.name()),
            Self::Pattern(p) => write!(f, "{}({p:?})", self.name()),
        }
    }
}
