//! Validation reports.

use formwork_validator::RuleName;
use indexmap::IndexMap;
use serde::Serialize;

/// Rule name -> `true` when that rule failed, in rule declaration order.
pub type FieldErrors = IndexMap<RuleName, bool>;

/// The outcome of one [`Form::validate`](crate::Form::validate) call.
///
/// `errors` holds an entry for **every** declared field and, within it, for
/// every configured rule, whether or not the rule failed. A rendering layer
/// can therefore read `errors.email.required` without existence checks.
///
/// Reports are fresh values: nothing is merged or mutated across calls.
/// They serialize as `{"isValid": bool, "errors": {field: {rule: bool}}}`.
///
/// # Examples
///
/// ```rust
/// use formwork_form::{Form, FormDescriptor, FormValues};
/// use formwork_validator::prelude::*;
///
/// let form = Form::new(
///     FormDescriptor::builder()
///         .field("email", [required(), email()])
///         .build(),
/// )?;
///
/// let report = form.validate(&FormValues::new().with("email", ""));
/// assert!(!report.is_valid());
/// assert!(report.failed("email", "required"));
/// assert!(!report.failed("email", "email"));
/// # Ok::<(), formwork_form::FormError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    is_valid: bool,
    errors: IndexMap<String, FieldErrors>,
}

impl ValidationReport {
    /// Builds a report, deriving `is_valid` from the flags.
    pub(crate) fn from_errors(errors: IndexMap<String, FieldErrors>) -> Self {
        let is_valid = errors.values().flat_map(IndexMap::values).all(|failed| !failed);
        Self { is_valid, errors }
    }

    /// `true` iff no rule failed on any field.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// The full `field -> rule -> failed` map.
    #[must_use]
    pub fn errors(&self) -> &IndexMap<String, FieldErrors> {
        &self.errors
    }

    /// The flags of one field, or `None` for an undeclared field.
    #[must_use]
    pub fn field(&self, field: &str) -> Option<&FieldErrors> {
        self.errors.get(field)
    }

    /// Whether `rule` failed on `field`.
    ///
    /// Undeclared fields and rules read as not failed.
    #[must_use]
    pub fn failed(&self, field: &str, rule: &str) -> bool {
        self.errors
            .get(field)
            .and_then(|rules| rules.get(rule))
            .copied()
            .unwrap_or(false)
    }

    /// Whether any rule failed on `field`.
    #[must_use]
    pub fn field_failed(&self, field: &str) -> bool {
        self.errors
            .get(field)
            .is_some_and(|rules| rules.values().any(|failed| *failed))
    }

    /// Names of the rules that failed on `field`, in declaration order.
    pub fn failed_rules<'a>(&'a self, field: &str) -> impl Iterator<Item = &'a RuleName> + 'a {
        self.errors
            .get(field)
            .into_iter()
            .flat_map(|rules| rules.iter().filter(|(_, failed)| **failed).map(|(name, _)| name))
    }

    /// The first failed rule on `field`: the hint a UI shows when it shows
    /// only one.
    #[must_use]
    pub fn first_failure(&self, field: &str) -> Option<&RuleName> {
        self.failed_rules(field).next()
    }

    /// `(field, rule)` pairs that failed, in declaration order.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &RuleName)> {
        self.errors.iter().flat_map(|(field, rules)| {
            rules
                .iter()
                .filter(|(_, failed)| **failed)
                .map(move |(name, _)| (field.as_str(), name))
        })
    }

    /// Number of failed `(field, rule)` pairs.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }
}
