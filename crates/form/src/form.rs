//! The form engine.

use indexmap::IndexMap;

use crate::descriptor::FormDescriptor;
use crate::error::{FormError, FormResult};
use crate::report::{FieldErrors, ValidationReport};
use crate::values::FieldSource;

/// A validated form descriptor plus the `validate` operation.
///
/// A `Form` only exists once its descriptor passed the structural checks,
/// and it never changes afterwards. It holds no other state: there is no
/// dirty/pristine tracking, no last report. `Form` is `Send + Sync`, so one
/// instance can serve concurrent callers behind an `Arc`.
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
///         .field("password", [required(), min_length(6)])
///         .build(),
/// )?;
///
/// let values = FormValues::new()
///     .with("email", "a@b.com")
///     .with("password", "secret1");
/// assert!(form.validate(&values).is_valid());
/// # Ok::<(), formwork_form::FormError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Form {
    descriptor: FormDescriptor,
}

impl Form {
    /// Takes ownership of `descriptor` after checking it.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Configuration`] when the descriptor is empty,
    /// when a field has no rules, or when a field has two rules with the same
    /// name.
    pub fn new(descriptor: FormDescriptor) -> FormResult<Self> {
        descriptor.check()?;
        tracing::debug!(
            fields = descriptor.len(),
            rules = descriptor.rule_count(),
            "form created"
        );
        Ok(Self { descriptor })
    }

    /// The descriptor this form was built from.
    #[must_use]
    pub fn descriptor(&self) -> &FormDescriptor {
        &self.descriptor
    }

    /// Runs every rule of every declared field against `values`.
    ///
    /// Missing fields are evaluated as absent. Fields present in `values` but
    /// not declared are ignored. No rule short-circuits another, and the call
    /// is pure: the same values always produce an equal report.
    pub fn validate<S>(&self, values: &S) -> ValidationReport
    where
        S: FieldSource + ?Sized,
    {
        let mut errors = IndexMap::with_capacity(self.descriptor.len());

        for (field, rules) in self.descriptor.iter() {
            let value = values.field_value(field);
            let value = value.as_deref();

            let mut flags = FieldErrors::with_capacity(rules.len());
            for rule in rules {
                let failed = rule.check(value);
                if failed {
                    tracing::trace!(field, rule = %rule.name(), "rule failed");
                }
                flags.insert(rule.name().clone(), failed);
            }
            errors.insert(field.to_string(), flags);
        }

        let report = ValidationReport::from_errors(errors);
        tracing::debug!(
            is_valid = report.is_valid(),
            failures = report.failure_count(),
            "form validated"
        );
        report
    }

    /// Validates a JSON value that must be an object of field values.
    ///
    /// `null` fields read as absent, strings as themselves, other values as
    /// their JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidInput`] when `values` is not an object.
    /// Per-field problems are never errors; they are flags in the report.
    pub fn validate_json(&self, values: &serde_json::Value) -> FormResult<ValidationReport> {
        let object = values.as_object().ok_or_else(|| {
            tracing::warn!("validate called with a non-object value");
            FormError::invalid_input(values)
        })?;
        Ok(self.validate(object))
    }
}

/// Creates a form from a descriptor. Same as [`Form::new`].
///
/// # Errors
///
/// See [`Form::new`].
pub fn create_form(descriptor: FormDescriptor) -> FormResult<Form> {
    Form::new(descriptor)
}
