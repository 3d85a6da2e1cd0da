//! Error types for form construction and validation calls.
//!
//! Two things can go wrong, and both are caller bugs:
//!
//! - the descriptor handed to [`Form::new`](crate::Form::new) is malformed
//!   ([`ConfigurationError`]);
//! - the values handed to [`Form::validate_json`](crate::Form::validate_json)
//!   are not a mapping at all ([`FormError::InvalidInput`]).
//!
//! A rule failing on a field value is *not* an error. It is a `true` flag in
//! the [`ValidationReport`](crate::ValidationReport).

use formwork_validator::{RuleError, RuleName};

/// Result alias for form operations.
pub type FormResult<T> = Result<T, FormError>;

// ============================================================================
// FORM ERROR
// ============================================================================

/// Error returned by the form engine.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum FormError {
    /// The form descriptor is malformed. Fatal to construction.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// The values passed to `validate_json` are not a mapping.
    #[error("invalid input: expected an object of field values, found {found}")]
    InvalidInput {
        /// JSON kind that was received instead (`null`, `array`, ...).
        found: &'static str,
    },
}

impl FormError {
    /// Returns `true` for descriptor problems.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Returns `true` when the values argument had the wrong shape.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// Stable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "configuration_error",
            Self::InvalidInput { .. } => "invalid_input",
        }
    }

    pub(crate) fn invalid_input(value: &serde_json::Value) -> Self {
        Self::InvalidInput {
            found: json_kind(value),
        }
    }
}

// ============================================================================
// CONFIGURATION ERROR
// ============================================================================

/// A malformed form descriptor.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigurationError {
    /// The descriptor declares no fields.
    #[error("form descriptor declares no fields")]
    EmptyDescriptor,

    /// A field has an empty rule list.
    #[error("field `{field}` has no rules")]
    EmptyRuleList {
        /// The offending field.
        field: String,
    },

    /// Two rules on one field share a name, so the report key is ambiguous.
    #[error("field `{field}` has more than one rule named `{rule}`")]
    DuplicateRule {
        /// The offending field.
        field: String,
        /// The repeated rule name.
        rule: RuleName,
    },

    /// A rule in a declarative descriptor could not be built.
    #[error("field `{field}`: {source}")]
    InvalidRule {
        /// The field the rule was declared on.
        field: String,
        /// Why the rule could not be built.
        #[source]
        source: RuleError,
    },
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn configuration_error_display() {
        let error = FormError::from(ConfigurationError::EmptyRuleList {
            field: "email".to_string(),
        });
        assert_eq!(error.to_string(), "configuration error: field `email` has no rules");
        assert!(error.is_configuration());
        assert_eq!(error.code(), "configuration_error");
    }

    #[test]
    fn duplicate_rule_display() {
        let error = ConfigurationError::DuplicateRule {
            field: "password".to_string(),
            rule: RuleName::from_static("required"),
        };
        assert_eq!(
            error.to_string(),
            "field `password` has more than one rule named `required`"
        );
    }

    #[test]
    fn invalid_input_names_json_kind() {
        let error = FormError::invalid_input(&json!([1, 2]));
        assert!(error.is_invalid_input());
        assert_eq!(error.code(), "invalid_input");
        assert_eq!(
            error.to_string(),
            "invalid input: expected an object of field values, found array"
        );
        assert!(matches!(
            FormError::invalid_input(&json!(null)),
            FormError::InvalidInput { found: "null" }
        ));
    }
}
