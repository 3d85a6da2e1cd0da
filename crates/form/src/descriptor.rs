//! Form descriptors: which rules run on which field.

use formwork_validator::{Rule, RuleSpec};
use indexmap::IndexMap;
use std::collections::HashSet;

use crate::error::{ConfigurationError, FormResult};

/// Field name -> ordered rule list, in declaration order.
///
/// A descriptor is plain data and may be malformed; it is checked when it is
/// moved into a [`Form`](crate::Form), after which it is never mutated.
///
/// # Examples
///
/// ```rust
/// use formwork_form::FormDescriptor;
/// use formwork_validator::prelude::*;
///
/// let descriptor = FormDescriptor::builder()
///     .field("email", [required(), email()])
///     .field("password", [required(), min_length(6)])
///     .build();
///
/// assert_eq!(descriptor.len(), 2);
/// assert_eq!(descriptor.field_names().collect::<Vec<_>>(), ["email", "password"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormDescriptor {
    fields: IndexMap<String, Vec<Rule>>,
}

impl FormDescriptor {
    /// Creates an empty descriptor builder.
    #[must_use]
    pub fn builder() -> FormDescriptorBuilder {
        FormDescriptorBuilder::default()
    }

    /// Builds a descriptor from declarative rule specs, e.g. loaded from a
    /// configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidRule`] when a pattern rule does
    /// not compile. Structural checks still happen in
    /// [`Form::new`](crate::Form::new).
    pub fn from_specs<'a, I, R>(specs: I) -> FormResult<Self>
    where
        I: IntoIterator<Item = (&'a str, R)>,
        R: IntoIterator<Item = &'a RuleSpec>,
    {
        let mut fields = IndexMap::new();
        for (field, rule_specs) in specs {
            let rules = RuleSpec::build_all(rule_specs).map_err(|source| {
                ConfigurationError::InvalidRule {
                    field: field.to_string(),
                    source,
                }
            })?;
            fields.entry(field.to_string()).or_insert_with(Vec::new).extend(rules);
        }
        Ok(Self { fields })
    }

    /// Number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` when no field is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the rules of one field.
    #[must_use]
    pub fn rules(&self, field: &str) -> Option<&[Rule]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    /// Declared field names, in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// `(field, rules)` pairs, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Rule])> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Total number of `(field, rule)` pairs.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.fields.values().map(Vec::len).sum()
    }

    /// Checks the structural invariants a [`Form`](crate::Form) relies on.
    pub(crate) fn check(&self) -> Result<(), ConfigurationError> {
        if self.fields.is_empty() {
            return Err(ConfigurationError::EmptyDescriptor);
        }
        for (field, rules) in &self.fields {
            if rules.is_empty() {
                return Err(ConfigurationError::EmptyRuleList {
                    field: field.clone(),
                });
            }
            let mut seen = HashSet::with_capacity(rules.len());
            for rule in rules {
                if !seen.insert(rule.name().as_str()) {
                    return Err(ConfigurationError::DuplicateRule {
                        field: field.clone(),
                        rule: rule.name().clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl<K, R> FromIterator<(K, R)> for FormDescriptor
where
    K: Into<String>,
    R: IntoIterator<Item = Rule>,
{
    fn from_iter<T: IntoIterator<Item = (K, R)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(FormDescriptor::builder(), |builder, (field, rules)| {
                builder.field(field, rules)
            })
            .build()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builder for [`FormDescriptor`].
#[derive(Debug, Default)]
pub struct FormDescriptorBuilder {
    fields: IndexMap<String, Vec<Rule>>,
}

impl FormDescriptorBuilder {
    /// Declares a field with its rules.
    ///
    /// Declaring the same field again appends to its rule list, so a repeated
    /// rule is still caught as a duplicate when the form is constructed.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, name: impl Into<String>, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.fields.entry(name.into()).or_default().extend(rules);
        self
    }

    /// Finishes the descriptor.
    #[must_use]
    pub fn build(self) -> FormDescriptor {
        FormDescriptor {
            fields: self.fields,
        }
    }
}
