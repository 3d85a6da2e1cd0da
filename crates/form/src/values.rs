//! Submitted field values.
//!
//! The engine reads values through the [`FieldSource`] trait, so callers can
//! hand it whatever mapping they already hold: a [`FormValues`], a
//! `HashMap<String, String>`, or a JSON object.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::error::{FormError, FormResult};

// ============================================================================
// FIELD SOURCE
// ============================================================================

/// A mapping from field name to raw submitted value.
///
/// Returning `None` means the field is absent. Rules treat absence as a
/// regular input (it is what `required` flags), so a missing key is never an
/// error.
pub trait FieldSource {
    /// Returns the raw value of `field`, or `None` when absent.
    fn field_value(&self, field: &str) -> Option<Cow<'_, str>>;
}

impl<T: FieldSource + ?Sized> FieldSource for &T {
    fn field_value(&self, field: &str) -> Option<Cow<'_, str>> {
        (**self).field_value(field)
    }
}

impl<S: BuildHasher> FieldSource for HashMap<String, String, S> {
    fn field_value(&self, field: &str) -> Option<Cow<'_, str>> {
        self.get(field).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl<S: BuildHasher> FieldSource for HashMap<&str, &str, S> {
    fn field_value(&self, field: &str) -> Option<Cow<'_, str>> {
        self.get(field).map(|v| Cow::Borrowed(*v))
    }
}

impl FieldSource for BTreeMap<String, String> {
    fn field_value(&self, field: &str) -> Option<Cow<'_, str>> {
        self.get(field).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl FieldSource for serde_json::Map<String, serde_json::Value> {
    fn field_value(&self, field: &str) -> Option<Cow<'_, str>> {
        self.get(field).and_then(json_text)
    }
}

/// Textual form of one JSON field value.
///
/// `null` is absent, strings are taken as-is, other scalars use their JSON
/// spelling (`42`, `true`) and containers their compact JSON text.
fn json_text(value: &serde_json::Value) -> Option<Cow<'_, str>> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        other => Some(Cow::Owned(other.to_string())),
    }
}

// ============================================================================
// FIELD VALUE
// ============================================================================

/// One submitted value.
///
/// Deserializes from any JSON value with the same rules as
/// [`FormValues::from_json`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged, from = "serde_json::Value")]
pub enum FieldValue {
    /// No value was submitted.
    #[default]
    Absent,
    /// Raw text as typed by the user.
    Text(String),
}

impl FieldValue {
    /// Returns the text, or `None` when absent.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Absent => None,
            Self::Text(s) => Some(s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        json_text(&value).map(Cow::into_owned).into()
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

// ============================================================================
// FORM VALUES
// ============================================================================

/// The "current values" of a form, owned by the hosting layer.
///
/// # Examples
///
/// ```rust
/// use formwork_form::{FieldSource, FormValues};
///
/// let mut values = FormValues::new().with("email", "a@b.com");
/// values.set("password", "secret1");
/// values.clear("email");
///
/// assert_eq!(values.field_value("password").as_deref(), Some("secret1"));
/// assert_eq!(values.field_value("email"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues {
    values: HashMap<String, FieldValue>,
}

impl FormValues {
    /// Creates an empty value set; every field reads as absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field value and returns `self`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(field, value);
        self
    }

    /// Sets a field value, e.g. from an input change event.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.values.insert(field.into(), value.into());
    }

    /// Marks a field as absent.
    pub fn clear(&mut self, field: &str) {
        self.values.remove(field);
    }

    /// Returns the value of a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    /// Number of fields with an entry (absent or not).
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when no field has an entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Converts a JSON object into form values.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidInput`] when `value` is not an object.
    pub fn from_json(value: &serde_json::Value) -> FormResult<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| FormError::invalid_input(value))?;
        Ok(object
            .iter()
            .map(|(field, v)| (field.clone(), FieldValue::from(json_text(v).map(Cow::into_owned))))
            .collect())
    }
}

impl FieldSource for FormValues {
    fn field_value(&self, field: &str) -> Option<Cow<'_, str>> {
        self.values
            .get(field)
            .and_then(FieldValue::as_str)
            .map(Cow::Borrowed)
    }
}

impl<K, V> FromIterator<(K, V)> for FormValues
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K, V> Extend<(K, V)> for FormValues
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}
