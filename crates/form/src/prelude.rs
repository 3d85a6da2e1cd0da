//! Prelude module for convenient imports.
//!
//! Brings in the engine types and the whole rule library, which is what a
//! form definition site needs.

pub use crate::{
    ConfigurationError, FieldSource, FieldValue, Form, FormDescriptor, FormError, FormValues,
    ValidationReport, create_form,
};

pub use formwork_validator::prelude::*;
