//! # formwork-form
//!
//! The form engine: holds a field -> rule-list descriptor and turns submitted
//! values into a [`ValidationReport`].
//!
//! ## Quick Start
//!
//! ```rust
//! use formwork_form::prelude::*;
//!
//! let form = Form::new(
//!     FormDescriptor::builder()
//!         .field("email", [required(), email()])
//!         .field("password", [required(), min_length(6)])
//!         .build(),
//! )?;
//!
//! let report = form.validate(&FormValues::new().with("email", "").with("password", "123"));
//! assert!(!report.is_valid());
//! assert!(report.failed("email", "required"));
//! assert!(!report.failed("email", "email"));
//! assert!(!report.failed("password", "required"));
//! assert!(report.failed("password", "minLength"));
//! # Ok::<(), FormError>(())
//! ```
//!
//! ## Error model
//!
//! - [`FormError::Configuration`]: malformed descriptor, raised by
//!   [`Form::new`]. Fix the descriptor; there is nothing to recover.
//! - [`FormError::InvalidInput`]: [`Form::validate_json`] got something
//!   other than an object.
//! - Failed rules are data: `true` flags in the report, never errors.

#![warn(missing_docs)]

mod descriptor;
mod error;
mod form;
pub mod prelude;
mod report;
mod values;

pub use descriptor::{FormDescriptor, FormDescriptorBuilder};
pub use error::{ConfigurationError, FormError, FormResult};
pub use form::{Form, create_form};
pub use report::{FieldErrors, ValidationReport};
pub use values::{FieldSource, FieldValue, FormValues};
