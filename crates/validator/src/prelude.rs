//! Prelude module for convenient imports.
//!
//! ```rust
//! use formwork_validator::prelude::*;
//!
//! let password = [required(), min_length(6)];
//! assert!(password[1].check(Some("12345")));
//! ```

pub use crate::foundation::{Rule, RuleError, RuleName, RuleParam, custom};
pub use crate::spec::RuleSpec;
pub use crate::validators::{email, matches, max_length, min_length, required};
