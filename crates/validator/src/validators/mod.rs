//! Built-in rules
//!
//! # Categories
//!
//! - **Presence**: [`required`]
//! - **Length**: [`min_length`], [`max_length`]
//! - **Content**: [`email`], [`matches`]
//!
//! Rules are designed to be combined on one field, each flagging its own
//! concern:
//!
//! ```rust
//! use formwork_validator::prelude::*;
//!
//! let password = [required(), min_length(6)];
//! let failed: Vec<_> = password
//!     .iter()
//!     .filter(|rule| rule.check(Some("")))
//!     .map(|rule| rule.name().as_str())
//!     .collect();
//! assert_eq!(failed, ["required", "minLength"]);
//! ```

pub mod content;
pub mod length;
pub mod presence;

pub use content::{email, matches};
pub use length::{max_length, min_length};
pub use presence::required;
