//! # formwork-validator
//!
//! The rule library of the formwork form validation engine.
//!
//! A [`Rule`](foundation::Rule) is a named, pure predicate over a single
//! field value. It answers one question: does this value *fail* the rule?
//! Rules never produce messages; the report built by `formwork-form` only
//! carries `field -> rule name -> failed` flags and the rendering layer picks
//! the text.
//!
//! ## Quick Start
//!
//! ```rust
//! use formwork_validator::prelude::*;
//!
//! let rules = [required(), email()];
//! assert!(rules[0].check(None));            // absent fails `required`
//! assert!(!rules[1].check(Some("")));       // empty passes `email`
//! assert!(rules[1].check(Some("a@b")));     // no dot in the domain
//! ```
//!
//! ## Built-in Rules
//!
//! | Factory | Report key | Fails when |
//! |---------|------------|------------|
//! | [`required`](validators::required) | `required` | absent or blank after trimming |
//! | [`email`](validators::email) | `email` | non-empty and not `local@domain.tld` |
//! | [`min_length`](validators::min_length) | `minLength` | shorter than `n` (absent is 0) |
//! | [`max_length`](validators::max_length) | `maxLength` | longer than `n` |
//! | [`matches`](validators::matches) | `pattern` | non-empty and the regex does not match |
//!
//! New rules are new factories. Use the [`rule!`] macro or
//! [`Rule::new`](foundation::Rule::new); nothing else needs to change.

#![warn(missing_docs)]

pub mod foundation;
mod macros;
pub mod prelude;
pub mod spec;
pub mod validators;

pub use foundation::{Rule, RuleError, RuleName, RuleParam};
pub use spec::RuleSpec;
