//! Core rule types
//!
//! - **[`Rule`]**: a named predicate that flags one validation concern
//! - **[`RuleName`] / [`RuleParam`]**: report key and captured parameters
//! - **[`RuleError`]**: failure to *construct* a rule
//!
//! # Contract
//!
//! Every rule, built-in or custom, follows the same contract:
//!
//! 1. `check(value)` returns `true` when the value fails.
//! 2. It is total: `None` (absent) and any string are valid inputs.
//! 3. It is pure: same parameters and same value, same answer. No I/O, no
//!    shared mutable state.
//! 4. It owns one concern. `email` does not reject empty input, because
//!    emptiness is what `required` is for.

mod error;
mod name;
mod rule;

pub use error::RuleError;
pub use name::{RuleName, RuleParam};
pub use rule::{Rule, custom};

/// A rule construction result.
pub type RuleResult<T> = Result<T, RuleError>;
