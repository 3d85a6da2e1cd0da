//! Macros for declaring rule factories with minimal boilerplate.
//!
//! # Examples
//!
//! ```rust
//! use formwork_validator::rule;
//!
//! // Parameterless rule
//! rule! {
//!     /// Fails when the value contains whitespace.
//!     pub fn no_whitespace() as "noWhitespace";
//!     check(value) { value.is_some_and(|v| v.chars().any(char::is_whitespace)) }
//! }
//!
//! // Rule with captured parameters
//! rule! {
//!     /// Fails when the value does not start with `prefix`.
//!     pub fn starts_with(prefix: &'static str) as "startsWith";
//!     params { "prefix" => prefix }
//!     check(value) { !value.unwrap_or_default().starts_with(prefix) }
//! }
//!
//! assert!(no_whitespace().check(Some("a b")));
//! assert!(starts_with("+").check(Some("44")));
//! assert_eq!(starts_with("+").param("prefix"), Some("+"));
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Declares a rule factory: a function returning a
/// [`Rule`](crate::foundation::Rule) with a fixed report key.
///
/// `#[must_use]` is always applied. Factory arguments are moved into the
/// predicate, so they must be `Send + Sync + 'static`; arguments listed in
/// `params` must also be `Display` and are captured before the move
/// (use `Copy` values or clone inside the body).
///
/// # Variants
///
/// **Parameterless**:
/// ```rust,ignore
/// rule! {
///     pub fn required() as "required";
///     check(value) { value.is_none_or(|v| v.trim().is_empty()) }
/// }
/// ```
///
/// **With parameters**:
/// ```rust,ignore
/// rule! {
///     pub fn min_length(min: usize) as "minLength";
///     params { "min" => min }
///     check(value) { char_len(value) < min }
/// }
/// ```
#[macro_export]
macro_rules! rule {
    // ── Variant 1: parameters reported ───────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis fn $factory:ident($($arg:ident: $aty:ty),* $(,)?) as $name:literal;
        params { $($pkey:literal => $pval:expr),+ $(,)? }
        check($value:ident) $body:block
    ) => {
        $(#[$meta])*
        #[must_use]
        $vis fn $factory($($arg: $aty),*) -> $crate::foundation::Rule {
            let params = [$($crate::foundation::RuleParam::new($pkey, &$pval)),+];
            $crate::foundation::Rule::new(
                $name,
                params,
                move |$value: ::core::option::Option<&str>| -> bool { $body },
            )
        }
    };

    // ── Variant 2: parameterless ─────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis fn $factory:ident($($arg:ident: $aty:ty),* $(,)?) as $name:literal;
        check($value:ident) $body:block
    ) => {
        $(#[$meta])*
        #[must_use]
        $vis fn $factory($($arg: $aty),*) -> $crate::foundation::Rule {
            $crate::foundation::Rule::new(
                $name,
                [],
                move |$value: ::core::option::Option<&str>| -> bool { $body },
            )
        }
    };
}
