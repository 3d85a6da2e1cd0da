//! Integration tests for the built-in rules through the public prelude.

use formwork_validator::prelude::*;
use formwork_validator::rule;
use rstest::rstest;

// ============================================================================
// REQUIRED
// ============================================================================

#[rstest]
#[case::absent(None, true)]
#[case::empty(Some(""), true)]
#[case::whitespace(Some("   "), true)]
#[case::tabs_and_newlines(Some("\t\n"), true)]
#[case::single_char(Some("a"), false)]
#[case::padded(Some("  a "), false)]
fn required_cases(#[case] value: Option<&str>, #[case] fails: bool) {
    assert_eq!(required().check(value), fails);
}

// ============================================================================
// EMAIL
// ============================================================================

#[rstest]
#[case::not_an_email(Some("not-an-email"), true)]
#[case::no_dot_in_domain(Some("a@b"), true)]
#[case::missing_local(Some("@example.com"), true)]
#[case::two_ats(Some("a@b@example.com"), true)]
#[case::trailing_dot(Some("user@example."), true)]
#[case::empty(Some(""), false)]
#[case::absent(None, false)]
#[case::plain(Some("user@example.com"), false)]
#[case::short(Some("a@b.com"), false)]
#[case::subdomain(Some("ops+alerts@eu.example.org"), false)]
fn email_cases(#[case] value: Option<&str>, #[case] fails: bool) {
    assert_eq!(email().check(value), fails);
}

// ============================================================================
// MIN LENGTH
// ============================================================================

#[rstest]
#[case::five_chars(Some("abcde"), true)]
#[case::absent(None, true)]
#[case::empty(Some(""), true)]
#[case::exactly_six(Some("abcdef"), false)]
#[case::longer(Some("secret1"), false)]
fn min_length_six_cases(#[case] value: Option<&str>, #[case] fails: bool) {
    assert_eq!(min_length(6).check(value), fails);
}

// ============================================================================
// COMPOSABILITY
// ============================================================================

#[test]
fn email_and_min_length_disagree_on_empty() {
    // Each rule owns one concern: `email` leaves emptiness to `required`,
    // `minLength` counts it as length 0.
    assert!(!email().check(Some("")));
    assert!(min_length(6).check(Some("")));
    assert!(required().check(Some("")));
}

#[test]
fn factories_are_pure() {
    let a = min_length(3);
    let b = min_length(3);
    for value in [None, Some(""), Some("ab"), Some("abc"), Some("abcd")] {
        assert_eq!(a.check(value), b.check(value));
        assert_eq!(a.check(value), a.check(value));
    }
}

// ============================================================================
// EXTENSIBILITY
// ============================================================================

rule! {
    /// Fails when the value is not all ASCII digits.
    fn digits() as "digits";
    check(value) { value.is_some_and(|v| !v.chars().all(|c| c.is_ascii_digit())) }
}

rule! {
    fn one_of(allowed: &'static [&'static str]) as "oneOf";
    params { "allowed" => allowed.join("|") }
    check(value) { value.is_some_and(|v| !allowed.iter().any(|a| *a == v)) }
}

#[test]
fn macro_declared_rules_follow_the_contract() {
    assert_eq!(digits().name().as_str(), "digits");
    assert!(digits().check(Some("12a")));
    assert!(!digits().check(Some("123")));
    assert!(!digits().check(None));

    let plan = one_of(&["free", "pro"]);
    assert_eq!(plan.param("allowed"), Some("free|pro"));
    assert!(plan.check(Some("enterprise")));
    assert!(!plan.check(Some("pro")));
}

#[test]
fn custom_rule_is_a_plain_value() {
    let rule = custom("noAdmin", |value| value.is_some_and(|v| v.eq_ignore_ascii_case("admin")));
    assert!(rule.check(Some("ADMIN")));
    assert!(!rule.check(Some("alice")));
    assert_eq!(rule.to_string(), "noAdmin");
}
