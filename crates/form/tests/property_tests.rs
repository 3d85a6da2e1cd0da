//! Property-based tests for the report invariants.

use formwork_form::prelude::*;
use proptest::collection::{hash_map, vec};
use proptest::prelude::*;

fn login() -> Form {
    Form::new(
        FormDescriptor::builder()
            .field("email", [required(), email()])
            .field("password", [required(), min_length(6), max_length(32)])
            .field("nickname", [max_length(12)])
            .build(),
    )
    .unwrap()
}

fn any_values() -> impl Strategy<Value = FormValues> {
    hash_map(
        prop_oneof![
            Just("email".to_string()),
            Just("password".to_string()),
            Just("nickname".to_string()),
            "[a-z]{1,8}",
        ],
        proptest::option::of("\\PC{0,40}"),
        0..6,
    )
    .prop_map(|map| map.into_iter().collect())
}

proptest! {
    // Same handle, same values: structurally equal reports.
    #[test]
    fn validate_is_idempotent(values in any_values()) {
        let form = login();
        prop_assert_eq!(form.validate(&values), form.validate(&values));
    }

    // Every declared field has exactly its configured rule names, in order.
    #[test]
    fn report_is_complete(values in any_values()) {
        let form = login();
        let report = form.validate(&values);

        let declared: Vec<&str> = form.descriptor().field_names().collect();
        let reported: Vec<&str> = report.errors().keys().map(String::as_str).collect();
        prop_assert_eq!(declared, reported);

        for (field, rules) in form.descriptor().iter() {
            let expected: Vec<&str> = rules.iter().map(|r| r.name().as_str()).collect();
            let actual: Vec<&str> = report.field(field).unwrap().keys().map(|r| r.as_str()).collect();
            prop_assert_eq!(expected, actual);
        }
    }

    // `is_valid` is exactly "no flag is set".
    #[test]
    fn validity_aggregates_flags(values in any_values()) {
        let report = login().validate(&values);
        let any_failed = report.errors().values().flat_map(|rules| rules.values()).any(|f| *f);
        prop_assert_eq!(report.is_valid(), !any_failed);
        prop_assert_eq!(report.is_valid(), report.failure_count() == 0);
    }

    // Each flag equals the rule evaluated on its own.
    #[test]
    fn flags_match_individual_rules(values in any_values()) {
        let form = login();
        let report = form.validate(&values);
        for (field, rules) in form.descriptor().iter() {
            let value = values.field_value(field);
            for rule in rules {
                prop_assert_eq!(
                    report.failed(field, rule.name().as_str()),
                    rule.check(value.as_deref())
                );
            }
        }
    }

    // Undeclared keys never change the outcome.
    #[test]
    fn extra_keys_are_ignored(
        values in any_values(),
        extra in vec(("x_[a-z]{1,6}", "\\PC{0,10}"), 0..4),
    ) {
        let form = login();
        let mut with_extra = values.clone();
        with_extra.extend(extra);
        prop_assert_eq!(form.validate(&values), form.validate(&with_extra));
    }
}
