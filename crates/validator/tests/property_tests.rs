//! Property-based tests for billform-validator.

use billform_validator::prelude::*;
use proptest::prelude::*;
use serde_json::{Value, json};

fn any_rule() -> impl Strategy<Value = Rule> {
    proptest::sample::select(Rule::ALL.to_vec())
}

fn any_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        ".{0,20}".prop_map(Value::String),
        proptest::collection::vec(".{0,5}", 0..3).prop_map(|v| json!(v)),
    ]
}

fn full_params() -> RuleParams {
    RuleParams::new()
        .with_field_name("secret")
        .with_min_number(0.0)
        .with_max_number(100.0)
        .with_min_character(3)
}

// ============================================================================
// IDEMPOTENCY: check(x) == check(x)
// ============================================================================

proptest! {
    #[test]
    fn check_is_idempotent(
        rules in proptest::collection::vec(any_rule(), 0..6),
        value in any_value(),
    ) {
        let set = RuleSet::compile(&rules, &full_params()).unwrap();
        prop_assert_eq!(set.check(&value), set.check(&value));
    }

    #[test]
    fn email_idempotent(s in ".*") {
        let v = email();
        prop_assert_eq!(v.validate(&*s).is_ok(), v.validate(&*s).is_ok());
    }
}

// ============================================================================
// SHORT-CIRCUIT: the reported rule is the first one that fails on its own
// ============================================================================

proptest! {
    #[test]
    fn reports_first_failing_rule(
        rules in proptest::collection::vec(any_rule(), 1..6),
        value in any_value(),
    ) {
        let params = full_params();
        let set = RuleSet::compile(&rules, &params).unwrap();

        let expected = rules.iter().find(|rule| {
            RuleSet::compile(&[**rule], &params)
                .unwrap()
                .check(&value)
                .is_err()
        });

        match (set.check(&value), expected) {
            (Ok(()), None) => {}
            (Err(err), Some(rule)) => prop_assert_eq!(err.code.as_ref(), rule.as_str()),
            (got, want) => prop_assert!(false, "got {:?}, expected {:?}", got, want),
        }
    }

    #[test]
    fn empty_rule_list_never_fails(value in any_value()) {
        prop_assert_eq!(validate(&value, &[] as &[&str], &RuleParams::new()), Ok(None));
    }
}

// ============================================================================
// NUMERIC BOUNDS: inclusive
// ============================================================================

proptest! {
    #[test]
    fn bounds_are_inclusive(n in -1000i64..1000) {
        let set = RuleSet::new().min_number(0.0).max_number(100.0);
        let ok = set.check(&json!(n.to_string())).is_ok();
        prop_assert_eq!(ok, (0..=100).contains(&n));
    }
}
