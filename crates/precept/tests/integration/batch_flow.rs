//! Batch evaluation: accumulation, inspection, composition.

use precept::{ValidationError, check};
use pretty_assertions::assert_eq;

#[test]
fn collects_all_failures_before_raising() {
    let mut checks = check();
    checks
        .not_null(&None::<String>, "name")
        .is_positive(&-5, "age");

    assert!(!checks.is_valid());
    assert_eq!(
        checks.errors(),
        &[
            ValidationError::new("must not be null").with_field("name"),
            ValidationError::new("must be positive, but it was -5").with_field("age"),
        ],
    );

    let failure = checks.validate().unwrap_err();
    assert_eq!(failure.errors(), checks.errors());
}

#[test]
fn ten_failures_arrive_in_call_order() {
    let mut checks = check();
    for i in 0..10 {
        checks.assert_true_with(false, move || format!("failure {i}"));
    }
    assert_eq!(checks.errors().len(), 10);
    for (i, error) in checks.errors().iter().enumerate() {
        assert_eq!(error.message(), format!("failure {i}"));
    }
}

#[test]
fn clean_batch_validates_silently() {
    let mut checks = check();
    checks
        .not_null(&Some(1), "id")
        .has_length("valid", 1, 10, "name")
        .when(false, |c| {
            c.not_blank("", "never");
        });
    assert!(checks.is_valid());
    assert!(checks.validate().is_ok());
}

#[test]
fn when_gates_a_whole_block_of_rules() {
    let is_admin = true;
    let mut checks = check();
    checks.when(is_admin, |c| {
        c.not_blank("", "audit_reason").is_positive(&0, "clearance");
    });
    assert_eq!(checks.errors().len(), 2);
    assert_eq!(checks.errors()[0].field(), Some("audit_reason"));
    assert_eq!(checks.errors()[1].field(), Some("clearance"));
}

#[test]
fn include_merges_sub_validations() {
    let mut address = check();
    address
        .not_blank("", "street")
        .matches("999999", r"\d{5}", "zip");

    let mut user = check();
    user.is_positive(&-1, "age");
    user.include(&address);

    assert_eq!(user.errors().len(), 3);
    assert_eq!(user.errors()[0].field(), Some("age"));
    assert_eq!(user.errors()[1].field(), Some("street"));
    assert_eq!(user.errors()[2].field(), Some("zip"));

    // include() copies; the sub-validator can still be finalized alone.
    assert_eq!(address.errors().len(), 2);
    assert!(address.validate().is_err());
}

#[test]
fn include_self_snapshot_via_clone() {
    let mut checks = check();
    checks.is_positive(&-1, "a");
    let snapshot = checks.clone();
    checks.include(&snapshot);
    assert_eq!(checks.errors().len(), 2);
}

#[test]
fn mixed_assert_and_shape_checks_share_one_list() {
    let mut checks = check();
    checks
        .assert_true(false, "manual invariant broken")
        .in_range(&99, 1, 10, "count")
        .not_empty(&Vec::<u8>::new(), "items");

    let failure = checks.validate().unwrap_err();
    assert_eq!(
        failure.message(),
        "manual invariant broken; \
         'count' must be between 1 and 10, but it was 99; \
         'items' must not be null or empty",
    );
}
