//! The failure-text contract: formats here are load-bearing for
//! compatibility and must not drift.

use precept::{ValidationError, check};
use pretty_assertions::assert_eq;

#[test]
fn field_prefix_and_join_separator() {
    let mut checks = check();
    checks
        .not_null(&None::<u8>, "first")
        .assert_true(false, "free-standing message");
    let failure = checks.validate().unwrap_err();
    assert_eq!(
        failure.message(),
        "'first' must not be null; free-standing message",
    );
}

#[test]
fn default_templates_per_shape() {
    let mut checks = check();
    checks
        .not_null(&None::<u8>, "a")
        .is_null(&Some(1), "b")
        .not_empty("", "c")
        .not_blank(" ", "d")
        .in_range(&0, 1, 9, "e")
        .has_length("x", 2, 4, "f")
        .min(&0, 1, "g")
        .max(&2, 1, "h")
        .is_positive(&0, "i")
        .is_negative(&0, "j")
        .is_non_negative(&-1, "k")
        .is_non_positive(&1, "l")
        .matches("zz", r"\d+", "m")
        .has_size(&vec![1], 2, 3, "n")
        .one_of(&7, &[1, 2], "o");

    let messages: Vec<String> = checks.errors().iter().map(ToString::to_string).collect();
    assert_eq!(
        messages,
        [
            "'a' must not be null",
            "'b' must be null, but it was 1",
            "'c' must not be null or empty",
            "'d' must not be blank",
            "'e' must be between 1 and 9, but it was 0",
            "'f' must have length between 2 and 4, but it was 'x'",
            "'g' must be at least 1, but it was 0",
            "'h' must be at most 1, but it was 2",
            "'i' must be positive, but it was 0",
            "'j' must be negative, but it was 0",
            "'k' must be non-negative, but it was -1",
            "'l' must be non-positive, but it was 1",
            r"'m' must match pattern '\d+', but it was 'zz'",
            "'n' must have size between 2 and 3, but it was [1]",
            "'o' must be one of [1, 2], but it was 7",
        ],
    );
}

#[test]
fn null_tolerant_templates() {
    let mut checks = check();
    checks
        .null_or_in_range(&Some(0), 1, 9, "a")
        .null_or_min(&Some(0), 1, "b")
        .null_or_max(&Some(2), 1, "c")
        .null_or_positive(&Some(0), "d")
        .null_or_not_empty(&Some(String::new()), "e")
        .null_or_not_blank(&Some("  "), "f")
        .null_or_has_length(&Some("x"), 2, 4, "g")
        .null_or_matches(&Some("zz"), r"\d+", "h")
        .null_or_has_size(&Some(vec![1]), 2, 3, "i")
        .null_or_one_of(&Some(7), &[1, 2], "j");

    let messages: Vec<String> = checks.errors().iter().map(ToString::to_string).collect();
    assert_eq!(
        messages,
        [
            "'a' must be null or between 1 and 9, but it was 0",
            "'b' must be null or at least 1, but it was 0",
            "'c' must be null or at most 1, but it was 2",
            "'d' must be null or positive, but it was 0",
            "'e' must be null or not empty",
            "'f' must be null or not blank",
            "'g' must be null or have length between 2 and 4, but it was 'x'",
            r"'h' must be null or match pattern '\d+', but it was 'zz'",
            "'i' must be null or have size between 2 and 3, but it was [1]",
            "'j' must be null or one of [1, 2], but it was 7",
        ],
    );
}

#[test]
fn unnamed_forms_use_the_parameter_sentinel() {
    let mut checks = check();
    checks
        .not_null_unnamed(&None::<u8>)
        .is_positive_unnamed(&-5)
        .has_length_unnamed("ab", 3, 9);

    let messages: Vec<String> = checks.errors().iter().map(ToString::to_string).collect();
    assert_eq!(
        messages,
        [
            "parameter must not be null",
            "parameter must be positive, but it was -5",
            "parameter must have length between 3 and 9, but it was 'ab'",
        ],
    );
}

#[test]
fn string_values_are_quoted_scalars_are_bare() {
    let mut checks = check();
    checks.has_length("raw", 5, 9, "text").in_range(&2.5, 0.0, 1.0, "ratio");
    assert_eq!(
        checks.errors()[0].message(),
        "must have length between 5 and 9, but it was 'raw'",
    );
    assert_eq!(
        checks.errors()[1].message(),
        "must be between 0 and 1, but it was 2.5",
    );
}

#[test]
fn rendered_values_truncate_at_one_hundred_chars() {
    let long = "a".repeat(150);
    let mut checks = check();
    checks.has_length(&long, 1, 10, "blob");

    let expected = format!(
        "must have length between 1 and 10, but it was '{}...'",
        "a".repeat(97),
    );
    assert_eq!(checks.errors()[0].message(), expected);
}

#[test]
fn values_at_the_threshold_are_untouched() {
    let exact = "b".repeat(100);
    let mut checks = check();
    checks.has_length(&exact, 1, 10, "blob");
    assert!(checks.errors()[0].message().ends_with(&format!("'{exact}'")));
}

#[test]
fn lazy_messages_never_run_on_success() {
    let mut checks = check();
    checks
        .not_null_msg(&Some(1), || panic!("evaluated on success"))
        .in_range_msg(&5, 1, 10, || panic!("evaluated on success"));
    assert!(checks.is_valid());
}

#[test]
fn custom_messages_replace_template_and_suffix() {
    let mut checks = check();
    checks.in_range_msg(&42, 1, 10, || "answer out of bounds".to_string());
    assert_eq!(
        checks.errors(),
        &[ValidationError::new("answer out of bounds")],
    );
}

#[test]
fn join_matches_failure_message() {
    let mut checks = check();
    checks.is_positive(&-1, "x").is_negative(&1, "y");
    let joined = ValidationError::join(checks.errors());
    let failure = checks.validate().unwrap_err();
    assert_eq!(joined, failure.message());
    assert_eq!(failure.to_string(), failure.message());
}
