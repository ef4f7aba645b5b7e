//! Value redaction: all-or-nothing per engine, and shapes that never
//! display values regardless of configuration.

use precept::safe;
use pretty_assertions::assert_eq;

#[test]
fn redacting_engine_never_echoes_values() {
    let secret = "hunter2-correct-horse";
    let mut checks = safe::check();
    checks
        .has_length(secret, 100, 200, "password")
        .matches(secret, r"\d{4}", "pin")
        .in_range(&-42, 1, 10, "balance")
        .is_null(&Some(secret), "leftover")
        .one_of(&"zz", &["aa", "bb"], "code");

    for error in checks.errors() {
        assert!(!error.message().contains("but it was"), "{error}");
        assert!(!error.message().contains(secret), "{error}");
        assert!(!error.message().contains("-42"), "{error}");
    }

    let messages: Vec<String> = checks.errors().iter().map(ToString::to_string).collect();
    assert_eq!(
        messages,
        [
            "'password' must have length between 100 and 200",
            r"'pin' must match pattern '\d{4}'",
            "'balance' must be between 1 and 10",
            "'leftover' must be null",
            "'code' must be one of [aa, bb]",
        ],
    );
}

#[test]
fn emptiness_and_blankness_never_display_even_when_values_are_shown() {
    let mut checks = precept::check();
    checks
        .not_empty(&Vec::<&str>::new(), "tags")
        .not_blank("   ", "comment")
        .null_or_not_blank(&Some("  "), "note");

    for error in checks.errors() {
        assert!(!error.message().contains("but it was"), "{error}");
    }
}

#[test]
fn redaction_applies_to_custom_message_engines_too() {
    // Custom messages are the caller's own words; redaction governs only
    // the engine-composed value suffix.
    let mut checks = safe::check();
    checks.in_range_msg(&7, 1, 5, || "seven is right out".to_string());
    assert_eq!(checks.errors()[0].message(), "seven is right out");
}

#[test]
fn templates_still_carry_bounds_under_redaction() {
    // Bounds are rule arguments, not input data; redaction keeps them.
    let mut checks = safe::check();
    checks.in_range(&0, 18, 130, "age");
    assert_eq!(checks.errors()[0].message(), "must be between 18 and 130");
}
