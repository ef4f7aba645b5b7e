//! Pluggable failure construction: custom failure types, backtrace
//! policy, and strategy sharing.

use precept::{BatchValidator, Config, ValidationError, Validator};
use pretty_assertions::assert_eq;

#[derive(Debug, PartialEq)]
struct FieldReport {
    fields: Vec<String>,
}

fn field_report(errors: Vec<ValidationError>) -> FieldReport {
    FieldReport {
        fields: errors
            .iter()
            .map(|e| e.field().unwrap_or("<anonymous>").to_string())
            .collect(),
    }
}

#[test]
fn batch_with_custom_failure_type() {
    let mut checks = BatchValidator::with_strategy(Config::new(), field_report);
    checks
        .not_null(&None::<u8>, "name")
        .is_positive(&-1, "age")
        .assert_true(false, "free-standing");

    let report = checks.validate().unwrap_err();
    assert_eq!(
        report,
        FieldReport {
            fields: vec![
                "name".to_string(),
                "age".to_string(),
                "<anonymous>".to_string(),
            ],
        },
    );
}

#[test]
fn fail_fast_with_custom_failure_type() {
    let mut validator = Validator::with_strategy(Config::new(), field_report);
    let report = validator
        .not_null(&Some(1), "id")
        .and_then(|v| v.is_positive(&-1, "age"))
        .unwrap_err();
    assert_eq!(report.fields, ["age"]);
}

#[test]
fn strategy_receives_composed_messages() {
    let mut checks = BatchValidator::with_strategy(Config::new(), |errors| {
        errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" | ")
    });
    checks.is_positive(&-1, "a").is_negative(&1, "b");
    assert_eq!(
        checks.validate().unwrap_err(),
        "'a' must be positive, but it was -1 | 'b' must be negative, but it was 1",
    );
}

#[test]
fn default_strategy_backtrace_policy() {
    let mut captured = BatchValidator::new(Config::new());
    captured.is_positive(&-1, "n");
    assert!(captured.validate().unwrap_err().backtrace().is_some());

    let mut suppressed = BatchValidator::new(Config::new().without_backtrace());
    suppressed.is_positive(&-1, "n");
    assert!(suppressed.validate().unwrap_err().backtrace().is_none());
}

#[test]
fn validate_can_raise_repeatedly_through_the_strategy() {
    let mut checks = BatchValidator::with_strategy(Config::new(), |errors| errors.len());
    checks.is_positive(&-1, "a");
    assert_eq!(checks.validate().unwrap_err(), 1);
    checks.is_positive(&-2, "b");
    assert_eq!(checks.validate().unwrap_err(), 2);
}

#[test]
fn engines_clone_with_their_strategy() {
    let mut source = BatchValidator::with_strategy(Config::new(), |errors| errors.len());
    source.is_positive(&-1, "a");

    let mut twin = source.clone();
    twin.is_positive(&-2, "b");

    assert_eq!(source.validate().unwrap_err(), 1);
    assert_eq!(twin.validate().unwrap_err(), 2);
}
