//! Fail-fast evaluation: the first failure raises, nothing later runs.

use precept::{ValidationFailure, require, require_not_null, require_true};
use pretty_assertions::assert_eq;

fn validate_signup(username: &str, age: i64) -> Result<(), ValidationFailure> {
    require()
        .not_blank(username, "username")?
        .has_length(username, 3, 30, "username")?
        .is_positive(&age, "age")?;
    Ok(())
}

#[test]
fn passing_chain() {
    assert!(validate_signup("alice", 30).is_ok());
}

#[test]
fn stops_at_the_first_failing_check() {
    let failure = validate_signup("ab", -1).unwrap_err();
    // The age check never ran; the raised failure holds exactly one error.
    assert_eq!(failure.errors().len(), 1);
    assert_eq!(
        failure.message(),
        "'username' must have length between 3 and 30, but it was 'ab'",
    );
}

#[test]
fn first_check_can_be_the_one_that_raises() {
    let failure = validate_signup("   ", 30).unwrap_err();
    assert_eq!(failure.message(), "'username' must not be blank");
}

#[test]
fn question_mark_converts_into_caller_error_types() {
    #[derive(Debug)]
    enum ApiError {
        BadRequest(String),
    }

    impl From<ValidationFailure> for ApiError {
        fn from(failure: ValidationFailure) -> Self {
            ApiError::BadRequest(failure.message().to_string())
        }
    }

    fn handler(limit: i32) -> Result<i32, ApiError> {
        require().in_range(&limit, 1, 100, "limit")?;
        Ok(limit)
    }

    assert!(handler(50).is_ok());
    let ApiError::BadRequest(message) = handler(0).unwrap_err();
    assert_eq!(message, "'limit' must be between 1 and 100, but it was 0");
}

#[test]
fn single_statement_chain_on_a_temporary() {
    let outcome: Result<(), ValidationFailure> = (|| {
        require()
            .not_null(&Some(5), "id")?
            .in_range(&5, 1, 10, "id")?;
        Ok(())
    })();
    assert!(outcome.is_ok());
}

#[test]
fn one_shot_helpers_raise_like_the_engine() {
    let failure = require_not_null(&None::<i32>, "token").unwrap_err();
    assert_eq!(failure.message(), "'token' must not be null");

    let failure = require_true(1 + 1 == 3, "arithmetic is broken").unwrap_err();
    assert_eq!(failure.message(), "arithmetic is broken");
}

#[test]
fn engine_state_survives_a_raise_for_reuse() {
    // Deliberately reusing a validator after catching its failure behaves
    // like any other engine: errors keep accumulating.
    let mut validator = require();
    let first = validator.is_positive(&-1, "a");
    assert!(first.is_err());
    let second = validator.is_positive(&-2, "b");
    let failure = second.unwrap_err();
    assert_eq!(failure.errors().len(), 2);
}
