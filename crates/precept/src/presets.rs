//! Named engine presets and one-shot helpers
//!
//! The engine itself only needs *some* factory to hand out a configured
//! instance; these are the stock combinations. Values shown / redacted is
//! all-or-nothing per engine, never per individual check.

use std::borrow::Cow;

use crate::batch::BatchValidator;
use crate::core::engine::Config;
use crate::core::error::ValidationFailure;
use crate::validator::Validator;

/// Creates a batch validator: collects every failure until
/// [`validate`](BatchValidator::validate). Values are included in
/// messages; the failure captures a backtrace.
#[must_use]
pub fn check() -> BatchValidator {
    BatchValidator::new(Config::new())
}

/// Creates a fail-fast validator: raises at the first failed check.
/// Values are included in messages; the failure captures a backtrace.
#[must_use]
pub fn require() -> Validator {
    Validator::new(Config::new())
}

/// One-shot presence check.
pub fn require_not_null<T>(
    value: &Option<T>,
    name: impl Into<Cow<'static, str>>,
) -> Result<(), ValidationFailure> {
    let mut validator = require();
    validator.not_null(value, name)?;
    Ok(())
}

/// One-shot boolean assertion.
pub fn require_true(
    condition: bool,
    message: impl Into<Cow<'static, str>>,
) -> Result<(), ValidationFailure> {
    let mut validator = require();
    validator.assert_true(condition, message)?;
    Ok(())
}

/// Presets for validating sensitive values: failure messages never include
/// the offending value.
pub mod safe {
    use super::{BatchValidator, Config, Validator};

    /// Batch validator with value redaction.
    #[must_use]
    pub fn check() -> BatchValidator {
        BatchValidator::new(Config::new().redacted())
    }

    /// Batch validator with value redaction and no backtrace capture, for
    /// high-frequency paths where failures are expected.
    #[must_use]
    pub fn check_fast() -> BatchValidator {
        BatchValidator::new(Config::new().redacted().without_backtrace())
    }

    /// Fail-fast validator with value redaction.
    #[must_use]
    pub fn require() -> Validator {
        Validator::new(Config::new().redacted())
    }

    /// Fail-fast validator with value redaction and no backtrace capture.
    #[must_use]
    pub fn require_fast() -> Validator {
        Validator::new(Config::new().redacted().without_backtrace())
    }
}

// ============================================================================
// TESTS
// ============================================================================
