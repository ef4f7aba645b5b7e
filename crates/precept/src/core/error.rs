//! Error types for validation failures
//!
//! [`ValidationError`] records one failed rule as an optional field name
//! plus a message. [`ValidationFailure`] is the report ultimately raised:
//! the joined message, the full ordered error list, and an optional
//! backtrace.
//!
//! String fields use `Cow<'static, str>` for zero-allocation in the common
//! case of static field names and templates.

use std::backtrace::Backtrace;
use std::borrow::Cow;
use std::fmt;

use thiserror::Error;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single validation error: an optional field name and a message.
///
/// Equality and hashing are structural, so errors can be collected into
/// sets or compared in tests.
///
/// # Examples
///
/// ```rust
/// use precept::ValidationError;
///
/// let error = ValidationError::new("must be positive").with_field("age");
/// assert_eq!(error.to_string(), "'age' must be positive");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationError {
    /// Name of the parameter that failed validation, if the rule was given
    /// one. `None` for assertion errors and unnamed checks.
    pub field: Option<Cow<'static, str>>,

    /// Message describing the violated constraint. Never empty.
    pub message: Cow<'static, str>,
}

impl ValidationError {
    /// Creates an error with no field name.
    #[must_use]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        let message = message.into();
        debug_assert!(!message.is_empty(), "validation message must not be empty");
        Self {
            field: None,
            message,
        }
    }

    /// Sets the field name for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Name of the field that failed validation, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// The validation error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Joins errors into a single `"; "`-separated string, in order.
    ///
    /// ```rust
    /// use precept::ValidationError;
    ///
    /// let errors = [
    ///     ValidationError::new("must not be null").with_field("username"),
    ///     ValidationError::new("must be positive").with_field("age"),
    /// ];
    /// assert_eq!(
    ///     ValidationError::join(&errors),
    ///     "'username' must not be null; 'age' must be positive",
    /// );
    /// ```
    #[must_use]
    pub fn join(errors: &[ValidationError]) -> String {
        errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "'{}' {}", field, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// VALIDATION FAILURE
// ============================================================================

/// The failure raised when validation does not pass.
///
/// Carries the `"; "`-joined message and the full ordered list of
/// [`ValidationError`]s it was built from. The joined message is a derived
/// view; the structured list is the data model.
///
/// A failure built with [`ValidationFailure::fast`] is behaviorally
/// identical but never captures a backtrace, for high-frequency validation
/// paths where failures are expected and diagnostic traces are not needed.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ValidationFailure {
    message: String,
    errors: Vec<ValidationError>,
    backtrace: Option<Backtrace>,
}

impl ValidationFailure {
    /// Builds a failure from the collected errors, capturing a backtrace.
    ///
    /// Capture goes through [`Backtrace::capture`] and therefore honors
    /// the `RUST_BACKTRACE` environment variable.
    #[must_use]
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self {
            message: ValidationError::join(&errors),
            errors,
            backtrace: Some(Backtrace::capture()),
        }
    }

    /// Builds a failure without capturing a backtrace.
    #[must_use]
    pub fn fast(errors: Vec<ValidationError>) -> Self {
        Self {
            message: ValidationError::join(&errors),
            errors,
            backtrace: None,
        }
    }

    /// The `"; "`-joined message covering every collected error.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The individual errors, in the order they were collected.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// The backtrace captured at construction, unless suppressed.
    #[must_use]
    pub fn backtrace(&self) -> Option<&Backtrace> {
        self.backtrace.as_ref()
    }
}

// ============================================================================
// TESTS
// ============================================================================
