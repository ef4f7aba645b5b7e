//! Batch engine
//!
//! [`BatchValidator`] collects every failure and raises only at the
//! explicit [`validate`](BatchValidator::validate) call. In between, the
//! error list can be inspected, merged from other batches, and extended
//! conditionally.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::core::engine::{Config, Engine};
use crate::core::error::{ValidationError, ValidationFailure};
use crate::core::message::Message;

/// Collect-all validation engine.
///
/// Obtain one through [`check()`](crate::check),
/// [`safe::check()`](crate::safe::check), or the constructors here. Check
/// methods chain freely and never raise on their own:
///
/// ```rust
/// use precept::check;
///
/// let mut checks = check();
/// checks
///     .not_null(&None::<String>, "name")
///     .is_positive(&-5, "age");
///
/// assert!(!checks.is_valid());
/// assert_eq!(checks.errors().len(), 2);
///
/// let failure = checks.validate().unwrap_err();
/// assert_eq!(
///     failure.message(),
///     "'name' must not be null; 'age' must be positive, but it was -5",
/// );
/// ```
pub struct BatchValidator<E = ValidationFailure> {
    pub(crate) engine: Engine<E>,
}

impl BatchValidator {
    /// Creates a batch validator raising [`ValidationFailure`].
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            engine: Engine::new(config, false),
        }
    }
}

impl Default for BatchValidator {
    fn default() -> Self {
        Self::new(Config::new())
    }
}

impl<E> BatchValidator<E> {
    /// Creates a batch validator raising through a custom
    /// failure-construction strategy.
    ///
    /// The strategy receives the full ordered error list at
    /// [`validate`](Self::validate) time and may return any failure type.
    pub fn with_strategy(
        config: Config,
        strategy: impl Fn(Vec<ValidationError>) -> E + Send + Sync + 'static,
    ) -> Self {
        Self {
            engine: Engine::with_strategy(config, false, Arc::new(strategy)),
        }
    }

    /// Checks that `condition` holds, failing with `message` verbatim.
    pub fn assert_true(
        &mut self,
        condition: bool,
        message: impl Into<Cow<'static, str>>,
    ) -> &mut Self {
        let message = message.into();
        self.engine
            .rule_assert(condition, Message::custom(move || message.into_owned()));
        self
    }

    /// Checks that `condition` holds; the message is produced lazily, only
    /// on failure.
    pub fn assert_true_with<F>(&mut self, condition: bool, message: F) -> &mut Self
    where
        F: FnOnce() -> String,
    {
        self.engine.rule_assert(condition, Message::custom(message));
        self
    }

    /// Checks that `condition` does not hold, failing with `message`
    /// verbatim.
    pub fn assert_false(
        &mut self,
        condition: bool,
        message: impl Into<Cow<'static, str>>,
    ) -> &mut Self {
        self.assert_true(!condition, message)
    }

    /// Checks that `condition` does not hold; the message is produced
    /// lazily, only on failure.
    pub fn assert_false_with<F>(&mut self, condition: bool, message: F) -> &mut Self
    where
        F: FnOnce() -> String,
    {
        self.assert_true_with(!condition, message)
    }

    /// Copies all of `other`'s collected errors, in order, onto the end of
    /// this validator's list. `other` is left untouched.
    pub fn include(&mut self, other: &BatchValidator<E>) -> &mut Self {
        self.engine.absorb(&other.engine);
        self
    }

    /// Applies `rules` to this validator only when `condition` is true.
    ///
    /// When the condition is false nothing inside the closure runs — not
    /// even lazily-evaluated message producers.
    ///
    /// ```rust
    /// let mut checks = precept::check();
    /// let premium = false;
    /// checks.when(premium, |c| {
    ///     c.not_blank("", "voucher");
    /// });
    /// assert!(checks.is_valid());
    /// ```
    pub fn when(&mut self, condition: bool, rules: impl FnOnce(&mut Self)) -> &mut Self {
        if condition {
            rules(self);
        }
        self
    }

    /// Whether no errors have been collected so far. Never raises.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.engine.errors.is_empty()
    }

    /// The errors collected so far, in call order. Never raises.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.engine.errors
    }

    /// Raises through the failure strategy if any errors were collected;
    /// otherwise does nothing.
    pub fn validate(&self) -> Result<(), E> {
        self.engine.finalize()
    }
}

impl<E> Clone for BatchValidator<E> {
    fn clone(&self) -> Self {
        Self {
            engine: self.engine.clone(),
        }
    }
}

impl<E> fmt::Debug for BatchValidator<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchValidator")
            .field("engine", &self.engine)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
