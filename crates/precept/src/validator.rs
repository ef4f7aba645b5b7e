//! Fail-fast engine
//!
//! [`Validator`] raises at the first failed check: every check method
//! returns `Result<&mut Self, E>`, where the `Err` is the failure built by
//! the configured strategy, so `?` in the call chain stops evaluation
//! immediately. At most one error is ever present when the failure fires.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::core::engine::{Config, Engine};
use crate::core::error::{ValidationError, ValidationFailure};
use crate::core::message::Message;

/// Fail-fast validation engine.
///
/// Obtain one through [`require()`](crate::require),
/// [`safe::require()`](crate::safe::require), or the constructors here;
/// chain checks with `?`:
///
/// ```rust
/// use precept::require;
///
/// fn rename(id: &Option<u64>, name: &str) -> Result<(), precept::ValidationFailure> {
///     require()
///         .not_null(id, "id")?
///         .not_blank(name, "name")?
///         .has_length(name, 1, 50, "name")?;
///     Ok(())
/// }
///
/// let failure = rename(&Some(1), "").unwrap_err();
/// assert_eq!(failure.message(), "'name' must not be blank");
/// assert_eq!(failure.errors().len(), 1);
/// ```
pub struct Validator<E = ValidationFailure> {
    pub(crate) engine: Engine<E>,
}

impl Validator {
    /// Creates a fail-fast validator raising [`ValidationFailure`].
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            engine: Engine::new(config, true),
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(Config::new())
    }
}

impl<E> Validator<E> {
    /// Creates a fail-fast validator raising through a custom
    /// failure-construction strategy.
    ///
    /// The strategy receives the full ordered error list and may return
    /// any failure type; the engine never interprets it.
    ///
    /// ```rust
    /// use precept::{Config, Validator};
    ///
    /// let mut validator = Validator::with_strategy(Config::new(), |errors| {
    ///     format!("{} validation problem(s)", errors.len())
    /// });
    /// let raised: String = validator.is_positive(&-1, "n").unwrap_err();
    /// assert_eq!(raised, "1 validation problem(s)");
    /// ```
    pub fn with_strategy(
        config: Config,
        strategy: impl Fn(Vec<ValidationError>) -> E + Send + Sync + 'static,
    ) -> Self {
        Self {
            engine: Engine::with_strategy(config, true, Arc::new(strategy)),
        }
    }

    /// Checks that `condition` holds, failing with `message` verbatim.
    pub fn assert_true(
        &mut self,
        condition: bool,
        message: impl Into<Cow<'static, str>>,
    ) -> Result<&mut Self, E> {
        let message = message.into();
        let raised = self
            .engine
            .rule_assert(condition, Message::custom(move || message.into_owned()));
        match raised {
            Some(failure) => Err(failure),
            None => Ok(self),
        }
    }

    /// Checks that `condition` holds; the message is produced lazily, only
    /// on failure.
    pub fn assert_true_with<F>(&mut self, condition: bool, message: F) -> Result<&mut Self, E>
    where
        F: FnOnce() -> String,
    {
        let raised = self.engine.rule_assert(condition, Message::custom(message));
        match raised {
            Some(failure) => Err(failure),
            None => Ok(self),
        }
    }

    /// Checks that `condition` does not hold, failing with `message`
    /// verbatim.
    pub fn assert_false(
        &mut self,
        condition: bool,
        message: impl Into<Cow<'static, str>>,
    ) -> Result<&mut Self, E> {
        self.assert_true(!condition, message)
    }

    /// Checks that `condition` does not hold; the message is produced
    /// lazily, only on failure.
    pub fn assert_false_with<F>(&mut self, condition: bool, message: F) -> Result<&mut Self, E>
    where
        F: FnOnce() -> String,
    {
        self.assert_true_with(!condition, message)
    }
}

impl<E> Clone for Validator<E> {
    fn clone(&self) -> Self {
        Self {
            engine: self.engine.clone(),
        }
    }
}

impl<E> fmt::Debug for Validator<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("engine", &self.engine)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
