//! Shared engine state and the evaluation primitive
//!
//! Both engine types ([`Validator`](crate::Validator) and
//! [`BatchValidator`](crate::BatchValidator)) wrap one [`Engine`]: the
//! immutable configuration, the pluggable failure-construction strategy,
//! and the append-only list of collected errors. Every check funnels
//! through [`Engine::apply`]; there is no other path to adding an error.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::core::error::{ValidationError, ValidationFailure};
use crate::core::message::{self, Message, Shown};

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Engine configuration, fixed at construction.
///
/// Whether the engine is fail-fast or batch is chosen by constructing a
/// [`Validator`](crate::Validator) or a
/// [`BatchValidator`](crate::BatchValidator); the remaining knobs live
/// here.
///
/// # Examples
///
/// ```rust
/// use precept::{BatchValidator, Config};
///
/// // Redacting engine for checks over sensitive values.
/// let mut checks = BatchValidator::new(Config::new().redacted());
/// checks.is_positive(&-42, "balance");
/// assert_eq!(checks.errors()[0].message(), "must be positive");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// When `false`, failure messages never include the offending value's
    /// rendering, for any check.
    pub include_values: bool,

    /// Whether the default failure constructor captures a backtrace.
    /// Ignored by custom failure strategies.
    pub capture_backtrace: bool,
}

impl Config {
    /// Default configuration: values shown, backtrace captured.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_values: true,
            capture_backtrace: true,
        }
    }

    /// Never include offending values in failure messages.
    #[must_use = "builder methods must be chained or built"]
    pub const fn redacted(mut self) -> Self {
        self.include_values = false;
        self
    }

    /// Skip backtrace capture when constructing the default failure.
    #[must_use = "builder methods must be chained or built"]
    pub const fn without_backtrace(mut self) -> Self {
        self.capture_backtrace = false;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// FAILURE STRATEGY
// ============================================================================

/// Turns the collected errors into the value ultimately raised.
///
/// The engine never interprets the returned failure; any host error type
/// works. Strategies are shared behind `Arc` so engines stay cheap to
/// clone.
pub type FailureStrategy<E> = Arc<dyn Fn(Vec<ValidationError>) -> E + Send + Sync>;

/// Default strategy: join the errors and apply the backtrace policy.
pub(crate) fn default_strategy(capture_backtrace: bool) -> FailureStrategy<ValidationFailure> {
    Arc::new(move |errors| {
        if capture_backtrace {
            ValidationFailure::new(errors)
        } else {
            ValidationFailure::fast(errors)
        }
    })
}

// ============================================================================
// ENGINE
// ============================================================================

/// Shared state of one validation run.
pub(crate) struct Engine<E> {
    pub(crate) config: Config,
    fail_fast: bool,
    strategy: FailureStrategy<E>,
    pub(crate) errors: SmallVec<[ValidationError; 4]>,
}

impl Engine<ValidationFailure> {
    pub(crate) fn new(config: Config, fail_fast: bool) -> Self {
        Self::with_strategy(config, fail_fast, default_strategy(config.capture_backtrace))
    }
}

impl<E> Engine<E> {
    pub(crate) fn with_strategy(
        config: Config,
        fail_fast: bool,
        strategy: FailureStrategy<E>,
    ) -> Self {
        Self {
            config,
            fail_fast,
            strategy,
            errors: SmallVec::new(),
        }
    }

    /// The evaluation primitive.
    ///
    /// When `passed` is false: compose one error (template and value
    /// rendering run lazily, only here), append it, and in fail-fast mode
    /// hand back the constructed failure for the caller to raise.
    pub(crate) fn apply<F, M, S>(
        &mut self,
        passed: bool,
        message: Message<F>,
        template: M,
        shown: S,
    ) -> Option<E>
    where
        F: FnOnce() -> String,
        M: FnOnce() -> String,
        S: FnOnce() -> Option<Shown>,
    {
        if passed {
            return None;
        }

        let error = match message {
            Message::Custom(produce) => ValidationError::new(produce()),
            Message::Named(field) => self.composed(Some(field), template, shown),
            Message::Unnamed => self.composed(None, template, shown),
        };
        self.errors.push(error);

        if self.fail_fast { Some(self.raise()) } else { None }
    }

    /// Boolean assertion entry point; the message is always the caller's.
    pub(crate) fn rule_assert<F>(&mut self, condition: bool, message: Message<F>) -> Option<E>
    where
        F: FnOnce() -> String,
    {
        self.apply(condition, message, String::new, || None)
    }

    /// Builds the failure from a copy of the current error list.
    pub(crate) fn raise(&self) -> E {
        (self.strategy)(self.errors.to_vec())
    }

    /// Raises if any errors have been collected.
    pub(crate) fn finalize(&self) -> Result<(), E> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.raise())
        }
    }

    /// Copies another engine's errors, in order, onto this list.
    pub(crate) fn absorb(&mut self, other: &Engine<E>) {
        self.errors.extend(other.errors.iter().cloned());
    }

    fn composed<M, S>(
        &self,
        field: Option<Cow<'static, str>>,
        template: M,
        shown: S,
    ) -> ValidationError
    where
        M: FnOnce() -> String,
        S: FnOnce() -> Option<Shown>,
    {
        let shown = if self.config.include_values {
            shown()
        } else {
            None
        };
        message::compose(field, template(), shown)
    }
}

// The strategy is an `Arc`, so clones share it; derives would demand
// `E: Clone` / `E: Debug` bounds the engine does not actually need.
impl<E> Clone for Engine<E> {
    fn clone(&self) -> Self {
        Self {
            config: self.config,
            fail_fast: self.fail_fast,
            strategy: Arc::clone(&self.strategy),
            errors: self.errors.clone(),
        }
    }
}

impl<E> fmt::Debug for Engine<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("fail_fast", &self.fail_fast)
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// TESTS
// ============================================================================
