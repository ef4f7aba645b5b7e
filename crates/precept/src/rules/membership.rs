//! Membership checks against a fixed set of allowed values

use std::fmt;

use crate::core::engine::Engine;
use crate::core::message::{Message, Shown};
use crate::macros::check_forms;

fn listed<T: fmt::Display>(allowed: &[T]) -> String {
    allowed
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl<E> Engine<E> {
    pub(crate) fn rule_one_of<T, F>(
        &mut self,
        value: &T,
        allowed: &[T],
        message: Message<F>,
    ) -> Option<E>
    where
        T: PartialEq + fmt::Display,
        F: FnOnce() -> String,
    {
        assert!(!allowed.is_empty(), "allowed values cannot be empty");
        self.apply(
            allowed.contains(value),
            message,
            || format!("must be one of [{}]", listed(allowed)),
            || Some(Shown::display(value)),
        )
    }

    pub(crate) fn rule_null_or_one_of<T, F>(
        &mut self,
        value: &Option<T>,
        allowed: &[T],
        message: Message<F>,
    ) -> Option<E>
    where
        T: PartialEq + fmt::Display,
        F: FnOnce() -> String,
    {
        assert!(!allowed.is_empty(), "allowed values cannot be empty");
        let passed = value.as_ref().is_none_or(|v| allowed.contains(v));
        self.apply(
            passed,
            message,
            || format!("must be null or one of [{}]", listed(allowed)),
            || value.as_ref().map(Shown::display),
        )
    }
}

// ============================================================================
// PUBLIC FORMS
// ============================================================================

check_forms! {
    /// Checks that the value is one of the allowed values.
    ///
    /// # Panics
    ///
    /// Panics if `allowed` is empty; a membership check with no members is
    /// a bug in the calling code.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let mut checks = precept::check();
    /// checks.one_of(&"yellow", &["red", "green", "blue"], "color");
    /// assert_eq!(
    ///     checks.errors()[0].to_string(),
    ///     "'color' must be one of [red, green, blue], but it was yellow",
    /// );
    /// ```
    one_of / one_of_msg / one_of_unnamed
    [T: PartialEq + fmt::Display] (value: &T, allowed: &[T]) => rule_one_of
}

check_forms! {
    /// Checks that the optional value is absent or one of the allowed
    /// values.
    ///
    /// # Panics
    ///
    /// Panics if `allowed` is empty, even when the value is absent.
    null_or_one_of / null_or_one_of_msg / null_or_one_of_unnamed
    [T: PartialEq + fmt::Display] (value: &Option<T>, allowed: &[T]) => rule_null_or_one_of
}

// ============================================================================
// TESTS
// ============================================================================
