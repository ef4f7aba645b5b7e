//! Nullness checks over optional values

use std::fmt;

use crate::core::engine::Engine;
use crate::core::message::{Message, Shown};
use crate::macros::check_forms;

impl<E> Engine<E> {
    pub(crate) fn rule_not_null<T, F>(
        &mut self,
        value: &Option<T>,
        message: Message<F>,
    ) -> Option<E>
    where
        F: FnOnce() -> String,
    {
        // Failing means the value is absent, so there is never anything to show.
        self.apply(
            value.is_some(),
            message,
            || "must not be null".to_string(),
            || None,
        )
    }

    pub(crate) fn rule_is_null<T, F>(&mut self, value: &Option<T>, message: Message<F>) -> Option<E>
    where
        T: fmt::Display,
        F: FnOnce() -> String,
    {
        self.apply(
            value.is_none(),
            message,
            || "must be null".to_string(),
            || value.as_ref().map(Shown::display),
        )
    }
}

check_forms! {
    /// Checks that the optional value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let mut checks = precept::check();
    /// checks.not_null(&Some(7), "id").not_null(&None::<i32>, "name");
    /// assert_eq!(checks.errors()[0].to_string(), "'name' must not be null");
    /// ```
    not_null / not_null_msg / not_null_unnamed
    [T] (value: &Option<T>) => rule_not_null
}

check_forms! {
    /// Checks that the optional value is absent.
    is_null / is_null_msg / is_null_unnamed
    [T: fmt::Display] (value: &Option<T>) => rule_is_null
}

// ============================================================================
// TESTS
// ============================================================================
