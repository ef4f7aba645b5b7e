//! Emptiness and bounded-size checks over sized containers

use std::fmt;

use crate::core::engine::Engine;
use crate::core::message::{Message, Shown};
use crate::core::traits::HasSize;
use crate::macros::check_forms;

impl<E> Engine<E> {
    pub(crate) fn rule_not_empty<C, F>(&mut self, value: &C, message: Message<F>) -> Option<E>
    where
        C: HasSize + ?Sized,
        F: FnOnce() -> String,
    {
        // Empty payloads carry no value worth echoing; this shape never
        // displays one.
        self.apply(
            !value.is_empty(),
            message,
            || "must not be null or empty".to_string(),
            || None,
        )
    }

    pub(crate) fn rule_has_size<C, F>(
        &mut self,
        value: &C,
        min_size: usize,
        max_size: usize,
        message: Message<F>,
    ) -> Option<E>
    where
        C: HasSize + fmt::Debug + ?Sized,
        F: FnOnce() -> String,
    {
        assert!(min_size <= max_size, "min_size cannot be greater than max_size");
        let size = value.size();
        self.apply(
            size >= min_size && size <= max_size,
            message,
            || format!("must have size between {min_size} and {max_size}"),
            || Some(Shown::debug(value)),
        )
    }

    // ── Null-tolerant twins ─────────────────────────────────────────────

    pub(crate) fn rule_null_or_not_empty<C, F>(
        &mut self,
        value: &Option<C>,
        message: Message<F>,
    ) -> Option<E>
    where
        C: HasSize,
        F: FnOnce() -> String,
    {
        let passed = value.as_ref().is_none_or(|c| !c.is_empty());
        self.apply(
            passed,
            message,
            || "must be null or not empty".to_string(),
            || None,
        )
    }

    pub(crate) fn rule_null_or_has_size<C, F>(
        &mut self,
        value: &Option<C>,
        min_size: usize,
        max_size: usize,
        message: Message<F>,
    ) -> Option<E>
    where
        C: HasSize + fmt::Debug,
        F: FnOnce() -> String,
    {
        assert!(min_size <= max_size, "min_size cannot be greater than max_size");
        let passed = value.as_ref().is_none_or(|c| {
            let size = c.size();
            size >= min_size && size <= max_size
        });
        self.apply(
            passed,
            message,
            || format!("must be null or have size between {min_size} and {max_size}"),
            || value.as_ref().map(Shown::debug),
        )
    }
}

// ============================================================================
// PUBLIC FORMS
// ============================================================================

check_forms! {
    /// Checks that the container (or string) has at least one element.
    ///
    /// Works over anything implementing [`HasSize`](crate::HasSize);
    /// the value is never included in the failure message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let mut checks = precept::check();
    /// checks.not_empty(&Vec::<i32>::new(), "tags").not_empty("", "body");
    /// assert_eq!(checks.errors()[0].to_string(), "'tags' must not be null or empty");
    /// assert_eq!(checks.errors()[1].to_string(), "'body' must not be null or empty");
    /// ```
    not_empty / not_empty_msg / not_empty_unnamed
    [C: HasSize + ?Sized] (value: &C) => rule_not_empty
}

check_forms! {
    /// Checks that the container's size is within `[min_size, max_size]`,
    /// inclusive.
    ///
    /// # Panics
    ///
    /// Panics if `min_size > max_size`.
    has_size / has_size_msg / has_size_unnamed
    [C: HasSize + fmt::Debug + ?Sized] (value: &C, min_size: usize, max_size: usize) => rule_has_size
}

check_forms! {
    /// Checks that the optional container is absent or non-empty.
    null_or_not_empty / null_or_not_empty_msg / null_or_not_empty_unnamed
    [C: HasSize] (value: &Option<C>) => rule_null_or_not_empty
}

check_forms! {
    /// Checks that the optional container is absent or has a size within
    /// `[min_size, max_size]`, inclusive.
    ///
    /// # Panics
    ///
    /// Panics if `min_size > max_size`, even when the value is absent.
    null_or_has_size / null_or_has_size_msg / null_or_has_size_unnamed
    [C: HasSize + fmt::Debug] (value: &Option<C>, min_size: usize, max_size: usize) => rule_null_or_has_size
}

// ============================================================================
// TESTS
// ============================================================================
