//! Numeric range, single-bound, and sign checks

use crate::core::engine::Engine;
use crate::core::message::{Message, Shown};
use crate::core::traits::Numeric;
use crate::macros::check_forms;

impl<E> Engine<E> {
    pub(crate) fn rule_in_range<T, F>(
        &mut self,
        value: &T,
        min: T,
        max: T,
        message: Message<F>,
    ) -> Option<E>
    where
        T: Numeric,
        F: FnOnce() -> String,
    {
        assert!(min <= max, "min cannot be greater than max");
        self.apply(
            *value >= min && *value <= max,
            message,
            || format!("must be between {min} and {max}"),
            || Some(Shown::display(value)),
        )
    }

    pub(crate) fn rule_min<T, F>(&mut self, value: &T, bound: T, message: Message<F>) -> Option<E>
    where
        T: Numeric,
        F: FnOnce() -> String,
    {
        self.apply(
            *value >= bound,
            message,
            || format!("must be at least {bound}"),
            || Some(Shown::display(value)),
        )
    }

    pub(crate) fn rule_max<T, F>(&mut self, value: &T, bound: T, message: Message<F>) -> Option<E>
    where
        T: Numeric,
        F: FnOnce() -> String,
    {
        self.apply(
            *value <= bound,
            message,
            || format!("must be at most {bound}"),
            || Some(Shown::display(value)),
        )
    }

    // The four sign shapes share one comparison-against-zero body.
    fn rule_signed<T, F>(
        &mut self,
        value: &T,
        passed: bool,
        template: &'static str,
        message: Message<F>,
    ) -> Option<E>
    where
        T: Numeric,
        F: FnOnce() -> String,
    {
        self.apply(
            passed,
            message,
            || template.to_string(),
            || Some(Shown::display(value)),
        )
    }

    pub(crate) fn rule_is_positive<T, F>(&mut self, value: &T, message: Message<F>) -> Option<E>
    where
        T: Numeric,
        F: FnOnce() -> String,
    {
        self.rule_signed(value, *value > T::ZERO, "must be positive", message)
    }

    pub(crate) fn rule_is_negative<T, F>(&mut self, value: &T, message: Message<F>) -> Option<E>
    where
        T: Numeric,
        F: FnOnce() -> String,
    {
        self.rule_signed(value, *value < T::ZERO, "must be negative", message)
    }

    pub(crate) fn rule_is_non_negative<T, F>(&mut self, value: &T, message: Message<F>) -> Option<E>
    where
        T: Numeric,
        F: FnOnce() -> String,
    {
        self.rule_signed(value, *value >= T::ZERO, "must be non-negative", message)
    }

    pub(crate) fn rule_is_non_positive<T, F>(&mut self, value: &T, message: Message<F>) -> Option<E>
    where
        T: Numeric,
        F: FnOnce() -> String,
    {
        self.rule_signed(value, *value <= T::ZERO, "must be non-positive", message)
    }

    // ── Null-tolerant twins ─────────────────────────────────────────────

    pub(crate) fn rule_null_or_in_range<T, F>(
        &mut self,
        value: &Option<T>,
        min: T,
        max: T,
        message: Message<F>,
    ) -> Option<E>
    where
        T: Numeric,
        F: FnOnce() -> String,
    {
        assert!(min <= max, "min cannot be greater than max");
        let passed = value.as_ref().is_none_or(|v| *v >= min && *v <= max);
        self.apply(
            passed,
            message,
            || format!("must be null or between {min} and {max}"),
            || value.as_ref().map(Shown::display),
        )
    }

    pub(crate) fn rule_null_or_min<T, F>(
        &mut self,
        value: &Option<T>,
        bound: T,
        message: Message<F>,
    ) -> Option<E>
    where
        T: Numeric,
        F: FnOnce() -> String,
    {
        let passed = value.as_ref().is_none_or(|v| *v >= bound);
        self.apply(
            passed,
            message,
            || format!("must be null or at least {bound}"),
            || value.as_ref().map(Shown::display),
        )
    }

    pub(crate) fn rule_null_or_max<T, F>(
        &mut self,
        value: &Option<T>,
        bound: T,
        message: Message<F>,
    ) -> Option<E>
    where
        T: Numeric,
        F: FnOnce() -> String,
    {
        let passed = value.as_ref().is_none_or(|v| *v <= bound);
        self.apply(
            passed,
            message,
            || format!("must be null or at most {bound}"),
            || value.as_ref().map(Shown::display),
        )
    }

    fn rule_null_or_signed<T, F>(
        &mut self,
        value: &Option<T>,
        passed: bool,
        template: &'static str,
        message: Message<F>,
    ) -> Option<E>
    where
        T: Numeric,
        F: FnOnce() -> String,
    {
        self.apply(
            passed,
            message,
            || template.to_string(),
            || value.as_ref().map(Shown::display),
        )
    }

    pub(crate) fn rule_null_or_positive<T, F>(
        &mut self,
        value: &Option<T>,
        message: Message<F>,
    ) -> Option<E>
    where
        T: Numeric,
        F: FnOnce() -> String,
    {
        let passed = value.as_ref().is_none_or(|v| *v > T::ZERO);
        self.rule_null_or_signed(value, passed, "must be null or positive", message)
    }

    pub(crate) fn rule_null_or_negative<T, F>(
        &mut self,
        value: &Option<T>,
        message: Message<F>,
    ) -> Option<E>
    where
        T: Numeric,
        F: FnOnce() -> String,
    {
        let passed = value.as_ref().is_none_or(|v| *v < T::ZERO);
        self.rule_null_or_signed(value, passed, "must be null or negative", message)
    }

    pub(crate) fn rule_null_or_non_negative<T, F>(
        &mut self,
        value: &Option<T>,
        message: Message<F>,
    ) -> Option<E>
    where
        T: Numeric,
        F: FnOnce() -> String,
    {
        let passed = value.as_ref().is_none_or(|v| *v >= T::ZERO);
        self.rule_null_or_signed(value, passed, "must be null or non-negative", message)
    }

    pub(crate) fn rule_null_or_non_positive<T, F>(
        &mut self,
        value: &Option<T>,
        message: Message<F>,
    ) -> Option<E>
    where
        T: Numeric,
        F: FnOnce() -> String,
    {
        let passed = value.as_ref().is_none_or(|v| *v <= T::ZERO);
        self.rule_null_or_signed(value, passed, "must be null or non-positive", message)
    }
}

// ============================================================================
// PUBLIC FORMS
// ============================================================================

check_forms! {
    /// Checks that the value is within `[min, max]`, inclusive.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`; inverted bounds are a bug in the calling
    /// code and are reported before any value is examined.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let mut checks = precept::check();
    /// checks.in_range(&150, 1, 100, "percent");
    /// assert_eq!(
    ///     checks.errors()[0].to_string(),
    ///     "'percent' must be between 1 and 100, but it was 150",
    /// );
    /// ```
    in_range / in_range_msg / in_range_unnamed
    [T: Numeric] (value: &T, min: T, max: T) => rule_in_range
}

check_forms! {
    /// Checks that the value is at least `bound`, inclusive.
    min / min_msg / min_unnamed
    [T: Numeric] (value: &T, bound: T) => rule_min
}

check_forms! {
    /// Checks that the value is at most `bound`, inclusive.
    max / max_msg / max_unnamed
    [T: Numeric] (value: &T, bound: T) => rule_max
}

check_forms! {
    /// Checks that the value is strictly greater than zero.
    is_positive / is_positive_msg / is_positive_unnamed
    [T: Numeric] (value: &T) => rule_is_positive
}

check_forms! {
    /// Checks that the value is strictly less than zero.
    is_negative / is_negative_msg / is_negative_unnamed
    [T: Numeric] (value: &T) => rule_is_negative
}

check_forms! {
    /// Checks that the value is greater than or equal to zero.
    is_non_negative / is_non_negative_msg / is_non_negative_unnamed
    [T: Numeric] (value: &T) => rule_is_non_negative
}

check_forms! {
    /// Checks that the value is less than or equal to zero.
    is_non_positive / is_non_positive_msg / is_non_positive_unnamed
    [T: Numeric] (value: &T) => rule_is_non_positive
}

check_forms! {
    /// Checks that the optional value is absent or within `[min, max]`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`, even when the value is absent.
    null_or_in_range / null_or_in_range_msg / null_or_in_range_unnamed
    [T: Numeric] (value: &Option<T>, min: T, max: T) => rule_null_or_in_range
}

check_forms! {
    /// Checks that the optional value is absent or at least `bound`.
    null_or_min / null_or_min_msg / null_or_min_unnamed
    [T: Numeric] (value: &Option<T>, bound: T) => rule_null_or_min
}

check_forms! {
    /// Checks that the optional value is absent or at most `bound`.
    null_or_max / null_or_max_msg / null_or_max_unnamed
    [T: Numeric] (value: &Option<T>, bound: T) => rule_null_or_max
}

check_forms! {
    /// Checks that the optional value is absent or strictly positive.
    null_or_positive / null_or_positive_msg / null_or_positive_unnamed
    [T: Numeric] (value: &Option<T>) => rule_null_or_positive
}

check_forms! {
    /// Checks that the optional value is absent or strictly negative.
    null_or_negative / null_or_negative_msg / null_or_negative_unnamed
    [T: Numeric] (value: &Option<T>) => rule_null_or_negative
}

check_forms! {
    /// Checks that the optional value is absent or non-negative.
    null_or_non_negative / null_or_non_negative_msg / null_or_non_negative_unnamed
    [T: Numeric] (value: &Option<T>) => rule_null_or_non_negative
}

check_forms! {
    /// Checks that the optional value is absent or non-positive.
    null_or_non_positive / null_or_non_positive_msg / null_or_non_positive_unnamed
    [T: Numeric] (value: &Option<T>) => rule_null_or_non_positive
}

// ============================================================================
// TESTS
// ============================================================================
