//! String blankness, length, and pattern checks

use crate::core::engine::Engine;
use crate::core::message::{Message, Shown};
use crate::macros::check_forms;
use crate::patterns;

impl<E> Engine<E> {
    pub(crate) fn rule_not_blank<F>(&mut self, value: &str, message: Message<F>) -> Option<E>
    where
        F: FnOnce() -> String,
    {
        // Blank strings are often sensitive payloads; this shape never
        // displays the value.
        self.apply(
            !value.trim().is_empty(),
            message,
            || "must not be blank".to_string(),
            || None,
        )
    }

    pub(crate) fn rule_has_length<F>(
        &mut self,
        value: &str,
        min_length: usize,
        max_length: usize,
        message: Message<F>,
    ) -> Option<E>
    where
        F: FnOnce() -> String,
    {
        assert!(
            min_length <= max_length,
            "min_length cannot be greater than max_length"
        );
        let length = value.len();
        self.apply(
            length >= min_length && length <= max_length,
            message,
            || format!("must have length between {min_length} and {max_length}"),
            || Some(Shown::quoted(value)),
        )
    }

    pub(crate) fn rule_matches<F>(
        &mut self,
        value: &str,
        pattern: &str,
        message: Message<F>,
    ) -> Option<E>
    where
        F: FnOnce() -> String,
    {
        // Resolve through the process-wide cache before looking at the
        // value; a bad pattern must fail regardless of the input.
        let regex = patterns::compiled(pattern);
        self.apply(
            regex.is_match(value),
            message,
            || format!("must match pattern '{pattern}'"),
            || Some(Shown::quoted(value)),
        )
    }

    // ── Null-tolerant twins ─────────────────────────────────────────────

    pub(crate) fn rule_null_or_not_blank<S, F>(
        &mut self,
        value: &Option<S>,
        message: Message<F>,
    ) -> Option<E>
    where
        S: AsRef<str>,
        F: FnOnce() -> String,
    {
        let passed = value
            .as_ref()
            .is_none_or(|s| !s.as_ref().trim().is_empty());
        self.apply(
            passed,
            message,
            || "must be null or not blank".to_string(),
            || None,
        )
    }

    pub(crate) fn rule_null_or_has_length<S, F>(
        &mut self,
        value: &Option<S>,
        min_length: usize,
        max_length: usize,
        message: Message<F>,
    ) -> Option<E>
    where
        S: AsRef<str>,
        F: FnOnce() -> String,
    {
        assert!(
            min_length <= max_length,
            "min_length cannot be greater than max_length"
        );
        let passed = value.as_ref().is_none_or(|s| {
            let length = s.as_ref().len();
            length >= min_length && length <= max_length
        });
        self.apply(
            passed,
            message,
            || format!("must be null or have length between {min_length} and {max_length}"),
            || value.as_ref().map(|s| Shown::quoted(s.as_ref())),
        )
    }

    pub(crate) fn rule_null_or_matches<S, F>(
        &mut self,
        value: &Option<S>,
        pattern: &str,
        message: Message<F>,
    ) -> Option<E>
    where
        S: AsRef<str>,
        F: FnOnce() -> String,
    {
        let regex = patterns::compiled(pattern);
        let passed = value.as_ref().is_none_or(|s| regex.is_match(s.as_ref()));
        self.apply(
            passed,
            message,
            || format!("must be null or match pattern '{pattern}'"),
            || value.as_ref().map(|s| Shown::quoted(s.as_ref())),
        )
    }
}

// ============================================================================
// PUBLIC FORMS
// ============================================================================

check_forms! {
    /// Checks that the string contains at least one non-whitespace
    /// character.
    ///
    /// The value is never included in the failure message, whatever the
    /// engine configuration.
    not_blank / not_blank_msg / not_blank_unnamed
    (value: &str) => rule_not_blank
}

check_forms! {
    /// Checks that the string's byte length is within
    /// `[min_length, max_length]`, inclusive.
    ///
    /// # Panics
    ///
    /// Panics if `min_length > max_length`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let mut checks = precept::check();
    /// checks.has_length("ab", 5, 20, "password");
    /// assert_eq!(
    ///     checks.errors()[0].to_string(),
    ///     "'password' must have length between 5 and 20, but it was 'ab'",
    /// );
    /// ```
    has_length / has_length_msg / has_length_unnamed
    (value: &str, min_length: usize, max_length: usize) => rule_has_length
}

check_forms! {
    /// Checks that the whole string matches `pattern`.
    ///
    /// The pattern source is compiled once per process through the shared
    /// pattern cache, anchored on both ends.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regular expression.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let mut checks = precept::check();
    /// checks.matches("a1", r"[a-z]\d", "code").matches("no", r"[a-z]\d", "other");
    /// assert_eq!(
    ///     checks.errors()[0].to_string(),
    ///     r"'other' must match pattern '[a-z]\d', but it was 'no'",
    /// );
    /// ```
    matches / matches_msg / matches_unnamed
    (value: &str, pattern: &str) => rule_matches
}

check_forms! {
    /// Checks that the optional string is absent or not blank.
    null_or_not_blank / null_or_not_blank_msg / null_or_not_blank_unnamed
    [S: AsRef<str>] (value: &Option<S>) => rule_null_or_not_blank
}

check_forms! {
    /// Checks that the optional string is absent or has a byte length
    /// within `[min_length, max_length]`, inclusive.
    ///
    /// # Panics
    ///
    /// Panics if `min_length > max_length`, even when the value is absent.
    null_or_has_length / null_or_has_length_msg / null_or_has_length_unnamed
    [S: AsRef<str>] (value: &Option<S>, min_length: usize, max_length: usize) => rule_null_or_has_length
}

check_forms! {
    /// Checks that the optional string is absent or fully matches
    /// `pattern`.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regular expression, even when
    /// the value is absent.
    null_or_matches / null_or_matches_msg / null_or_matches_unnamed
    [S: AsRef<str>] (value: &Option<S>, pattern: &str) => rule_null_or_matches
}

// ============================================================================
// TESTS
// ============================================================================
