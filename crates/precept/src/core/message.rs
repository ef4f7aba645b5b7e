//! Message composition for failed checks
//!
//! A failure message is assembled from up to three pieces, in order:
//! the `"parameter "` sentinel when the check was invoked without a field
//! name, the check's template (or the caller's own message), and the
//! `", but it was <value>"` suffix when value display applies.
//!
//! Templates and value renderings are produced through closures so nothing
//! here runs on the success path.

use std::borrow::Cow;
use std::fmt;

use crate::core::error::ValidationError;

/// Longest value rendering embedded into a message before truncation.
pub(crate) const MAX_DISPLAYED_VALUE_LENGTH: usize = 100;

/// Sentinel used in place of a field name for unnamed checks.
const UNNAMED_SENTINEL: &str = "parameter";

// ============================================================================
// MESSAGE FORMS
// ============================================================================

/// Marker closure type for the forms that carry no custom message.
pub(crate) type PlainMessage = fn() -> String;

/// How the failure message for a check invocation is produced.
///
/// The three call forms of every check map onto the three variants; only
/// message production differs between them, never the predicate.
pub(crate) enum Message<F = PlainMessage> {
    /// Field name + the check's default template.
    Named(Cow<'static, str>),
    /// Caller-supplied lazy message; bypasses the template and the value
    /// suffix entirely.
    Custom(F),
    /// No field name; the default template is prefixed with the
    /// `"parameter "` sentinel.
    Unnamed,
}

impl Message<PlainMessage> {
    pub(crate) fn named(field: impl Into<Cow<'static, str>>) -> Self {
        Message::Named(field.into())
    }

    pub(crate) fn unnamed() -> Self {
        Message::Unnamed
    }
}

impl<F: FnOnce() -> String> Message<F> {
    pub(crate) fn custom(produce: F) -> Self {
        Message::Custom(produce)
    }
}

// ============================================================================
// VALUE RENDERING
// ============================================================================

/// A lazily-produced rendering of the offending value.
///
/// Strings are quoted, everything else is rendered bare. Which checks
/// display values at all is a property of the check shape; redaction via
/// engine configuration is applied before any `Shown` is produced.
pub(crate) enum Shown {
    Bare(String),
    Quoted(String),
}

impl Shown {
    /// Renders a scalar via its `Display` form.
    pub(crate) fn display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        Shown::Bare(value.to_string())
    }

    /// Renders a collection via its `Debug` form.
    pub(crate) fn debug<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        Shown::Bare(format!("{value:?}"))
    }

    /// Renders a string, single-quoted.
    pub(crate) fn quoted(value: &str) -> Self {
        Shown::Quoted(value.to_string())
    }

    fn rendered(self) -> String {
        match self {
            Shown::Bare(text) => clip(text),
            Shown::Quoted(text) => format!("'{}'", clip(text)),
        }
    }
}

/// Truncates a rendering to the display limit, marking the cut with `...`.
fn clip(text: String) -> String {
    if text.chars().count() <= MAX_DISPLAYED_VALUE_LENGTH {
        return text;
    }
    let mut clipped: String = text
        .chars()
        .take(MAX_DISPLAYED_VALUE_LENGTH - 3)
        .collect();
    clipped.push_str("...");
    clipped
}

// ============================================================================
// COMPOSITION
// ============================================================================

/// Builds the error for a failed named or unnamed check.
///
/// `shown` is `None` when the engine redacts values, when the shape does
/// not display values, or when the value is absent.
pub(crate) fn compose(
    field: Option<Cow<'static, str>>,
    template: String,
    shown: Option<Shown>,
) -> ValidationError {
    let mut message = match &field {
        Some(_) => template,
        None => format!("{UNNAMED_SENTINEL} {template}"),
    };

    if let Some(shown) = shown {
        message.push_str(", but it was ");
        message.push_str(&shown.rendered());
    }

    match field {
        Some(field) => ValidationError::new(message).with_field(field),
        None => ValidationError::new(message),
    }
}

// ============================================================================
// TESTS
// ============================================================================
