//! # precept
//!
//! Fluent parameter validation for API boundaries and constructors, with a
//! choice of evaluation strategy:
//!
//! - [`require()`] — fail-fast: the first failed check raises immediately.
//! - [`check()`] — batch: failures accumulate until an explicit
//!   [`validate`](BatchValidator::validate) call.
//!
//! ## Quick Start
//!
//! ```rust
//! use precept::check;
//!
//! fn register(username: &str, age: i64) -> Result<(), precept::ValidationFailure> {
//!     let mut checks = check();
//!     checks
//!         .has_length(username, 3, 30, "username")
//!         .is_positive(&age, "age")
//!         .validate()
//! }
//!
//! let failure = register("ab", -1).unwrap_err();
//! assert_eq!(
//!     failure.message(),
//!     "'username' must have length between 3 and 30, but it was 'ab'; \
//!      'age' must be positive, but it was -1",
//! );
//! ```
//!
//! Fail-fast chains raise through `?` at the first failed check:
//!
//! ```rust
//! use precept::require;
//!
//! fn connect(host: &Option<String>, port: i32) -> Result<(), precept::ValidationFailure> {
//!     require()
//!         .not_null(host, "host")?
//!         .in_range(&port, 1, 65535, "port")?;
//!     Ok(())
//! }
//!
//! assert!(connect(&Some("db.internal".into()), 5432).is_ok());
//! assert!(connect(&None, 5432).is_err());
//! ```
//!
//! ## Checks
//!
//! Every check family comes in three forms: `foo(value…, name)` with the
//! default message template, `foo_msg(value…, message)` with a lazy
//! caller-supplied message, and `foo_unnamed(value…)` with no field name.
//! Families over optional values have a `null_or_*` twin that passes when
//! the value is absent.
//!
//! Malformed check arguments (inverted bounds, an invalid pattern, an empty
//! membership set) are caller bugs and panic immediately; they are never
//! recorded as validation errors.

// ValidationFailure carries the joined message plus the full error list —
// boxing it would add indirection to every check call on the fail-fast path.
#![allow(clippy::result_large_err)]

pub mod core;
mod macros;
mod patterns;
mod presets;
mod rules;

mod batch;
mod validator;

pub mod prelude;

pub use crate::batch::BatchValidator;
pub use crate::core::engine::{Config, FailureStrategy};
pub use crate::core::error::{ValidationError, ValidationFailure};
pub use crate::core::traits::{HasSize, Numeric};
pub use crate::presets::{check, require, require_not_null, require_true, safe};
pub use crate::validator::Validator;
