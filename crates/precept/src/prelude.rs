//! Common imports for working with precept.
//!
//! ```rust
//! use precept::prelude::*;
//!
//! let mut checks = check();
//! checks.not_blank("title", "title").in_range(&3, 1, 5, "priority");
//! assert!(checks.is_valid());
//! ```

pub use crate::core::engine::{Config, FailureStrategy};
pub use crate::core::error::{ValidationError, ValidationFailure};
pub use crate::core::traits::{HasSize, Numeric};
pub use crate::presets::{check, require, require_not_null, require_true, safe};
pub use crate::{BatchValidator, Validator};
