//! Core validation types
//!
//! The fundamental building blocks of the rule engine:
//!
//! - **Errors**: [`ValidationError`](error::ValidationError) (one failed
//!   rule) and [`ValidationFailure`](error::ValidationFailure) (the raised
//!   report).
//! - **Engine**: [`Config`](engine::Config), the shared engine state and
//!   the single evaluation primitive every check funnels through.
//! - **Message composition**: field prefixes, templates, value rendering
//!   and truncation.
//! - **Support traits**: [`Numeric`](traits::Numeric) and
//!   [`HasSize`](traits::HasSize), the seams the generic check families
//!   are written against.

pub mod engine;
pub mod error;
pub(crate) mod message;
pub mod traits;
