//! Integration tests for the precept engine.
//!
//! Each module exercises one behavioral area end to end, through the
//! public API only.

mod batch_flow;
mod fail_fast_flow;
mod message_format;
mod redaction;
mod strategies;
