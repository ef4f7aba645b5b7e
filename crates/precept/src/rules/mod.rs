//! The predicate-shape library
//!
//! Each file implements one domain of check families: the engine-side rule
//! (predicate + template + argument preconditions, written once) and the
//! `check_forms!` invocations that stamp out the public method forms on
//! both engine types.
//!
//! Families over optional values carry a `null_or_*` twin that passes
//! automatically when the value is absent, for optional fields that may
//! legitimately be unset. Preconditions on the rule's own arguments panic
//! regardless of the value or the evaluation strategy.

mod collection;
mod membership;
mod nullness;
mod numeric;
mod string;
