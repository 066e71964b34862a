//! Carry-propagating primitives over the unsigned words.
//!
//! One trait per operation. The `nightly` feature forwards to core's
//! `bigint_helper_methods` intrinsics; otherwise a stable fallback is used.

mod carrying_add;
mod carrying_mul;
mod widening_mul;

pub use carrying_add::CarryingAdd;
pub use carrying_mul::CarryingMul;
pub use widening_mul::WideningMul;
