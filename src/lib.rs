#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(feature = "nightly", feature(bigint_helper_methods))]
#![deny(missing_docs)]

//! Widening multiplication over fixed-width integers.
//!
//! Multiplying two `N`-bit values yields a `2N`-bit result, so the exact
//! product is always representable. [`WideMul`] binds every supported
//! operand type to its double-width result type and resolves entirely at
//! compile time; [`U256`] and [`U512`] carry the products that outgrow
//! the primitive widths.

mod uint;
mod wide_mul;
mod widening;

pub use uint::{U256, U512};
pub use wide_mul::WideMul;
pub use widening::{CarryingAdd, CarryingMul, WideningMul};
