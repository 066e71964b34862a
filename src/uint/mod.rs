//! Composite unsigned integers built from 128-bit limbs.
//!
//! [`U256`] and [`U512`] hold the widening-multiplication results that
//! outgrow the primitive unsigned widths. Limbs are ordered
//! least-significant first everywhere.

mod mul;
mod u256;
mod u512;

pub use u256::U256;
pub use u512::U512;
