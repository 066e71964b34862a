//! Schoolbook widening multiplication over 128-bit limbs.

use crate::uint::{U256, U512};
use crate::widening::CarryingMul;

/// Multiply-accumulate over one limb: `acc + lhs * rhs + carry`.
///
/// The sum is at most `2^256 - 1`, so the high limb needs no carry out.
#[inline]
fn mac(acc: u128, lhs: u128, rhs: u128, carry: u128) -> (u128, u128) {
    let (low, high) = CarryingMul::carrying_mul(lhs, rhs, carry);
    let (low, c) = low.overflowing_add(acc);
    (low, high + c as u128)
}

impl U256 {
    /// Calculates the complete product `self` * `rhs` as a 512-bit value.
    ///
    /// The product of two 256-bit values always fits in 512 bits, so the
    /// operation cannot overflow.
    pub fn widening_mul(self, rhs: Self) -> U512 {
        let a = [self.low(), self.high()];
        let b = [rhs.low(), rhs.high()];
        let mut limbs = [0u128; 4];

        // Schoolbook multiplication.
        for i in 0..2 {
            let mut carry = 0;
            for j in 0..2 {
                let (low, high) = mac(limbs[i + j], a[i], b[j], carry);
                limbs[i + j] = low;
                carry = high;
            }
            limbs[i + 2] = carry;
        }

        U512::from_limbs(limbs)
    }
}
