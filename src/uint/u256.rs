use core::cmp::Ordering;
use core::fmt;
use core::ops::Add;

use bytemuck::{Pod, Zeroable};
use num_traits::{Bounded, ConstZero, Zero};
use serde::{Deserialize, Serialize};

use crate::widening::CarryingAdd;

/// A 256-bit unsigned integer composed of two 128-bit limbs,
/// least-significant limb first.
#[derive(
    Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
#[repr(C)]
pub struct U256 {
    limbs: [u128; 2],
}

impl U256 {
    /// The value `0`.
    pub const ZERO: Self = Self { limbs: [0; 2] };

    /// The value `1`.
    pub const ONE: Self = Self { limbs: [1, 0] };

    /// The smallest representable value.
    pub const MIN: Self = Self::ZERO;

    /// The largest representable value, `2^256 - 1`.
    pub const MAX: Self = Self {
        limbs: [u128::MAX; 2],
    };

    /// The size of this integer type in bits.
    pub const BITS: u32 = 256;

    /// Assembles a value from its 128-bit halves.
    #[inline]
    pub const fn from_parts(low: u128, high: u128) -> Self {
        Self { limbs: [low, high] }
    }

    /// Splits the value into its 128-bit halves, least-significant first.
    #[inline]
    pub const fn into_parts(self) -> (u128, u128) {
        (self.limbs[0], self.limbs[1])
    }

    /// The least-significant 128 bits.
    #[inline]
    pub const fn low(self) -> u128 {
        self.limbs[0]
    }

    /// The most-significant 128 bits.
    #[inline]
    pub const fn high(self) -> u128 {
        self.limbs[1]
    }

    /// Calculates `self` + `rhs` + `carry`, returning the sum and the
    /// output carry.
    #[inline]
    pub fn carrying_add(self, rhs: Self, carry: bool) -> (Self, bool) {
        let (l0, carry) = CarryingAdd::carrying_add(self.limbs[0], rhs.limbs[0], carry);
        let (l1, carry) = CarryingAdd::carrying_add(self.limbs[1], rhs.limbs[1], carry);
        (Self { limbs: [l0, l1] }, carry)
    }
}

impl Add for U256 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        let (value, carry) = self.carrying_add(rhs, false);
        debug_assert!(!carry, "attempt to add with overflow");
        value
    }
}

impl Zero for U256 {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl ConstZero for U256 {
    const ZERO: Self = Self::ZERO;
}

impl Bounded for U256 {
    #[inline]
    fn min_value() -> Self {
        Self::MIN
    }

    #[inline]
    fn max_value() -> Self {
        Self::MAX
    }
}

impl From<u128> for U256 {
    #[inline]
    fn from(value: u128) -> Self {
        Self::from_parts(value, 0)
    }
}

impl Ord for U256 {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.limbs.iter().rev().cmp(other.limbs.iter().rev())
    }
}

impl PartialOrd for U256 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U256({:#x})", self)
    }
}

impl fmt::LowerHex for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        write!(f, "{:032x}{:032x}", self.limbs[1], self.limbs[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts_round() {
        let x = U256::from_parts(3, 5);
        assert_eq!(x.into_parts(), (3, 5));
        assert_eq!((x.low(), x.high()), (3, 5));
        assert_eq!(U256::from(7u128), U256::from_parts(7, 0));
    }

    #[test]
    fn add_carries_between_limbs() {
        let x = U256::from(u128::MAX);
        assert_eq!(x + U256::ONE, U256::from_parts(0, 1));

        let (sum, carry) = U256::MAX.carrying_add(U256::ONE, false);
        assert_eq!(sum, U256::ZERO);
        assert!(carry);
    }

    #[test]
    fn ordering_is_by_significance() {
        assert!(U256::from_parts(u128::MAX, 0) < U256::from_parts(0, 1));
        assert!(U256::MAX > U256::ONE);
        assert!(U256::ZERO < U256::ONE);
    }

    #[test]
    fn hex_format() {
        assert_eq!(
            format!("{:#x}", U256::from(0xABu128)),
            format!("0x{}ab", "0".repeat(62))
        );
    }
}
