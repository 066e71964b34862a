use core::cmp::Ordering;
use core::fmt;
use core::ops::Add;

use bytemuck::{Pod, Zeroable};
use num_traits::{Bounded, ConstZero, Zero};
use serde::{Deserialize, Serialize};

use crate::uint::U256;
use crate::widening::CarryingAdd;

/// A 512-bit unsigned integer composed of four 128-bit limbs,
/// least-significant limb first.
#[derive(
    Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
#[repr(C)]
pub struct U512 {
    limbs: [u128; 4],
}

impl U512 {
    /// The value `0`.
    pub const ZERO: Self = Self { limbs: [0; 4] };

    /// The value `1`.
    pub const ONE: Self = Self {
        limbs: [1, 0, 0, 0],
    };

    /// The smallest representable value.
    pub const MIN: Self = Self::ZERO;

    /// The largest representable value, `2^512 - 1`.
    pub const MAX: Self = Self {
        limbs: [u128::MAX; 4],
    };

    /// The size of this integer type in bits.
    pub const BITS: u32 = 512;

    /// Assembles a value from its limbs, least-significant first.
    #[inline]
    pub const fn from_limbs(limbs: [u128; 4]) -> Self {
        Self { limbs }
    }

    /// Borrows the limbs, least-significant first.
    #[inline]
    pub const fn as_limbs(&self) -> &[u128; 4] {
        &self.limbs
    }

    /// Returns the limbs, least-significant first.
    #[inline]
    pub const fn to_limbs(self) -> [u128; 4] {
        self.limbs
    }

    /// Calculates `self` + `rhs` + `carry`, returning the sum and the
    /// output carry.
    #[inline]
    pub fn carrying_add(self, rhs: Self, carry: bool) -> (Self, bool) {
        let (l0, carry) = CarryingAdd::carrying_add(self.limbs[0], rhs.limbs[0], carry);
        let (l1, carry) = CarryingAdd::carrying_add(self.limbs[1], rhs.limbs[1], carry);
        let (l2, carry) = CarryingAdd::carrying_add(self.limbs[2], rhs.limbs[2], carry);
        let (l3, carry) = CarryingAdd::carrying_add(self.limbs[3], rhs.limbs[3], carry);
        (
            Self {
                limbs: [l0, l1, l2, l3],
            },
            carry,
        )
    }
}

impl Add for U512 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        let (value, carry) = self.carrying_add(rhs, false);
        debug_assert!(!carry, "attempt to add with overflow");
        value
    }
}

impl Zero for U512 {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl ConstZero for U512 {
    const ZERO: Self = Self::ZERO;
}

impl Bounded for U512 {
    #[inline]
    fn min_value() -> Self {
        Self::MIN
    }

    #[inline]
    fn max_value() -> Self {
        Self::MAX
    }
}

impl From<U256> for U512 {
    #[inline]
    fn from(value: U256) -> Self {
        let (low, high) = value.into_parts();
        Self {
            limbs: [low, high, 0, 0],
        }
    }
}

impl From<u128> for U512 {
    #[inline]
    fn from(value: u128) -> Self {
        Self {
            limbs: [value, 0, 0, 0],
        }
    }
}

impl Ord for U512 {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.limbs.iter().rev().cmp(other.limbs.iter().rev())
    }
}

impl PartialOrd for U512 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for U512 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U512({:#x})", self)
    }
}

impl fmt::LowerHex for U512 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        for limb in self.limbs.iter().rev() {
            write!(f, "{:032x}", limb)?;
        }
        Ok(())
    }
}
