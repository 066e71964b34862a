use crate::uint::{U256, U512};
use crate::widening::WideningMul;

/// Wide mul operation trait.
///
/// `wide_mul` returns the complete product of two same-width operands as a
/// value of the next-larger width, so it can never overflow: for every
/// implementor the result type holds at least twice the operand's bits.
/// The binding from operand to result type is fixed per implementation
/// through [`WideMul::WideT`] and resolved at compile time; multiplying
/// operands of differing widths is a type error, not a runtime failure.
pub trait WideMul: Sized {
    /// The double-width result type.
    type WideT;

    /// Calculates the exact product `self` * `rhs` without the possibility
    /// to overflow.
    fn wide_mul(self, rhs: Self) -> Self::WideT;
}

macro_rules! int_wide_mul_impl {
    ($SelfT:ty, $WideT:ty) => {
        impl WideMul for $SelfT {
            type WideT = $WideT;

            #[inline]
            fn wide_mul(self, rhs: Self) -> Self::WideT {
                (self as $WideT) * (rhs as $WideT)
            }
        }
    };
}

int_wide_mul_impl! { i8, i16 }
int_wide_mul_impl! { i16, i32 }
int_wide_mul_impl! { i32, i64 }
int_wide_mul_impl! { i64, i128 }
int_wide_mul_impl! { u8, u16 }
int_wide_mul_impl! { u16, u32 }
int_wide_mul_impl! { u32, u64 }
int_wide_mul_impl! { u64, u128 }

impl WideMul for u128 {
    type WideT = U256;

    #[inline]
    fn wide_mul(self, rhs: Self) -> U256 {
        let (low, high) = WideningMul::widening_mul(self, rhs);
        U256::from_parts(low, high)
    }
}

impl WideMul for U256 {
    type WideT = U512;

    #[inline]
    fn wide_mul(self, rhs: Self) -> U512 {
        self.widening_mul(rhs)
    }
}
