use crate::uint::U256;

/// Widening mul operation trait.
pub trait WideningMul: Sized {
    /// A wider type for multiplication
    type WideT;

    /// Calculates the complete product `self` * `rhs` without the possibility to overflow.
    ///
    /// This returns the low-order (wrapping) bits and the high-order (overflow) bits
    /// of the result as two separate values, in that order.
    fn widening_mul(self, rhs: Self) -> (Self, Self);
}

macro_rules! uint_widening_mul_impl {
    ($SelfT:ty, $WideT:ty) => {
        impl WideningMul for $SelfT {
            type WideT = $WideT;

            #[inline]
            fn widening_mul(self, rhs: Self) -> (Self, Self) {
                #[cfg(feature = "nightly")]
                {
                    self.widening_mul(rhs)
                }

                #[cfg(not(feature = "nightly"))]
                {
                    let wide = (self as Self::WideT) * (rhs as Self::WideT);
                    (wide as Self, (wide >> Self::BITS) as Self)
                }
            }
        }
    };
}

uint_widening_mul_impl! { u8, u16 }
uint_widening_mul_impl! { u16, u32 }
uint_widening_mul_impl! { u32, u64 }
uint_widening_mul_impl! { u64, u128 }

impl WideningMul for u128 {
    type WideT = U256;

    #[inline]
    fn widening_mul(self, rhs: Self) -> (Self, Self) {
        #[cfg(feature = "nightly")]
        {
            self.widening_mul(rhs)
        }

        #[cfg(not(feature = "nightly"))]
        {
            // No wider primitive exists, so split both operands into
            // 64-bit halves and recombine the four partial products.
            const HALF: u32 = u128::BITS / 2;
            const MASK: u128 = (1u128 << HALF) - 1;

            let (a0, a1) = (self & MASK, self >> HALF);
            let (b0, b1) = (rhs & MASK, rhs >> HALF);

            let ll = a0 * b0;
            let lh = a0 * b1;
            let hl = a1 * b0;
            let hh = a1 * b1;

            // The cross sum is at most one bit wider than a word.
            let (cross, cross_carry) = lh.overflowing_add(hl);
            let (low, carry) = ll.overflowing_add(cross << HALF);
            let high = hh + (cross >> HALF) + ((cross_carry as u128) << HALF) + (carry as u128);

            (low, high)
        }
    }
}
