use rand::{thread_rng, Rng};
use wide_arith::{WideMul, U256, U512};

const ROUNDS: usize = 1000;

macro_rules! check_laws {
    ($T:ty, $WideT:ty, $rng:expr) => {{
        let a: $T = $rng.gen();
        let b: $T = $rng.gen();

        // exactness against the widened reference product
        assert_eq!(a.wide_mul(b), (a as $WideT) * (b as $WideT));
        // commutativity
        assert_eq!(a.wide_mul(b), b.wide_mul(a));
        // zero law
        assert_eq!(a.wide_mul(0), 0);
        assert_eq!((0 as $T).wide_mul(b), 0);
        // identity law
        assert_eq!(a.wide_mul(1), a as $WideT);
    }};
}

#[test]
fn laws_for_direct_widths() {
    let mut rng = thread_rng();

    for _ in 0..ROUNDS {
        check_laws!(i8, i16, rng);
        check_laws!(i16, i32, rng);
        check_laws!(i32, i64, rng);
        check_laws!(i64, i128, rng);
        check_laws!(u8, u16, rng);
        check_laws!(u16, u32, rng);
        check_laws!(u32, u64, rng);
        check_laws!(u64, u128, rng);
    }
}

#[test]
fn unsigned_boundaries() {
    assert_eq!(200u8.wide_mul(200), 40000u16);
    assert_eq!(u8::MAX.wide_mul(u8::MAX), 65025u16);
    assert_eq!(u16::MAX.wide_mul(u16::MAX), 4_294_836_225u32);
    assert_eq!(u32::MAX.wide_mul(u32::MAX), (u32::MAX as u64).pow(2));
    assert_eq!(u64::MAX.wide_mul(u64::MAX), (u64::MAX as u128).pow(2));
}

// The closed forms for an `N`-bit signed type: MIN * MIN == 2^(2N-2),
// MAX * MAX == 2^(2N-2) - 2^N + 1, MIN * MAX == -2^(2N-2) + 2^(N-1).
macro_rules! check_signed_extremes {
    ($T:ty, $WideT:ty, $BITS:expr) => {{
        let square_min: $WideT = 1 << (2 * $BITS - 2);
        assert_eq!(<$T>::MIN.wide_mul(<$T>::MIN), square_min);
        assert_eq!(<$T>::MAX.wide_mul(<$T>::MAX), square_min - (1 << $BITS) + 1);
        assert_eq!(<$T>::MIN.wide_mul(<$T>::MAX), -square_min + (1 << ($BITS - 1)));
    }};
}

#[test]
fn signed_boundaries() {
    // most-negative squared is the positive-overflow boundary
    assert_eq!((-128i8).wide_mul(-128), 16384i16);
    assert_eq!(i8::MIN.wide_mul(i8::MAX), -16256i16);
    assert_eq!(i64::MIN.wide_mul(-1), 1i128 << 63);

    check_signed_extremes!(i8, i16, 8);
    check_signed_extremes!(i16, i32, 16);
    check_signed_extremes!(i32, i64, 32);
    check_signed_extremes!(i64, i128, 64);
}

#[test]
fn signed_sign_rules() {
    let mut rng = thread_rng();

    for _ in 0..ROUNDS {
        let a: i32 = rng.gen();
        let b: i32 = rng.gen();
        let product = a.wide_mul(b);
        assert_eq!(product, (a as i64) * (b as i64));
        assert_eq!(
            product.signum(),
            (a as i64).signum() * (b as i64).signum()
        );
    }
}

#[test]
fn u128_wide_mul() {
    // (2^128 - 1)^2 == 2^256 - 2^129 + 1
    assert_eq!(
        u128::MAX.wide_mul(u128::MAX),
        U256::from_parts(1, u128::MAX - 1)
    );
    assert_eq!(u128::MAX.wide_mul(2), U256::from_parts(u128::MAX - 1, 1));
    assert_eq!(u128::MAX.wide_mul(1), U256::from(u128::MAX));
    assert_eq!(u128::MAX.wide_mul(0), U256::ZERO);

    let mut rng = thread_rng();
    for _ in 0..ROUNDS {
        let a: u128 = rng.gen();
        let b: u128 = rng.gen();
        let product = a.wide_mul(b);

        // commutativity, and the low half is the wrapping product
        assert_eq!(product, b.wide_mul(a));
        assert_eq!(product.low(), a.wrapping_mul(b));

        // 64-bit operands never reach the high half, and must agree
        // with the primitive u64 rule
        let (a, b) = (a >> 64, b >> 64);
        assert_eq!(a.wide_mul(b), U256::from((a as u64).wide_mul(b as u64)));
    }
}

#[test]
fn u256_wide_mul() {
    // 2 * (2^256 - 1) == 2^257 - 2, carrying into the third limb
    assert_eq!(
        U256::MAX.wide_mul(U256::from(2u128)),
        U512::from_limbs([u128::MAX - 1, u128::MAX, 1, 0])
    );
    assert_eq!(
        U256::MAX.wide_mul(U256::MAX),
        U512::from_limbs([1, 0, u128::MAX - 1, u128::MAX])
    );
    assert_eq!(U256::MAX.wide_mul(U256::ONE), U512::from(U256::MAX));
    assert_eq!(U256::MAX.wide_mul(U256::ZERO), U512::ZERO);
}

#[test]
fn u256_laws() {
    let mut rng = thread_rng();

    for _ in 0..ROUNDS {
        let a = U256::from_parts(rng.gen(), rng.gen());
        let b = U256::from_parts(rng.gen(), rng.gen());
        let product = a.wide_mul(b);

        // commutativity
        assert_eq!(product, b.wide_mul(a));
        // zero law
        assert_eq!(a.wide_mul(U256::ZERO), U512::ZERO);
        assert_eq!(U256::ZERO.wide_mul(b), U512::ZERO);
        // identity law
        assert_eq!(a.wide_mul(U256::ONE), U512::from(a));

        // the product distributes over the 128-bit halves of b; the two
        // partial products sum to a * b exactly, so the add cannot carry
        let low = a.wide_mul(U256::from(b.low()));
        let high = a.wide_mul(U256::from_parts(0, b.high()));
        assert_eq!(product, low + high);
    }
}

#[test]
fn u256_agrees_with_u128() {
    let mut rng = thread_rng();

    for _ in 0..ROUNDS {
        let a: u128 = rng.gen();
        let b: u128 = rng.gen();

        let narrow = a.wide_mul(b);
        let wide = U256::from(a).wide_mul(U256::from(b));
        assert_eq!(wide, U512::from(narrow));
        assert_eq!(wide, U256::from(b).wide_mul(U256::from(a)));
    }
}

#[test]
fn composite_values_serialize() {
    let product = u128::MAX.wide_mul(u128::MAX);
    let bytes = bincode::serialize(&product).unwrap();
    assert_eq!(bincode::deserialize::<U256>(&bytes).unwrap(), product);

    let product = U256::MAX.wide_mul(U256::MAX);
    let bytes = bincode::serialize(&product).unwrap();
    assert_eq!(bincode::deserialize::<U512>(&bytes).unwrap(), product);
}
