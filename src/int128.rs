//! The signed 128-bit integer type: a two's complement view over the
//! unsigned limbs. Division truncates toward zero and the remainder takes
//! the sign of the dividend, as the primitive signed types do. Arithmetic
//! wraps modulo 2^128, so `MIN / -1` and `MIN.abs()` return `MIN`.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};
use core::str::FromStr;

use num_bigint::BigInt;

use crate::error::{ParseIntError, ParseIntErrorKind};
use crate::mul;
use crate::numeric::{CastFrom, Numeric, SignedNumeric};
use crate::uint128::UInt128;

#[derive(Copy, Clone, Debug, Default, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Int128(UInt128);

impl Int128 {
    pub const BITS: u32 = 128;
    pub const ZERO: Self = Self::from_parts(0, 0);
    pub const ONE: Self = Self::from_parts(1, 0);
    pub const TWO: Self = Self::from_parts(2, 0);
    pub const NEG_ONE: Self = Self(UInt128::MAX);
    pub const MIN: Self = Self::from_parts(0, 1 << 63);
    pub const MAX: Self = Self::from_parts(u64::MAX, u64::MAX >> 1);

    #[inline]
    pub const fn from_parts(lo: u64, hi: u64) -> Self {
        Self(UInt128::from_parts(lo, hi))
    }

    /// The two's complement bit pattern.
    #[inline]
    pub const fn to_bits(self) -> UInt128 {
        self.0
    }

    #[inline]
    pub const fn from_bits(bits: UInt128) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub const fn is_even(self) -> bool {
        self.0.is_even()
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        (self.0.high() as i64) < 0
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        !self.is_negative() && !self.is_zero()
    }

    pub fn signum(self) -> Self {
        if self.is_negative() {
            Self::NEG_ONE
        } else if self.is_zero() {
            Self::ZERO
        } else {
            Self::ONE
        }
    }

    #[inline]
    pub const fn wrapping_add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }

    #[inline]
    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }

    #[inline]
    pub const fn wrapping_mul(self, rhs: Self) -> Self {
        Self(self.0.wrapping_mul(rhs.0))
    }

    #[inline]
    pub const fn wrapping_neg(self) -> Self {
        Self(self.0.wrapping_neg())
    }

    #[inline]
    pub const fn abs(self) -> Self {
        if self.is_negative() {
            self.wrapping_neg()
        } else {
            self
        }
    }

    #[inline]
    pub const fn unsigned_abs(self) -> UInt128 {
        self.abs().0
    }

    /// Truncating quotient and remainder. The remainder takes the sign of
    /// the dividend. Panics if `v` is zero.
    pub fn div_rem(self, v: Self) -> (Self, Self) {
        let (q, r) = self.unsigned_abs().div_rem(v.unsigned_abs());
        let q = if self.is_negative() != v.is_negative() {
            Self(q.wrapping_neg())
        } else {
            Self(q)
        };
        let r = if self.is_negative() {
            Self(r.wrapping_neg())
        } else {
            Self(r)
        };
        (q, r)
    }

    pub const fn wrapping_pow(self, exponent: u32) -> Self {
        let result = Self(self.unsigned_abs().wrapping_pow(exponent));
        if self.is_negative() && exponent & 1 != 0 {
            result.wrapping_neg()
        } else {
            result
        }
    }

    /// Greatest common divisor of the magnitudes.
    pub fn gcd(self, other: Self) -> Self {
        Self(self.unsigned_abs().gcd(other.unsigned_abs()))
    }

    /// Largest `s` with `s * s <= self`. Panics on negative values.
    pub fn floor_sqrt(self) -> u64 {
        assert!(!self.is_negative(), "square root of negative value");
        self.0.floor_sqrt()
    }

    /// Smallest `s` with `s * s >= self`. Panics on negative values.
    pub fn ceil_sqrt(self) -> u64 {
        assert!(!self.is_negative(), "square root of negative value");
        self.0.ceil_sqrt()
    }

    /// Cube root rounded toward zero: the floor of the root of the
    /// magnitude, with the sign reapplied.
    pub fn floor_cbrt(self) -> i64 {
        let s = self.unsigned_abs().floor_cbrt() as i64;
        if self.is_negative() {
            -s
        } else {
            s
        }
    }

    /// Cube root rounded away from zero: the ceiling of the root of the
    /// magnitude, with the sign reapplied.
    pub fn ceil_cbrt(self) -> i64 {
        let s = self.unsigned_abs().ceil_cbrt() as i64;
        if self.is_negative() {
            -s
        } else {
            s
        }
    }

    /// `(self + b) mod n` on the raw bit patterns.
    #[inline]
    pub fn mod_add(self, b: Self, n: Self) -> Self {
        Self(self.0.mod_add(b.0, n.0))
    }

    /// `(self - b) mod n` on the raw bit patterns.
    #[inline]
    pub fn mod_sub(self, b: Self, n: Self) -> Self {
        Self(self.0.mod_sub(b.0, n.0))
    }

    /// `(self * b) mod n` on the raw bit patterns.
    #[inline]
    pub fn mod_mul(self, b: Self, n: Self) -> Self {
        Self(self.0.mod_mul(b.0, n.0))
    }

    /// `self^exponent mod n` on the raw bit patterns.
    #[inline]
    pub fn mod_pow(self, exponent: Self, n: Self) -> Self {
        Self(self.0.mod_pow(exponent.0, n.0))
    }

    /// `self += b * c`, with the product sign taken from `c`.
    pub fn add_product(&mut self, b: UInt128, c: i64) {
        if c < 0 {
            self.0 = self.0.wrapping_sub(mul::wrapping_mul_u64(b, c.unsigned_abs()));
        } else {
            self.0 = self.0.wrapping_add(mul::wrapping_mul_u64(b, c as u64));
        }
    }

    /// `self -= b * c`, with the product sign taken from `c`.
    pub fn sub_product(&mut self, b: UInt128, c: i64) {
        if c < 0 {
            self.0 = self.0.wrapping_add(mul::wrapping_mul_u64(b, c.unsigned_abs()));
        } else {
            self.0 = self.0.wrapping_sub(mul::wrapping_mul_u64(b, c as u64));
        }
    }

    pub fn as_f64(self) -> f64 {
        if self.is_negative() {
            -self.unsigned_abs().as_f64()
        } else {
            self.0.as_f64()
        }
    }

    pub fn as_f32(self) -> f32 {
        self.as_f64() as f32
    }

    /// Natural logarithm of the float value. Panics on non-positive values.
    pub fn ln(self) -> f64 {
        assert!(self.is_positive(), "argument of logarithm must be positive");
        self.as_f64().ln()
    }

    /// Base 2 logarithm of the float value. Panics on non-positive values.
    pub fn log2(self) -> f64 {
        assert!(self.is_positive(), "argument of logarithm must be positive");
        self.as_f64().log2()
    }

    /// Base 10 logarithm of the float value. Panics on non-positive values.
    pub fn log10(self) -> f64 {
        assert!(self.is_positive(), "argument of logarithm must be positive");
        self.as_f64().log10()
    }
}

impl Ord for Int128 {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.0.high() as i64).cmp(&(other.0.high() as i64)) {
            Ordering::Equal => self.0.low().cmp(&other.0.low()),
            ord => ord,
        }
    }
}

impl PartialOrd for Int128 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for Int128 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }
}

impl Sub for Int128 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }
}

impl Mul for Int128 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.wrapping_mul(rhs)
    }
}

impl Div for Int128 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.div_rem(rhs).0
    }
}

impl Rem for Int128 {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: Self) -> Self {
        self.div_rem(rhs).1
    }
}

impl Neg for Int128 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.wrapping_neg()
    }
}

impl AddAssign for Int128 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Int128 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Int128 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Int128 {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl RemAssign for Int128 {
    #[inline]
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

impl Not for Int128 {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self(!self.0)
    }
}

impl BitAnd for Int128 {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitOr for Int128 {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitXor for Int128 {
    type Output = Self;
    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl BitAndAssign for Int128 {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}

impl BitOrAssign for Int128 {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl BitXorAssign for Int128 {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = *self ^ rhs;
    }
}

impl Shl<u32> for Int128 {
    type Output = Self;
    #[inline]
    fn shl(self, rhs: u32) -> Self {
        Self(self.0 << rhs)
    }
}

// Right shifts are arithmetic: the sign bit fills the vacated positions.
impl Shr<u32> for Int128 {
    type Output = Self;
    #[inline]
    fn shr(self, rhs: u32) -> Self {
        let rhs = rhs % 128;
        let lo = self.0.low();
        let hi = self.0.high();
        if rhs == 0 {
            self
        } else if rhs < 64 {
            Self::from_parts(lo >> rhs | hi << (64 - rhs), ((hi as i64) >> rhs) as u64)
        } else {
            Self::from_parts(((hi as i64) >> (rhs - 64)) as u64, ((hi as i64) >> 63) as u64)
        }
    }
}

impl Shl<usize> for Int128 {
    type Output = Self;
    #[inline]
    fn shl(self, rhs: usize) -> Self {
        self << (rhs as u32)
    }
}

impl Shr<usize> for Int128 {
    type Output = Self;
    #[inline]
    fn shr(self, rhs: usize) -> Self {
        self >> (rhs as u32)
    }
}

impl ShlAssign<u32> for Int128 {
    #[inline]
    fn shl_assign(&mut self, rhs: u32) {
        *self = *self << rhs;
    }
}

impl ShrAssign<u32> for Int128 {
    #[inline]
    fn shr_assign(&mut self, rhs: u32) {
        *self = *self >> rhs;
    }
}

macro_rules! implement_scalar_ops {
    ($($T:ty),* $(,)?) => {
        $(
            impl Add<$T> for Int128 {
                type Output = Self;
                #[inline]
                fn add(self, rhs: $T) -> Self {
                    self + Self::from(rhs)
                }
            }

            impl Add<Int128> for $T {
                type Output = Int128;
                #[inline]
                fn add(self, rhs: Int128) -> Int128 {
                    Int128::from(self) + rhs
                }
            }

            impl Sub<$T> for Int128 {
                type Output = Self;
                #[inline]
                fn sub(self, rhs: $T) -> Self {
                    self - Self::from(rhs)
                }
            }

            impl Sub<Int128> for $T {
                type Output = Int128;
                #[inline]
                fn sub(self, rhs: Int128) -> Int128 {
                    Int128::from(self) - rhs
                }
            }

            impl Mul<$T> for Int128 {
                type Output = Self;
                #[inline]
                fn mul(self, rhs: $T) -> Self {
                    self * Self::from(rhs)
                }
            }

            impl Mul<Int128> for $T {
                type Output = Int128;
                #[inline]
                fn mul(self, rhs: Int128) -> Int128 {
                    Int128::from(self) * rhs
                }
            }

            impl Div<$T> for Int128 {
                type Output = Self;
                #[inline]
                fn div(self, rhs: $T) -> Self {
                    self / Self::from(rhs)
                }
            }

            impl Div<Int128> for $T {
                type Output = Int128;
                #[inline]
                fn div(self, rhs: Int128) -> Int128 {
                    Int128::from(self) / rhs
                }
            }

            impl Rem<$T> for Int128 {
                type Output = Self;
                #[inline]
                fn rem(self, rhs: $T) -> Self {
                    self % Self::from(rhs)
                }
            }

            impl Rem<Int128> for $T {
                type Output = Int128;
                #[inline]
                fn rem(self, rhs: Int128) -> Int128 {
                    Int128::from(self) % rhs
                }
            }

            impl AddAssign<$T> for Int128 {
                #[inline]
                fn add_assign(&mut self, rhs: $T) {
                    *self = *self + rhs;
                }
            }

            impl SubAssign<$T> for Int128 {
                #[inline]
                fn sub_assign(&mut self, rhs: $T) {
                    *self = *self - rhs;
                }
            }

            impl MulAssign<$T> for Int128 {
                #[inline]
                fn mul_assign(&mut self, rhs: $T) {
                    *self = *self * rhs;
                }
            }

            impl DivAssign<$T> for Int128 {
                #[inline]
                fn div_assign(&mut self, rhs: $T) {
                    *self = *self / rhs;
                }
            }

            impl RemAssign<$T> for Int128 {
                #[inline]
                fn rem_assign(&mut self, rhs: $T) {
                    *self = *self % rhs;
                }
            }

            impl PartialEq<$T> for Int128 {
                #[inline]
                fn eq(&self, other: &$T) -> bool {
                    *self == Int128::from(*other)
                }
            }

            impl PartialEq<Int128> for $T {
                #[inline]
                fn eq(&self, other: &Int128) -> bool {
                    Int128::from(*self) == *other
                }
            }

            impl PartialOrd<$T> for Int128 {
                #[inline]
                fn partial_cmp(&self, other: &$T) -> Option<Ordering> {
                    self.partial_cmp(&Int128::from(*other))
                }
            }

            impl PartialOrd<Int128> for $T {
                #[inline]
                fn partial_cmp(&self, other: &Int128) -> Option<Ordering> {
                    Int128::from(*self).partial_cmp(other)
                }
            }
        )*
    };
}

implement_scalar_ops!(i32, i64, u32, u64);

// A negative value sorts below any unsigned value.
impl PartialEq<UInt128> for Int128 {
    #[inline]
    fn eq(&self, other: &UInt128) -> bool {
        !self.is_negative() && self.0 == *other
    }
}

impl PartialEq<Int128> for UInt128 {
    #[inline]
    fn eq(&self, other: &Int128) -> bool {
        other == self
    }
}

impl PartialOrd<UInt128> for Int128 {
    #[inline]
    fn partial_cmp(&self, other: &UInt128) -> Option<Ordering> {
        if self.is_negative() {
            Some(Ordering::Less)
        } else {
            self.0.partial_cmp(other)
        }
    }
}

impl PartialOrd<Int128> for UInt128 {
    #[inline]
    fn partial_cmp(&self, other: &Int128) -> Option<Ordering> {
        if other.is_negative() {
            Some(Ordering::Greater)
        } else {
            self.partial_cmp(&other.0)
        }
    }
}

impl From<bool> for Int128 {
    #[inline]
    fn from(x: bool) -> Self {
        Self::from_parts(x as u64, 0)
    }
}

macro_rules! implement_from_unsigned {
    ($($T:ty),* $(,)?) => {
        $(
            impl From<$T> for Int128 {
                #[inline]
                fn from(x: $T) -> Self {
                    Self::from_parts(x as u64, 0)
                }
            }
        )*
    };
}

implement_from_unsigned!(u8, u16, u32, u64);

macro_rules! implement_from_signed {
    ($($T:ty),* $(,)?) => {
        $(
            impl From<$T> for Int128 {
                #[inline]
                fn from(x: $T) -> Self {
                    let hi = if x < 0 { u64::MAX } else { 0 };
                    Self::from_parts(x as u64, hi)
                }
            }
        )*
    };
}

implement_from_signed!(i8, i16, i32, i64);

impl From<i128> for Int128 {
    #[inline]
    fn from(x: i128) -> Self {
        Self::from_parts(x as u64, (x >> 64) as u64)
    }
}

impl From<Int128> for i128 {
    #[inline]
    fn from(x: Int128) -> i128 {
        u128::from(x.0) as i128
    }
}

macro_rules! implement_widening_casts {
    ($($T:ty),* $(,)?) => {
        $(
            impl CastFrom<$T> for Int128 {
                #[inline]
                fn cast_from(input: $T) -> Self {
                    Self::from(input)
                }
            }
        )*
    };
}

implement_widening_casts!(bool, u8, u16, u32, u64, i8, i16, i32, i64, i128);

impl CastFrom<u128> for Int128 {
    #[inline]
    fn cast_from(input: u128) -> Self {
        Self(UInt128::from(input))
    }
}

impl CastFrom<UInt128> for Int128 {
    #[inline]
    fn cast_from(input: UInt128) -> Self {
        Self(input)
    }
}

impl CastFrom<Int128> for u128 {
    #[inline]
    fn cast_from(input: Int128) -> u128 {
        u128::from(input.0)
    }
}

impl CastFrom<Int128> for i128 {
    #[inline]
    fn cast_from(input: Int128) -> i128 {
        i128::from(input)
    }
}

macro_rules! implement_truncating_casts {
    ($($T:ty),* $(,)?) => {
        $(
            impl CastFrom<Int128> for $T {
                #[inline]
                fn cast_from(input: Int128) -> $T {
                    input.0.low() as $T
                }
            }
        )*
    };
}

implement_truncating_casts!(u8, u16, u32, u64, i8, i16, i32, i64);

impl CastFrom<f64> for Int128 {
    fn cast_from(input: f64) -> Self {
        if input < 0.0 {
            Self(UInt128::cast_from(-input).wrapping_neg())
        } else {
            Self(UInt128::cast_from(input))
        }
    }
}

impl CastFrom<Int128> for f64 {
    #[inline]
    fn cast_from(input: Int128) -> f64 {
        input.as_f64()
    }
}

impl From<Int128> for BigInt {
    fn from(x: Int128) -> BigInt {
        if x.is_negative() {
            -BigInt::from(num_bigint::BigUint::from(x.unsigned_abs()))
        } else {
            BigInt::from(num_bigint::BigUint::from(x.0))
        }
    }
}

impl CastFrom<&BigInt> for Int128 {
    /// Truncates the two's complement representation to 128 bits.
    fn cast_from(input: &BigInt) -> Self {
        Self(UInt128::cast_from(input))
    }
}

impl fmt::Display for Int128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&BigInt::from(*self), f)
    }
}

impl fmt::LowerHex for Int128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for Int128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl fmt::Binary for Int128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

impl FromStr for Int128 {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseIntError::new(ParseIntErrorKind::Empty));
        }
        let value: BigInt = s
            .parse()
            .map_err(|_| ParseIntError::new(ParseIntErrorKind::InvalidDigit))?;
        if value > BigInt::from(i128::MAX) {
            return Err(ParseIntError::new(ParseIntErrorKind::PosOverflow));
        }
        if value < BigInt::from(i128::MIN) {
            return Err(ParseIntError::new(ParseIntErrorKind::NegOverflow));
        }
        Ok(Self::cast_from(&value))
    }
}

impl Numeric for Int128 {
    const BITS: u32 = 128;
    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;
    const TWO: Self = Self::TWO;
    const MAX: Self = Self::MAX;
}

impl SignedNumeric for Int128 {
    const MIN: Self = Self::MIN;
}
