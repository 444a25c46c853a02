//! The unsigned 128-bit integer type, stored as two 64-bit limbs.
//!
//! Arithmetic wraps modulo 2^128, matching the behavior of the primitive
//! unsigned types in release builds. Division by zero panics. The number
//! theoretic operations (gcd, modular arithmetic, integer roots) live in
//! their own modules and are surfaced here as methods.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};
use core::str::FromStr;

use num_bigint::{BigInt, BigUint};

use crate::error::{ParseIntError, ParseIntErrorKind};
use crate::int128::Int128;
use crate::limb::{adc, sbb, to_double_digit};
use crate::numeric::{CastFrom, Numeric, UnsignedNumeric};
use crate::{div, gcd, modular, mul, root};

#[derive(Copy, Clone, Debug, Default, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UInt128 {
    pub(crate) lo: u64,
    pub(crate) hi: u64,
}

impl UInt128 {
    pub const BITS: u32 = 128;
    pub const ZERO: Self = Self::from_parts(0, 0);
    pub const ONE: Self = Self::from_parts(1, 0);
    pub const TWO: Self = Self::from_parts(2, 0);
    pub const MIN: Self = Self::ZERO;
    pub const MAX: Self = Self::from_parts(u64::MAX, u64::MAX);

    #[inline]
    pub const fn from_parts(lo: u64, hi: u64) -> Self {
        Self { lo, hi }
    }

    #[inline]
    pub const fn low(self) -> u64 {
        self.lo
    }

    #[inline]
    pub const fn high(self) -> u64 {
        self.hi
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.lo == 0 && self.hi == 0
    }

    #[inline]
    pub const fn is_even(self) -> bool {
        self.lo & 1 == 0
    }

    #[inline]
    pub const fn wrapping_add(self, rhs: Self) -> Self {
        let (lo, carry) = adc(self.lo, rhs.lo, false);
        let (hi, _) = adc(self.hi, rhs.hi, carry);
        Self { lo, hi }
    }

    #[inline]
    pub const fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        let (lo, carry) = adc(self.lo, rhs.lo, false);
        let (hi, carry) = adc(self.hi, rhs.hi, carry);
        (Self { lo, hi }, carry)
    }

    #[inline]
    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        let (lo, borrow) = sbb(self.lo, rhs.lo, false);
        let (hi, _) = sbb(self.hi, rhs.hi, borrow);
        Self { lo, hi }
    }

    #[inline]
    pub const fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        let (lo, borrow) = sbb(self.lo, rhs.lo, false);
        let (hi, borrow) = sbb(self.hi, rhs.hi, borrow);
        (Self { lo, hi }, borrow)
    }

    #[inline]
    pub const fn wrapping_neg(self) -> Self {
        Self::ZERO.wrapping_sub(self)
    }

    #[inline]
    pub const fn wrapping_mul(self, rhs: Self) -> Self {
        mul::wrapping_mul(self, rhs)
    }

    /// Full 256-bit product, as `(low, high)` halves.
    #[inline]
    pub fn widening_mul(self, rhs: Self) -> (Self, Self) {
        let w = mul::widening_mul(self, rhs);
        (Self::from_parts(w.0[0], w.0[1]), Self::from_parts(w.0[2], w.0[3]))
    }

    /// Exact 128-bit product of two words.
    #[inline]
    pub const fn mul_wide(a: u64, b: u64) -> Self {
        mul::mul_u64(a, b)
    }

    pub const fn wrapping_pow(self, mut exponent: u32) -> Self {
        let mut result = Self::ONE;
        let mut value = self;
        while exponent != 0 {
            if exponent & 1 != 0 {
                result = result.wrapping_mul(value);
            }
            if exponent != 1 {
                value = value.wrapping_mul(value);
            }
            exponent >>= 1;
        }
        result
    }

    #[inline]
    pub const fn squared(self) -> Self {
        self.wrapping_mul(self)
    }

    #[inline]
    pub const fn cubed(self) -> Self {
        self.squared().wrapping_mul(self)
    }

    /// Quotient and remainder. Panics if `v` is zero.
    #[inline]
    pub fn div_rem(self, v: Self) -> (Self, Self) {
        div::div_rem(self, v)
    }

    /// Quotient and remainder for a single-word divisor.
    #[inline]
    pub fn div_rem_u64(self, v: u64) -> (Self, u64) {
        div::div_rem_u64(self, v)
    }

    /// Quotient and remainder for a half-word divisor.
    #[inline]
    pub fn div_rem_u32(self, v: u32) -> (Self, u32) {
        div::div_rem_u32(self, v)
    }

    pub fn gcd(self, other: Self) -> Self {
        gcd::gcd(self, other)
    }

    /// `(self + b) mod n`. Operands must already be reduced modulo `n`.
    #[inline]
    pub fn mod_add(self, b: Self, n: Self) -> Self {
        modular::mod_add(self, b, n)
    }

    /// `(self - b) mod n`. Operands must already be reduced modulo `n`.
    #[inline]
    pub fn mod_sub(self, b: Self, n: Self) -> Self {
        modular::mod_sub(self, b, n)
    }

    /// `(self * b) mod n`. Operands must already be reduced modulo `n`.
    #[inline]
    pub fn mod_mul(self, b: Self, n: Self) -> Self {
        modular::mod_mul(self, b, n)
    }

    #[inline]
    pub fn mod_mul_assign(&mut self, b: Self, n: Self) {
        *self = modular::mod_mul(*self, b, n);
    }

    /// `self^exponent mod n`. The base must already be reduced modulo `n`.
    pub fn mod_pow(self, exponent: Self, n: Self) -> Self {
        modular::mod_pow(self, exponent, n)
    }

    /// The Montgomery constant `-self^-1 mod 2^64`. Panics unless `self`
    /// is odd.
    pub fn mont_k0(self) -> u64 {
        modular::mont_k0(self)
    }

    /// Montgomery product `self * v / 2^128 mod n` for operands below `n`.
    #[inline]
    pub fn mont_mul(self, v: Self, n: Self, k0: u64) -> Self {
        modular::mont_mul(self, v, n, k0)
    }

    /// Montgomery reduction `self / 2^128 mod n`.
    #[inline]
    pub fn mont_reduce(self, n: Self, k0: u64) -> Self {
        modular::mont_reduce(self, n, k0)
    }

    pub fn floor_sqrt(self) -> u64 {
        root::floor_sqrt(self)
    }

    pub fn ceil_sqrt(self) -> u64 {
        root::ceil_sqrt(self)
    }

    pub fn floor_cbrt(self) -> u64 {
        root::floor_cbrt(self)
    }

    pub fn ceil_cbrt(self) -> u64 {
        root::ceil_cbrt(self)
    }

    #[inline]
    pub const fn leading_zeros(self) -> u32 {
        if self.hi != 0 {
            self.hi.leading_zeros()
        } else {
            64 + self.lo.leading_zeros()
        }
    }

    #[inline]
    pub const fn trailing_zeros(self) -> u32 {
        if self.lo != 0 {
            self.lo.trailing_zeros()
        } else {
            64 + self.hi.trailing_zeros()
        }
    }

    #[inline]
    pub const fn count_ones(self) -> u32 {
        self.lo.count_ones() + self.hi.count_ones()
    }

    #[inline]
    pub const fn is_power_of_two(self) -> bool {
        self.count_ones() == 1
    }

    /// Floor of the base 2 logarithm. Panics on zero.
    #[inline]
    pub fn ilog2(self) -> u32 {
        assert!(!self.is_zero(), "argument of integer logarithm must be positive");
        127 - self.leading_zeros()
    }

    /// Ceiling of the base 2 logarithm. Panics on zero.
    #[inline]
    pub fn ceil_ilog2(self) -> u32 {
        assert!(!self.is_zero(), "argument of integer logarithm must be positive");
        128 - self.wrapping_sub(Self::ONE).leading_zeros()
    }

    #[inline]
    pub fn as_f64(self) -> f64 {
        self.hi as f64 * 18446744073709551616.0 + self.lo as f64
    }

    #[inline]
    pub fn as_f32(self) -> f32 {
        self.as_f64() as f32
    }

    pub fn ln(self) -> f64 {
        self.as_f64().ln()
    }

    pub fn log2(self) -> f64 {
        self.as_f64().log2()
    }

    pub fn log10(self) -> f64 {
        self.as_f64().log10()
    }
}

impl Ord for UInt128 {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        match self.hi.cmp(&other.hi) {
            Ordering::Equal => self.lo.cmp(&other.lo),
            ord => ord,
        }
    }
}

impl PartialOrd for UInt128 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for UInt128 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }
}

impl Sub for UInt128 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }
}

impl Mul for UInt128 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.wrapping_mul(rhs)
    }
}

impl Div for UInt128 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        div::div_rem(self, rhs).0
    }
}

impl Rem for UInt128 {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: Self) -> Self {
        div::div_rem(self, rhs).1
    }
}

impl AddAssign for UInt128 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for UInt128 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for UInt128 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for UInt128 {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl RemAssign for UInt128 {
    #[inline]
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

impl Not for UInt128 {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self::from_parts(!self.lo, !self.hi)
    }
}

impl BitAnd for UInt128 {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self::from_parts(self.lo & rhs.lo, self.hi & rhs.hi)
    }
}

impl BitOr for UInt128 {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self::from_parts(self.lo | rhs.lo, self.hi | rhs.hi)
    }
}

impl BitXor for UInt128 {
    type Output = Self;
    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self::from_parts(self.lo ^ rhs.lo, self.hi ^ rhs.hi)
    }
}

impl BitAndAssign for UInt128 {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}

impl BitOrAssign for UInt128 {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl BitXorAssign for UInt128 {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = *self ^ rhs;
    }
}

// Shift amounts are taken modulo the bit width, as the primitive types do
// in release builds.
impl Shl<u32> for UInt128 {
    type Output = Self;
    #[inline]
    fn shl(self, rhs: u32) -> Self {
        let rhs = rhs % 128;
        if rhs == 0 {
            self
        } else if rhs < 64 {
            Self::from_parts(self.lo << rhs, self.hi << rhs | self.lo >> (64 - rhs))
        } else {
            Self::from_parts(0, self.lo << (rhs - 64))
        }
    }
}

impl Shr<u32> for UInt128 {
    type Output = Self;
    #[inline]
    fn shr(self, rhs: u32) -> Self {
        let rhs = rhs % 128;
        if rhs == 0 {
            self
        } else if rhs < 64 {
            Self::from_parts(self.lo >> rhs | self.hi << (64 - rhs), self.hi >> rhs)
        } else {
            Self::from_parts(self.hi >> (rhs - 64), 0)
        }
    }
}

impl Shl<usize> for UInt128 {
    type Output = Self;
    #[inline]
    fn shl(self, rhs: usize) -> Self {
        self << (rhs as u32)
    }
}

impl Shr<usize> for UInt128 {
    type Output = Self;
    #[inline]
    fn shr(self, rhs: usize) -> Self {
        self >> (rhs as u32)
    }
}

impl ShlAssign<u32> for UInt128 {
    #[inline]
    fn shl_assign(&mut self, rhs: u32) {
        *self = *self << rhs;
    }
}

impl ShrAssign<u32> for UInt128 {
    #[inline]
    fn shr_assign(&mut self, rhs: u32) {
        *self = *self >> rhs;
    }
}

macro_rules! implement_scalar_ops {
    ($($T:ty),* $(,)?) => {
        $(
            impl Add<$T> for UInt128 {
                type Output = Self;
                #[inline]
                fn add(self, rhs: $T) -> Self {
                    self + Self::from(rhs)
                }
            }

            impl Add<UInt128> for $T {
                type Output = UInt128;
                #[inline]
                fn add(self, rhs: UInt128) -> UInt128 {
                    UInt128::from(self) + rhs
                }
            }

            impl Sub<$T> for UInt128 {
                type Output = Self;
                #[inline]
                fn sub(self, rhs: $T) -> Self {
                    self - Self::from(rhs)
                }
            }

            impl Sub<UInt128> for $T {
                type Output = UInt128;
                #[inline]
                fn sub(self, rhs: UInt128) -> UInt128 {
                    UInt128::from(self) - rhs
                }
            }

            impl Mul<$T> for UInt128 {
                type Output = Self;
                #[inline]
                fn mul(self, rhs: $T) -> Self {
                    self * Self::from(rhs)
                }
            }

            impl Mul<UInt128> for $T {
                type Output = UInt128;
                #[inline]
                fn mul(self, rhs: UInt128) -> UInt128 {
                    UInt128::from(self) * rhs
                }
            }

            impl Div<$T> for UInt128 {
                type Output = Self;
                #[inline]
                fn div(self, rhs: $T) -> Self {
                    self / Self::from(rhs)
                }
            }

            impl Div<UInt128> for $T {
                type Output = UInt128;
                #[inline]
                fn div(self, rhs: UInt128) -> UInt128 {
                    UInt128::from(self) / rhs
                }
            }

            impl Rem<$T> for UInt128 {
                type Output = Self;
                #[inline]
                fn rem(self, rhs: $T) -> Self {
                    self % Self::from(rhs)
                }
            }

            impl Rem<UInt128> for $T {
                type Output = UInt128;
                #[inline]
                fn rem(self, rhs: UInt128) -> UInt128 {
                    UInt128::from(self) % rhs
                }
            }

            impl AddAssign<$T> for UInt128 {
                #[inline]
                fn add_assign(&mut self, rhs: $T) {
                    *self = *self + rhs;
                }
            }

            impl SubAssign<$T> for UInt128 {
                #[inline]
                fn sub_assign(&mut self, rhs: $T) {
                    *self = *self - rhs;
                }
            }

            impl MulAssign<$T> for UInt128 {
                #[inline]
                fn mul_assign(&mut self, rhs: $T) {
                    *self = *self * rhs;
                }
            }

            impl DivAssign<$T> for UInt128 {
                #[inline]
                fn div_assign(&mut self, rhs: $T) {
                    *self = *self / rhs;
                }
            }

            impl RemAssign<$T> for UInt128 {
                #[inline]
                fn rem_assign(&mut self, rhs: $T) {
                    *self = *self % rhs;
                }
            }

            impl PartialEq<$T> for UInt128 {
                #[inline]
                fn eq(&self, other: &$T) -> bool {
                    *self == UInt128::from(*other)
                }
            }

            impl PartialEq<UInt128> for $T {
                #[inline]
                fn eq(&self, other: &UInt128) -> bool {
                    UInt128::from(*self) == *other
                }
            }

            impl PartialOrd<$T> for UInt128 {
                #[inline]
                fn partial_cmp(&self, other: &$T) -> Option<Ordering> {
                    self.partial_cmp(&UInt128::from(*other))
                }
            }

            impl PartialOrd<UInt128> for $T {
                #[inline]
                fn partial_cmp(&self, other: &UInt128) -> Option<Ordering> {
                    UInt128::from(*self).partial_cmp(other)
                }
            }
        )*
    };
}

implement_scalar_ops!(u32, u64, u128);

// A negative word sorts below any UInt128.
macro_rules! implement_signed_comparisons {
    ($($T:ty),* $(,)?) => {
        $(
            impl PartialEq<$T> for UInt128 {
                #[inline]
                fn eq(&self, other: &$T) -> bool {
                    *other >= 0 && *self == UInt128::from(*other as u64)
                }
            }

            impl PartialEq<UInt128> for $T {
                #[inline]
                fn eq(&self, other: &UInt128) -> bool {
                    other == self
                }
            }

            impl PartialOrd<$T> for UInt128 {
                #[inline]
                fn partial_cmp(&self, other: &$T) -> Option<Ordering> {
                    if *other < 0 {
                        Some(Ordering::Greater)
                    } else {
                        self.partial_cmp(&UInt128::from(*other as u64))
                    }
                }
            }

            impl PartialOrd<UInt128> for $T {
                #[inline]
                fn partial_cmp(&self, other: &UInt128) -> Option<Ordering> {
                    other.partial_cmp(self).map(Ordering::reverse)
                }
            }
        )*
    };
}

implement_signed_comparisons!(i32, i64);

impl From<bool> for UInt128 {
    #[inline]
    fn from(x: bool) -> Self {
        Self::from_parts(x as u64, 0)
    }
}

impl From<u8> for UInt128 {
    #[inline]
    fn from(x: u8) -> Self {
        Self::from_parts(x as u64, 0)
    }
}

impl From<u16> for UInt128 {
    #[inline]
    fn from(x: u16) -> Self {
        Self::from_parts(x as u64, 0)
    }
}

impl From<u32> for UInt128 {
    #[inline]
    fn from(x: u32) -> Self {
        Self::from_parts(x as u64, 0)
    }
}

impl From<u64> for UInt128 {
    #[inline]
    fn from(x: u64) -> Self {
        Self::from_parts(x, 0)
    }
}

impl From<u128> for UInt128 {
    #[inline]
    fn from(x: u128) -> Self {
        Self::from_parts(x as u64, (x >> 64) as u64)
    }
}

impl From<UInt128> for u128 {
    #[inline]
    fn from(x: UInt128) -> u128 {
        to_double_digit(x.lo, x.hi)
    }
}

macro_rules! implement_signed_casts {
    ($($T:ty),* $(,)?) => {
        $(
            impl CastFrom<$T> for UInt128 {
                #[inline]
                fn cast_from(input: $T) -> Self {
                    // sign extension into the high limb
                    let hi = if input < 0 { u64::MAX } else { 0 };
                    Self::from_parts(input as u64, hi)
                }
            }
        )*
    };
}

implement_signed_casts!(i8, i16, i32, i64);

macro_rules! implement_widening_casts {
    ($($T:ty),* $(,)?) => {
        $(
            impl CastFrom<$T> for UInt128 {
                #[inline]
                fn cast_from(input: $T) -> Self {
                    Self::from(input)
                }
            }
        )*
    };
}

implement_widening_casts!(bool, u8, u16, u32, u64, u128);

impl CastFrom<i128> for UInt128 {
    #[inline]
    fn cast_from(input: i128) -> Self {
        Self::from_parts(input as u64, (input >> 64) as u64)
    }
}

impl CastFrom<Int128> for UInt128 {
    #[inline]
    fn cast_from(input: Int128) -> Self {
        input.to_bits()
    }
}

impl CastFrom<f64> for UInt128 {
    fn cast_from(input: f64) -> Self {
        // negative values wrap the same way `as` casts between the
        // primitive integer types do
        if input < 0.0 {
            Self::cast_from(-input).wrapping_neg()
        } else {
            Self::from(input as u128)
        }
    }
}

macro_rules! implement_truncating_casts {
    ($($T:ty),* $(,)?) => {
        $(
            impl CastFrom<UInt128> for $T {
                #[inline]
                fn cast_from(input: UInt128) -> $T {
                    input.lo as $T
                }
            }
        )*
    };
}

implement_truncating_casts!(u8, u16, u32, u64, i8, i16, i32, i64);

impl CastFrom<UInt128> for u128 {
    #[inline]
    fn cast_from(input: UInt128) -> u128 {
        u128::from(input)
    }
}

impl CastFrom<UInt128> for i128 {
    #[inline]
    fn cast_from(input: UInt128) -> i128 {
        u128::from(input) as i128
    }
}

impl CastFrom<UInt128> for f64 {
    #[inline]
    fn cast_from(input: UInt128) -> f64 {
        input.as_f64()
    }
}

impl From<UInt128> for BigUint {
    fn from(x: UInt128) -> BigUint {
        (BigUint::from(x.hi) << 64) | BigUint::from(x.lo)
    }
}

impl From<UInt128> for BigInt {
    fn from(x: UInt128) -> BigInt {
        BigUint::from(x).into()
    }
}

impl CastFrom<&BigUint> for UInt128 {
    /// Truncates to the low 128 bits.
    fn cast_from(input: &BigUint) -> Self {
        let mut digits = input.iter_u64_digits();
        let lo = digits.next().unwrap_or(0);
        let hi = digits.next().unwrap_or(0);
        Self::from_parts(lo, hi)
    }
}

impl CastFrom<&BigInt> for UInt128 {
    /// Truncates the magnitude to 128 bits and negates modulo 2^128 for
    /// negative inputs.
    fn cast_from(input: &BigInt) -> Self {
        let magnitude = Self::cast_from(input.magnitude());
        if input.sign() == num_bigint::Sign::Minus {
            magnitude.wrapping_neg()
        } else {
            magnitude
        }
    }
}

impl fmt::Display for UInt128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&BigUint::from(*self), f)
    }
}

impl fmt::LowerHex for UInt128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hi == 0 {
            return fmt::LowerHex::fmt(&self.lo, f);
        }
        let s = format!("{:x}{:016x}", self.hi, self.lo);
        f.pad_integral(true, "0x", &s)
    }
}

impl fmt::UpperHex for UInt128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hi == 0 {
            return fmt::UpperHex::fmt(&self.lo, f);
        }
        let s = format!("{:X}{:016X}", self.hi, self.lo);
        f.pad_integral(true, "0x", &s)
    }
}

impl fmt::Binary for UInt128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hi == 0 {
            return fmt::Binary::fmt(&self.lo, f);
        }
        let s = format!("{:b}{:064b}", self.hi, self.lo);
        f.pad_integral(true, "0b", &s)
    }
}

impl FromStr for UInt128 {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseIntError::new(ParseIntErrorKind::Empty));
        }
        let value: BigUint = s
            .parse()
            .map_err(|_| ParseIntError::new(ParseIntErrorKind::InvalidDigit))?;
        if value.bits() > 128 {
            return Err(ParseIntError::new(ParseIntErrorKind::PosOverflow));
        }
        Ok(Self::cast_from(&value))
    }
}

impl Numeric for UInt128 {
    const BITS: u32 = 128;
    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;
    const TWO: Self = Self::TWO;
    const MAX: Self = Self::MAX;
}

impl UnsignedNumeric for UInt128 {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    pub(crate) fn u64_with_odd_bits_set() -> u64 {
        let mut x = 0u64;
        for i in (1..=63).step_by(2) {
            x |= 1 << i;
        }
        x
    }

    pub(crate) fn u64_with_even_bits_set() -> u64 {
        let mut x = 0u64;
        for i in (0..=62).step_by(2) {
            x |= 1 << i;
        }
        x
    }

    #[test]
    fn test_const_values() {
        assert_eq!(u128::from(UInt128::ZERO), 0);
        assert_eq!(u128::from(UInt128::ONE), 1);
        assert_eq!(u128::from(UInt128::TWO), 2);
        assert_eq!(u128::from(UInt128::MAX), u128::MAX);
        assert_eq!(UInt128::MIN, UInt128::ZERO);
        assert!(UInt128::ZERO.is_zero());
        assert!(!UInt128::ONE.is_zero());
    }

    #[test]
    fn test_add_wrap_around() {
        assert_eq!(UInt128::MAX + UInt128::ONE, UInt128::ZERO);
        assert_eq!(UInt128::MAX + UInt128::MAX, UInt128::MAX - UInt128::ONE);

        // carry propagation across the limb boundary
        let a = UInt128::from_parts(u64::MAX, 0);
        assert_eq!(a + UInt128::ONE, UInt128::from_parts(0, 1));

        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let a = rng.gen::<u128>();
            let b = rng.gen::<u128>();
            assert_eq!(
                u128::from(UInt128::from(a) + UInt128::from(b)),
                a.wrapping_add(b)
            );
        }
    }

    #[test]
    fn test_sub_wrap_around() {
        assert_eq!(UInt128::ZERO - UInt128::ONE, UInt128::MAX);
        assert_eq!(
            UInt128::from_parts(0, 1) - UInt128::ONE,
            UInt128::from_parts(u64::MAX, 0)
        );

        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let a = rng.gen::<u128>();
            let b = rng.gen::<u128>();
            assert_eq!(
                u128::from(UInt128::from(a) - UInt128::from(b)),
                a.wrapping_sub(b)
            );
        }
    }

    #[test]
    fn test_overflowing_add_sub() {
        assert_eq!(
            UInt128::MAX.overflowing_add(UInt128::ONE),
            (UInt128::ZERO, true)
        );
        assert_eq!(
            UInt128::ZERO.overflowing_add(UInt128::ONE),
            (UInt128::ONE, false)
        );
        assert_eq!(
            UInt128::ZERO.overflowing_sub(UInt128::ONE),
            (UInt128::MAX, true)
        );
        assert_eq!(
            UInt128::ONE.overflowing_sub(UInt128::ONE),
            (UInt128::ZERO, false)
        );
    }

    #[test]
    fn test_neg_wrap_around() {
        assert_eq!(UInt128::ZERO.wrapping_neg(), UInt128::ZERO);
        assert_eq!(UInt128::ONE.wrapping_neg(), UInt128::MAX);
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let a = rng.gen::<u128>();
            assert_eq!(u128::from(UInt128::from(a).wrapping_neg()), a.wrapping_neg());
        }
    }

    #[test]
    fn test_mul_div_rem_operators() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let a = rng.gen::<u128>();
            let b = rng.gen::<u128>();
            assert_eq!(
                u128::from(UInt128::from(a) * UInt128::from(b)),
                a.wrapping_mul(b)
            );
            if b != 0 {
                assert_eq!(u128::from(UInt128::from(a) / UInt128::from(b)), a / b);
                assert_eq!(u128::from(UInt128::from(a) % UInt128::from(b)), a % b);
            }
        }
    }

    #[test]
    fn test_bitwise_ops() {
        let odd = u64_with_odd_bits_set();
        let even = u64_with_even_bits_set();
        let a = UInt128::from_parts(odd, even);
        let b = UInt128::from_parts(even, odd);

        assert_eq!(a & b, UInt128::ZERO);
        assert_eq!(a | b, UInt128::MAX);
        assert_eq!(a ^ b, UInt128::MAX);
        assert_eq!(!a, b);
        assert_eq!(a & UInt128::MAX, a);
        assert_eq!(a | UInt128::ZERO, a);

        let mut c = a;
        c &= b;
        assert_eq!(c, UInt128::ZERO);
        let mut c = a;
        c |= b;
        assert_eq!(c, UInt128::MAX);
        let mut c = a;
        c ^= a;
        assert_eq!(c, UInt128::ZERO);
    }

    #[test]
    fn test_shl_limits() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let a = rng.gen::<u128>();
            let x = UInt128::from(a);
            for shift in [0u32, 1, 17, 63, 64, 65, 100, 127] {
                assert_eq!(u128::from(x << shift), a << shift, "shift = {shift}");
                // shift amounts wrap modulo the bit width
                assert_eq!(x << (shift + 128), x << shift);
            }
        }
    }

    #[test]
    fn test_shr_limits() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let a = rng.gen::<u128>();
            let x = UInt128::from(a);
            for shift in [0u32, 1, 17, 63, 64, 65, 100, 127] {
                assert_eq!(u128::from(x >> shift), a >> shift, "shift = {shift}");
                assert_eq!(x >> (shift + 128), x >> shift);
            }
        }
    }

    #[test]
    fn test_shift_assign() {
        let mut x = UInt128::ONE;
        x <<= 127;
        assert_eq!(x, UInt128::from_parts(0, 1 << 63));
        x >>= 100;
        assert_eq!(u128::from(x), 1u128 << 27);
    }

    #[test]
    fn test_comparisons() {
        let small = UInt128::from_parts(u64::MAX, 0);
        let big = UInt128::from_parts(0, 1);
        assert!(small < big);
        assert!(big > small);
        assert_eq!(small.cmp(&small), Ordering::Equal);
        assert_eq!(UInt128::ZERO.min(big), UInt128::ZERO);
        assert_eq!(small.max(big), big);
        assert_eq!(big.clamp(UInt128::ZERO, small), small);

        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let a = rng.gen::<u128>();
            let b = rng.gen::<u128>();
            assert_eq!(UInt128::from(a).cmp(&UInt128::from(b)), a.cmp(&b));
        }
    }

    #[test]
    fn test_mixed_comparisons() {
        assert!(UInt128::from(7u64) == 7u64);
        assert!(3u32 < UInt128::from_parts(0, 1));
        assert!(UInt128::ZERO > -1i64);
        assert!(-1i64 < UInt128::ZERO);
        assert!(UInt128::from(5u64) == 5i32);
        assert!(UInt128::from(5u64) != -5i32);
        assert!(UInt128::MAX > i64::MAX);
    }

    #[test]
    fn test_scalar_mixed_ops() {
        let x = UInt128::from_parts(10, 1);
        assert_eq!(x + 5u64, UInt128::from_parts(15, 1));
        assert_eq!(x - 10u32, UInt128::from_parts(0, 1));
        assert_eq!(UInt128::from(7u64) * 3u64, UInt128::from(21u64));
        assert_eq!(100u64 + UInt128::ONE, UInt128::from(101u64));
        assert_eq!(x % 2u64, UInt128::ZERO);

        let mut y = x;
        y += 1u64;
        y *= 2u32;
        assert_eq!(y, (x + 1u64) * UInt128::TWO);

        assert!(x > 10u64);
        assert!(10u64 < x);
        assert_eq!(UInt128::from(42u64), 42u64);
        assert_eq!(42u128, UInt128::from(42u64));
    }

    #[test]
    fn test_pow() {
        assert_eq!(UInt128::TWO.wrapping_pow(0), UInt128::ONE);
        assert_eq!(UInt128::TWO.wrapping_pow(127), UInt128::from_parts(0, 1 << 63));
        assert_eq!(UInt128::TWO.wrapping_pow(128), UInt128::ZERO);
        assert_eq!(
            u128::from(UInt128::from(3u64).wrapping_pow(80)),
            3u128.wrapping_pow(80)
        );
        assert_eq!(UInt128::ZERO.wrapping_pow(0), UInt128::ONE);

        let x = UInt128::from(0x1234_5678u64);
        assert_eq!(x.squared(), x * x);
        assert_eq!(x.cubed(), x * x * x);
    }

    #[test]
    fn test_widening_mul_halves() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let a = rng.gen::<u128>();
            let b = rng.gen::<u128>();
            let (lo, hi) = UInt128::from(a).widening_mul(UInt128::from(b));
            let expected = num_bigint::BigUint::from(a) * num_bigint::BigUint::from(b);
            let got = (num_bigint::BigUint::from(hi) << 128) | num_bigint::BigUint::from(lo);
            assert_eq!(got, expected);
        }
        assert_eq!(
            UInt128::mul_wide(u64::MAX, u64::MAX),
            UInt128::from(u64::MAX as u128 * u64::MAX as u128)
        );
    }

    #[test]
    fn test_bit_counts() {
        assert_eq!(UInt128::ZERO.leading_zeros(), 128);
        assert_eq!(UInt128::ONE.leading_zeros(), 127);
        assert_eq!(UInt128::MAX.leading_zeros(), 0);
        assert_eq!(UInt128::from_parts(0, 1).leading_zeros(), 63);

        assert_eq!(UInt128::ZERO.trailing_zeros(), 128);
        assert_eq!(UInt128::from_parts(0, 1).trailing_zeros(), 64);
        assert_eq!(UInt128::MAX.count_ones(), 128);

        assert!(UInt128::from_parts(0, 1 << 20).is_power_of_two());
        assert!(!UInt128::from_parts(1, 1 << 20).is_power_of_two());
        assert!(!UInt128::ZERO.is_power_of_two());

        assert!(UInt128::ZERO.is_even());
        assert!(!UInt128::MAX.is_even());
        assert!(UInt128::from_parts(2, u64::MAX).is_even());

        assert_eq!(UInt128::ONE.ilog2(), 0);
        assert_eq!(UInt128::from_parts(0, 1).ilog2(), 64);
        assert_eq!(UInt128::MAX.ilog2(), 127);
        assert_eq!(UInt128::ONE.ceil_ilog2(), 0);
        assert_eq!(UInt128::from(5u64).ceil_ilog2(), 3);
        assert_eq!(UInt128::from_parts(0, 1).ceil_ilog2(), 64);
        assert_eq!(UInt128::from_parts(1, 1).ceil_ilog2(), 65);
    }

    #[test]
    #[should_panic(expected = "argument of integer logarithm must be positive")]
    fn test_ilog2_zero_panics() {
        let _ = UInt128::ZERO.ilog2();
    }

    #[test]
    fn test_float_conversions() {
        assert_eq!(UInt128::ZERO.as_f64(), 0.0);
        assert_eq!(UInt128::from(1u64 << 52).as_f64(), (1u64 << 52) as f64);
        assert_eq!(UInt128::from_parts(0, 1).as_f64(), 18446744073709551616.0);
        assert_eq!(UInt128::MAX.as_f64(), u128::MAX as f64);

        assert_eq!(UInt128::cast_from(0.0), UInt128::ZERO);
        assert_eq!(UInt128::cast_from(2.5f64), UInt128::TWO);
        assert_eq!(UInt128::cast_from(-1.0f64), UInt128::MAX);
        assert_eq!(UInt128::cast_from(f64::NAN), UInt128::ZERO);

        let x = UInt128::from_parts(0, 1 << 10);
        assert_eq!(UInt128::cast_from(x.as_f64()), x);

        assert_eq!(UInt128::from_parts(0, 1).log2(), 64.0);
        assert!((UInt128::from(1000u64).log10() - 3.0).abs() < 1e-12);
        assert!((UInt128::from(1000u64).ln() - 1000f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_integer_casts() {
        assert_eq!(UInt128::cast_from(-1i64), UInt128::MAX);
        assert_eq!(UInt128::cast_from(-1i8), UInt128::MAX);
        assert_eq!(
            UInt128::cast_from(i64::MIN),
            UInt128::from(i64::MIN as i128 as u128)
        );
        assert_eq!(UInt128::cast_from(-1i128), UInt128::MAX);
        assert_eq!(UInt128::from(true), UInt128::ONE);

        let x = UInt128::from_parts(0x1234, 0x5678);
        assert_eq!(u64::cast_from(x), 0x1234);
        assert_eq!(u8::cast_from(x), 0x34);
        assert_eq!(u128::cast_from(x), u128::from(x));
        assert_eq!(i128::cast_from(UInt128::MAX), -1);
    }

    #[test]
    fn test_biguint_round_trip() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let a = rng.gen::<u128>();
            let x = UInt128::from(a);
            let big = BigUint::from(x);
            assert_eq!(big, BigUint::from(a));
            assert_eq!(UInt128::cast_from(&big), x);
        }
        // truncation keeps the low 128 bits
        let big = BigUint::from(1u8) << 200;
        assert_eq!(UInt128::cast_from(&big), UInt128::ZERO);
        let big = (BigUint::from(1u8) << 200) | BigUint::from(7u8);
        assert_eq!(UInt128::cast_from(&big), UInt128::from(7u64));
    }

    #[test]
    fn test_bigint_conversions() {
        let x = UInt128::from(12345u64);
        assert_eq!(BigInt::from(x), BigInt::from(12345u64));
        assert_eq!(UInt128::cast_from(&BigInt::from(-1)), UInt128::MAX);
        assert_eq!(UInt128::cast_from(&BigInt::from(42)), UInt128::from(42u64));
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(UInt128::ZERO.to_string(), "0");
        assert_eq!(
            UInt128::MAX.to_string(),
            "340282366920938463463374607431768211455"
        );
        assert_eq!(UInt128::from_parts(0, 1).to_string(), "18446744073709551616");

        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let a = rng.gen::<u128>();
            let x = UInt128::from(a);
            assert_eq!(x.to_string(), a.to_string());
            assert_eq!(x.to_string().parse::<UInt128>().unwrap(), x);
        }

        assert_eq!("0".parse::<UInt128>().unwrap(), UInt128::ZERO);
        assert_eq!(
            "340282366920938463463374607431768211455"
                .parse::<UInt128>()
                .unwrap(),
            UInt128::MAX
        );
    }

    #[test]
    fn test_parse_errors() {
        use crate::error::ParseIntErrorKind;

        assert_eq!(
            "".parse::<UInt128>().unwrap_err().kind(),
            ParseIntErrorKind::Empty
        );
        assert_eq!(
            "12x4".parse::<UInt128>().unwrap_err().kind(),
            ParseIntErrorKind::InvalidDigit
        );
        assert_eq!(
            "-5".parse::<UInt128>().unwrap_err().kind(),
            ParseIntErrorKind::InvalidDigit
        );
        // one past MAX
        assert_eq!(
            "340282366920938463463374607431768211456"
                .parse::<UInt128>()
                .unwrap_err()
                .kind(),
            ParseIntErrorKind::PosOverflow
        );
    }

    #[test]
    fn test_hex_and_binary_formats() {
        let x = UInt128::from_parts(0x0123_4567_89ab_cdef, 0xfe);
        assert_eq!(format!("{x:x}"), "fe0123456789abcdef");
        assert_eq!(format!("{x:X}"), "FE0123456789ABCDEF");
        assert_eq!(format!("{x:#x}"), "0xfe0123456789abcdef");
        assert_eq!(format!("{:x}", UInt128::from(0xabu64)), "ab");
        assert_eq!(format!("{:#010x}", UInt128::from(0xabu64)), "0x000000ab");
        assert_eq!(format!("{:b}", UInt128::from(5u64)), "101");
        assert_eq!(
            format!("{:b}", UInt128::from_parts(1, 1)),
            format!("1{}1", "0".repeat(63))
        );

        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let a = rng.gen::<u128>();
            let x = UInt128::from(a);
            assert_eq!(format!("{x:x}"), format!("{a:x}"));
            assert_eq!(format!("{x:X}"), format!("{a:X}"));
            assert_eq!(format!("{x:b}"), format!("{a:b}"));
        }
    }

    #[test]
    fn test_named_math_entry_points() {
        let n = UInt128::from(1_000_000_007u64);
        let a = UInt128::from(123_456_789u64);
        let b = UInt128::from(987_654_321u64);

        assert_eq!(a.gcd(b), UInt128::from(9u64));
        assert_eq!(a.mod_add(b, n), (a + b) % n);
        assert_eq!(a.mod_sub(b, n), (a + n - b) % n);

        let mut c = a;
        c.mod_mul_assign(b, n);
        assert_eq!(c, a.mod_mul(b, n));

        assert_eq!(UInt128::from(17u64).floor_sqrt(), 4);
        assert_eq!(UInt128::from(17u64).ceil_sqrt(), 5);
        assert_eq!(UInt128::from(28u64).floor_cbrt(), 3);
        assert_eq!(UInt128::from(28u64).ceil_cbrt(), 4);

        let k0 = n.mont_k0();
        assert_eq!(k0.wrapping_mul(n.lo), u64::MAX);
    }

    #[test]
    fn test_div_rem_methods() {
        let x = UInt128::from_parts(0, 1);
        let (q, r) = x.div_rem(UInt128::from(3u64));
        assert_eq!(q, UInt128::from(0x5555_5555_5555_5555u64));
        assert_eq!(r, UInt128::ONE);

        let (q, r) = x.div_rem_u64(3);
        assert_eq!(q, UInt128::from(0x5555_5555_5555_5555u64));
        assert_eq!(r, 1);

        let (q, r) = x.div_rem_u32(3);
        assert_eq!(q, UInt128::from(0x5555_5555_5555_5555u64));
        assert_eq!(r, 1);
    }
}
