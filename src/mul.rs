//! Widening multiplication. Everything wider is built from schoolbook rows
//! of 64×64 word products with explicit carry propagation.

use crate::limb::{mac_with_carry, mul_with_carry};
use crate::u256::U256;
use crate::uint128::UInt128;

/// Exact 64×64→128 product.
#[inline(always)]
pub(crate) const fn mul_u64(a: u64, b: u64) -> UInt128 {
    let (lo, hi) = mul_with_carry(a, b, 0);
    UInt128::from_parts(lo, hi)
}

/// Wrapping 128×64→128: the high-limb product folds in modulo 2^128.
#[inline(always)]
pub(crate) const fn wrapping_mul_u64(a: UInt128, b: u64) -> UInt128 {
    let (lo, carry) = mul_with_carry(a.lo, b, 0);
    UInt128::from_parts(lo, a.hi.wrapping_mul(b).wrapping_add(carry))
}

/// Wrapping 128×128→128.
#[inline]
pub(crate) const fn wrapping_mul(a: UInt128, b: UInt128) -> UInt128 {
    let (lo, carry) = mul_with_carry(a.lo, b.lo, 0);
    let hi = a
        .lo
        .wrapping_mul(b.hi)
        .wrapping_add(a.hi.wrapping_mul(b.lo))
        .wrapping_add(carry);
    UInt128::from_parts(lo, hi)
}

/// Exact 128×128→256: the four cross products in two schoolbook rows.
#[inline]
pub(crate) const fn widening_mul(a: UInt128, b: UInt128) -> U256 {
    let (x0, carry) = mul_with_carry(a.lo, b.lo, 0);
    let (t1, t2) = mul_with_carry(a.lo, b.hi, carry);
    let (x1, carry) = mac_with_carry(t1, a.hi, b.lo, 0);
    let (x2, x3) = mac_with_carry(t2, a.hi, b.hi, carry);
    U256([x0, x1, x2, x3])
}

/// Exact cube of a word. Only valid while the cube fits in 128 bits,
/// i.e. for `s` up to the cube root of 2^128 - 1.
#[inline]
pub(crate) const fn cube_u64(s: u64) -> UInt128 {
    wrapping_mul_u64(mul_u64(s, s), s)
}
