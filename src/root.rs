//! Integer square and cube roots. A float approximation seeds the result
//! and exact integer comparisons settle it, with a Newton iteration in
//! between for values too large for the float mantissa to resolve.

use crate::div::div_rem_u64;
use crate::mul::{cube_u64, mul_u64};
use crate::uint128::UInt128;

const MAX_REP_SHIFT: u32 = 53;
/// Largest integer the float mantissa represents exactly.
const MAX_REP: u64 = 1 << MAX_REP_SHIFT;
/// High limb of `MAX_REP` squared.
const MAX_REP_SQUARED_HIGH: u64 = 1 << (2 * MAX_REP_SHIFT - 64);
/// `floor(cbrt(2^128 - 1))`.
const CBRT_MAX: u64 = 6_981_463_658_331;

/// Largest `s` with `s * s <= a`.
pub(crate) fn floor_sqrt(a: UInt128) -> u64 {
    if a.hi == 0 && a.lo <= MAX_REP {
        return sqrt_fixup(a, (a.lo as f64).sqrt() as u64);
    }
    let s = a.as_f64().sqrt() as u64;
    if a.hi < MAX_REP_SQUARED_HIGH {
        sqrt_fixup(a, s)
    } else {
        sqrt_fixup(a, newton_sqrt(a, s.max(1)))
    }
}

/// Smallest `s` with `s * s >= a`. For values above the largest square of
/// a word the ceiling does not fit and the result wraps to zero.
pub(crate) fn ceil_sqrt(a: UInt128) -> u64 {
    let s = floor_sqrt(a);
    if mul_u64(s, s) == a {
        s
    } else {
        s.wrapping_add(1)
    }
}

/// Largest `s` with `s * s * s <= a`. The float seed is within one of the
/// exact root, so a single comparison on each side settles it.
pub(crate) fn floor_cbrt(a: UInt128) -> u64 {
    let mut s = (a.as_f64().cbrt() as u64).min(CBRT_MAX);
    let s3 = cube_u64(s);
    if a < s3 {
        s -= 1;
    } else {
        // (s + 1)^3 <= a exactly when a - s^3 exceeds 3s(s + 1)
        let sum = mul_u64(3 * s, s + 1);
        let diff = a.wrapping_sub(s3);
        if sum < diff {
            s += 1;
        }
    }
    s
}

/// Smallest `s` with `s * s * s >= a`.
pub(crate) fn ceil_cbrt(a: UInt128) -> u64 {
    let s = floor_cbrt(a);
    if cube_u64(s) == a {
        s
    } else {
        s + 1
    }
}

/// Newton iteration on `s -> (a/s + s)/2`. Stops when the iterate repeats,
/// picking the smaller value of a terminal two-cycle.
fn newton_sqrt(a: UInt128, mut s: u64) -> u64 {
    let mut sprev = 0u64;
    loop {
        let (q, _) = div_rem_u64(a, s);
        let snext = if q.hi != 0 {
            // the seed was far below the root, clamp the iterate
            u64::MAX
        } else {
            ((q.lo as u128 + s as u128) >> 1) as u64
        };
        if snext == sprev {
            if snext < s {
                s = snext;
            }
            break;
        }
        sprev = s;
        s = snext;
    }
    s
}

/// Settle a candidate near the root to the exact floor by re-squaring.
fn sqrt_fixup(a: UInt128, mut s: u64) -> u64 {
    while mul_u64(s, s) > a {
        s -= 1;
    }
    while s != u64::MAX && mul_u64(s + 1, s + 1) <= a {
        s += 1;
    }
    s
}
