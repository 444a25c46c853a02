//! Greatest common divisor by the Lehmer-Euclid algorithm. Batches of
//! Euclid steps are simulated in signed 64-bit arithmetic on the high bits
//! of both operands, with Jebelean's condition deciding how many simulated
//! steps are valid before the full-width operands are recombined.
//! See: https://citeseerx.ist.psu.edu/viewdoc/summary?doi=10.1.1.31.693

use crate::div::div_rem;
use crate::limb::bit_length_u64;
use crate::mul::wrapping_mul_u64;
use crate::uint128::UInt128;

pub(crate) fn gcd(a: UInt128, b: UInt128) -> UInt128 {
    // When exactly one operand is wider than 64 bits, a single remainder
    // step brings both under 64 bits and the double-width loop is skipped.
    let (mut a1, mut b1) = if (a.hi == 0) == (b.hi == 0) || a.is_zero() || b.is_zero() {
        (a, b)
    } else if a < b {
        (a, div_rem(b, a).1)
    } else {
        (div_rem(a, b).1, b)
    };

    if a1.is_zero() {
        return b1;
    }
    if b1.is_zero() {
        return a1;
    }

    if a1 < b1 {
        std::mem::swap(&mut a1, &mut b1);
    }

    while a1.hi != 0 && !b1.is_zero() {
        // extract the high 63 bits of both operands at a common shift
        let norm = 63 - bit_length_u64(a1.hi) as i32;
        let mut uhat = high_bits(a1, norm) as i64;
        let mut vhat = high_bits(b1, norm) as i64;

        // the quotient exceeds single precision, do one exact step
        if vhat == 0 {
            let r = div_rem(a1, b1).1;
            a1 = b1;
            b1 = r;
            continue;
        }

        // simulate Euclid steps on the high bits, tracking the cosequence
        let mut x0 = 1i64;
        let mut y0 = 0i64;
        let mut x1 = 0i64;
        let mut y1 = 1i64;
        let mut even = true;
        loop {
            let q = uhat / vhat;
            let x2 = x0.wrapping_sub(q.wrapping_mul(x1));
            let y2 = y0.wrapping_sub(q.wrapping_mul(y1));
            let t = uhat;
            uhat = vhat;
            vhat = t - q * vhat;
            even = !even;

            // Jebelean's condition decides whether q was still valid
            if even {
                if vhat < x2.wrapping_neg() || uhat - vhat < y2.wrapping_sub(y1) {
                    break;
                }
            } else if vhat < y2.wrapping_neg() || uhat - vhat < x2.wrapping_sub(x1) {
                break;
            }

            x0 = x1;
            y0 = y1;
            x1 = x2;
            y1 = y2;
        }

        // no simulated step was valid, do one exact step
        if x0 == 1 && y0 == 0 {
            let r = div_rem(a1, b1).1;
            a1 = b1;
            b1 = r;
            continue;
        }

        // recombine the last valid cosequence pair with the full operands
        let (anew, bnew) = if even {
            (add_products(y0, b1, x0, a1), add_products(x1, a1, y1, b1))
        } else {
            (add_products(x0, a1, y0, b1), add_products(y1, b1, x1, a1))
        };
        a1 = anew;
        b1 = bnew;
    }

    if b1.is_zero() {
        return a1;
    }

    // both operands fit a word now
    let mut a2 = a1.lo;
    let mut b2 = b1.lo;
    while a2 > u32::MAX as u64 && b2 != 0 {
        let t = a2 % b2;
        a2 = b2;
        b2 = t;
    }
    if b2 == 0 {
        return UInt128::from(a2);
    }

    let mut a3 = a2 as u32;
    let mut b3 = b2 as u32;
    while b3 != 0 {
        let t = a3 % b3;
        a3 = b3;
        b3 = t;
    }
    UInt128::from(a3)
}

/// High 63 bits of `x`, where `norm` is chosen from the bit length of the
/// larger operand and can be -1 when that operand uses all 128 bits.
#[inline]
fn high_bits(x: UInt128, norm: i32) -> u64 {
    if norm < 0 {
        x.hi >> 1
    } else if norm == 0 {
        x.hi
    } else {
        x.hi << norm | x.lo >> (64 - norm)
    }
}

/// `x * u + y * v` where `y <= 0` and the true sum is nonnegative and fits
/// 128 bits, so the wrapping products cancel exactly.
#[inline]
fn add_products(x: i64, u: UInt128, y: i64, v: UInt128) -> UInt128 {
    let p1 = wrapping_mul_u64(u, x as u64);
    let p2 = wrapping_mul_u64(v, y.wrapping_neg() as u64);
    p1.wrapping_sub(p2)
}
