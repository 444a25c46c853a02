//! Division. A ladder of special cases: divisors that fit 32 bits go through
//! schoolbook short division in 32-bit digits, 64-bit divisors through short
//! division in 64-bit digits, and two-limb divisors through algorithm D.
//! See Knuth, The Art of Computer Programming, vol. 2, section 4.3.1.

use crate::limb::{adc, mul_with_carry, sbb, to_double_digit};
use crate::u256::U256;
use crate::uint128::UInt128;

/// Quotient and remainder, dispatching on the size class of the divisor.
/// Panics if `v` is zero.
pub(crate) fn div_rem(u: UInt128, v: UInt128) -> (UInt128, UInt128) {
    if v.hi == 0 {
        if v.lo <= u32::MAX as u64 {
            let (q, r) = div_rem_u32(u, v.lo as u32);
            (q, UInt128::from_parts(r as u64, 0))
        } else {
            let (q, r) = div_rem_u64(u, v.lo);
            (q, UInt128::from_parts(r, 0))
        }
    } else if u < v {
        (UInt128::ZERO, u)
    } else {
        div_rem_knuth(u, v)
    }
}

/// Short division by a single 32-bit digit. Every intermediate dividend
/// fits a word, so no 128-bit division is needed.
pub(crate) fn div_rem_u32(u: UInt128, v: u32) -> (UInt128, u32) {
    let d = v as u64;
    let t3 = u.hi >> 32;
    let q3 = t3 / d;
    let t2 = (t3 % d) << 32 | (u.hi & 0xffff_ffff);
    let q2 = t2 / d;
    let t1 = (t2 % d) << 32 | (u.lo >> 32);
    let q1 = t1 / d;
    let t0 = (t1 % d) << 32 | (u.lo & 0xffff_ffff);
    let q0 = t0 / d;
    let r = (t0 % d) as u32;
    (UInt128::from_parts(q1 << 32 | q0, q3 << 32 | q2), r)
}

/// Short division by a single 64-bit digit.
pub(crate) fn div_rem_u64(u: UInt128, v: u64) -> (UInt128, u64) {
    let q_hi = u.hi / v;
    let r_hi = u.hi % v;
    // r_hi < v, so the double digit divided by v fits a single digit
    let t = to_double_digit(u.lo, r_hi);
    let q_lo = (t / v as u128) as u64;
    let r = (t % v as u128) as u64;
    (UInt128::from_parts(q_lo, q_hi), r)
}

/// Algorithm D for a two-limb divisor. The quotient is a single digit since
/// `u < 2^128` and `v >= 2^64`.
pub(crate) fn div_rem_knuth(u: UInt128, v: UInt128) -> (UInt128, UInt128) {
    debug_assert!(v.hi != 0);
    debug_assert!(u >= v);

    let s = v.hi.leading_zeros();
    let (vn1, vn0, un2, un1, un0) = if s == 0 {
        (v.hi, v.lo, 0, u.hi, u.lo)
    } else {
        (
            v.hi << s | v.lo >> (64 - s),
            v.lo << s,
            u.hi >> (64 - s),
            u.hi << s | u.lo >> (64 - s),
            u.lo << s,
        )
    };

    let mut q = knuth_qhat(un2, un1, un0, vn1, vn0);

    let (p0, p1) = mul_with_carry(q, vn0, 0);
    let (p1, p2) = mul_with_carry(q, vn1, p1);
    let (mut r0, borrow) = sbb(un0, p0, false);
    let (mut r1, borrow) = sbb(un1, p1, borrow);
    let (_, borrow) = sbb(un2, p2, borrow);

    if borrow {
        // the estimate was one too large, add the divisor back
        q -= 1;
        let (t0, carry) = adc(r0, vn0, false);
        let (t1, _) = adc(r1, vn1, carry);
        r0 = t0;
        r1 = t1;
    }

    let r = if s == 0 {
        UInt128::from_parts(r0, r1)
    } else {
        UInt128::from_parts(r0 >> s | r1 << (64 - s), r1 >> s)
    };
    (UInt128::from_parts(q, 0), r)
}

/// Remainder of a four-limb value by a two-limb divisor, for reducing double
/// width products. Three digit steps of algorithm D, with the quotient digits
/// discarded.
pub(crate) fn rem_wide(u: U256, v: UInt128) -> UInt128 {
    debug_assert!(v.hi != 0);

    if u.fits_128() {
        let x = u.low();
        if x < v {
            return x;
        }
        return div_rem_knuth(x, v).1;
    }

    let s = v.hi.leading_zeros();
    let (vn1, vn0) = if s == 0 {
        (v.hi, v.lo)
    } else {
        (v.hi << s | v.lo >> (64 - s), v.lo << s)
    };
    let [x0, x1, x2, x3] = u.0;
    let mut un = if s == 0 {
        [x0, x1, x2, x3, 0]
    } else {
        [
            x0 << s,
            x1 << s | x0 >> (64 - s),
            x2 << s | x1 >> (64 - s),
            x3 << s | x2 >> (64 - s),
            x3 >> (64 - s),
        ]
    };

    let mut j = 2;
    loop {
        let qhat = knuth_qhat(un[j + 2], un[j + 1], un[j], vn1, vn0);

        let (p0, p1) = mul_with_carry(qhat, vn0, 0);
        let (p1, p2) = mul_with_carry(qhat, vn1, p1);
        let (r0, borrow) = sbb(un[j], p0, false);
        let (r1, borrow) = sbb(un[j + 1], p1, borrow);
        let (r2, borrow) = sbb(un[j + 2], p2, borrow);
        un[j] = r0;
        un[j + 1] = r1;
        un[j + 2] = r2;

        if borrow {
            let (t0, carry) = adc(un[j], vn0, false);
            let (t1, carry) = adc(un[j + 1], vn1, carry);
            un[j] = t0;
            un[j + 1] = t1;
            un[j + 2] = un[j + 2].wrapping_add(carry as u64);
        }

        if j == 0 {
            break;
        }
        j -= 1;
    }

    if s == 0 {
        UInt128::from_parts(un[0], un[1])
    } else {
        UInt128::from_parts(un[0] >> s | un[1] << (64 - s), un[1] >> s)
    }
}

/// Estimate of a quotient digit from the top three dividend digits and the
/// two divisor digits. After normalization the estimate is off by at most
/// one, and the loop below runs at most twice.
#[inline]
fn knuth_qhat(u2: u64, u1: u64, u0: u64, v1: u64, v0: u64) -> u64 {
    debug_assert!(u2 <= v1);
    let u21 = to_double_digit(u1, u2);
    let (mut qhat, mut rhat) = if u2 >= v1 {
        (u64::MAX as u128, u21 - (u64::MAX as u128) * (v1 as u128))
    } else {
        (u21 / v1 as u128, u21 % v1 as u128)
    };
    while rhat <= u64::MAX as u128 && qhat * v0 as u128 > (rhat << 64 | u0 as u128) {
        qhat -= 1;
        rhat += v1 as u128;
    }
    qhat as u64
}
