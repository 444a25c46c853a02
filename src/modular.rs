//! Modular arithmetic on 128-bit residues. Operands are expected to be
//! reduced modulo `n` on entry. The Montgomery routines additionally take
//! the precomputed constant `k0 = -n^-1 mod 2^64` and keep values in
//! Montgomery form, for repeated products against a fixed odd modulus.

use crate::div::{div_rem_u64, rem_wide};
use crate::limb::{adc, mac_with_carry, mul_with_carry};
use crate::mul::{mul_u64, widening_mul};
use crate::uint128::UInt128;

/// `(a + b) mod n` for `a, b < n`.
pub(crate) fn mod_add(a: UInt128, b: UInt128, n: UInt128) -> UInt128 {
    let c = a.wrapping_add(b);
    // reduce when the sum reached n or wrapped past 2^128
    if !(c < n) || (c < a && c < b) {
        c.wrapping_sub(n)
    } else {
        c
    }
}

/// `(a - b) mod n` for `a, b < n`.
pub(crate) fn mod_sub(a: UInt128, b: UInt128, n: UInt128) -> UInt128 {
    let c = a.wrapping_sub(b);
    if a < b {
        c.wrapping_add(n)
    } else {
        c
    }
}

/// `(a * b) mod n` for `a, b < n`. A single-word modulus keeps the whole
/// product in 128 bits; otherwise the double-width product is reduced.
pub(crate) fn mod_mul(a: UInt128, b: UInt128, n: UInt128) -> UInt128 {
    if n.hi == 0 {
        let t = mul_u64(a.lo, b.lo);
        UInt128::from_parts(div_rem_u64(t, n.lo).1, 0)
    } else {
        rem_wide(widening_mul(a, b), n)
    }
}

/// `value^exponent mod n` by binary exponentiation. The final squaring is
/// skipped once the top set bit of the exponent has been consumed.
pub(crate) fn mod_pow(value: UInt128, exponent: UInt128, n: UInt128) -> UInt128 {
    let mut result = UInt128::ONE;
    let mut v = value;
    let mut e = exponent.lo;
    if exponent.hi != 0 {
        // the low word participates in full, trailing squarings included
        for _ in 0..64 {
            if e & 1 != 0 {
                result = mod_mul(result, v, n);
            }
            v = mod_mul(v, v, n);
            e >>= 1;
        }
        e = exponent.hi;
    }
    while e != 0 {
        if e & 1 != 0 {
            result = mod_mul(result, v, n);
        }
        if e != 1 {
            v = mod_mul(v, v, n);
        }
        e >>= 1;
    }
    result
}

/// `-n^-1 mod 2^64` for an odd modulus: the extended Euclid run on
/// `(n mod 2^64, 2^64)`, with the Bezout coefficient tracked in wrapping
/// 64-bit arithmetic.
pub(crate) fn mont_k0(n: UInt128) -> u64 {
    assert_eq!(n.lo % 2, 1);

    let mut old_r = n.lo as u128;
    let mut r = 1u128 << 64;
    let mut old_s = 1u64;
    let mut s = 0u64;
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);

        let q = q as u64;
        (old_s, s) = (s, old_s.wrapping_sub(q.wrapping_mul(s)));
    }
    assert_eq!(old_s.wrapping_mul(n.lo), 1);
    old_s.wrapping_neg()
}

/// Montgomery product `u * v * 2^-128 mod n` for `u, v < n`, interleaving
/// the schoolbook rows of the product with the two reduction folds.
/// See Montgomery, Modular multiplication without trial division,
/// Mathematics of Computation 44, 1985.
pub(crate) fn mont_mul(u: UInt128, v: UInt128, n: UInt128, k0: u64) -> UInt128 {
    // first row of the product
    let (mut t0, c) = mul_with_carry(u.lo, v.lo, 0);
    let (mut t1, mut t2) = mul_with_carry(u.hi, v.lo, c);

    // first fold: the low limb of m * n + t cancels by the choice of m
    let m = t0.wrapping_mul(k0);
    let (_, hi) = mul_with_carry(m, n.lo, t0);
    let (lo, c) = mac_with_carry(t1, m, n.hi, hi);
    t0 = lo;
    let (lo, c2) = adc(c, t2, false);
    t1 = lo;
    t2 = c2 as u64;

    // second row
    let (lo, c) = mul_with_carry(u.lo, v.hi, t0);
    t0 = lo;
    let (lo, c) = mac_with_carry(t1, u.hi, v.hi, c);
    t1 = lo;
    let (lo, c2) = adc(c, t2, false);
    t2 = lo;
    let t3 = c2 as u64;

    // second fold
    let m = t0.wrapping_mul(k0);
    let (_, hi) = mul_with_carry(m, n.lo, t0);
    let (lo, c) = mac_with_carry(t1, m, n.hi, hi);
    t0 = lo;
    let (lo, c2) = adc(c, t2, false);
    t1 = lo;
    t2 = t3 + c2 as u64;

    let w = UInt128::from_parts(t0, t1);
    if t2 != 0 || !(w < n) {
        w.wrapping_sub(n)
    } else {
        w
    }
}

/// Montgomery reduction `t * 2^-128 mod n` of a single-width value, the
/// multiply-free way out of Montgomery form.
pub(crate) fn mont_reduce(t: UInt128, n: UInt128, k0: u64) -> UInt128 {
    let mut t0 = t.lo;
    let mut t1 = t.hi;
    let mut t2 = 0u64;

    for _ in 0..2 {
        let m = t0.wrapping_mul(k0);
        let (_, hi) = mul_with_carry(m, n.lo, t0);
        let (lo, c) = mac_with_carry(t1, m, n.hi, hi);
        t0 = lo;
        let (lo, c2) = adc(c, t2, false);
        t1 = lo;
        t2 = c2 as u64;
    }

    let w = UInt128::from_parts(t0, t1);
    if t2 != 0 || !(w < n) {
        w.wrapping_sub(n)
    } else {
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::CastFrom;
    use num_bigint::BigUint;
    use rand::Rng;

    fn big(x: u128) -> BigUint {
        BigUint::from(x)
    }

    #[test]
    fn test_mod_add_sub_wraparound() {
        let mut rng = rand::thread_rng();
        for _ in 0..500 {
            let n = rng.gen::<u128>() | 1 << 127;
            let a = rng.gen_range(0..n);
            let b = rng.gen_range(0..n);
            let sum = mod_add(UInt128::from(a), UInt128::from(b), UInt128::from(n));
            assert_eq!(BigUint::from(sum), (big(a) + big(b)) % big(n));
            let diff = mod_sub(UInt128::from(a), UInt128::from(b), UInt128::from(n));
            assert_eq!(
                BigUint::from(diff),
                (big(a) + big(n) - big(b)) % big(n)
            );
        }
    }

    #[test]
    fn test_mod_add_edge_values() {
        let n = UInt128::MAX;
        let a = n - UInt128::ONE;
        assert_eq!(mod_add(a, a, n), n - UInt128::TWO);
        assert_eq!(mod_add(UInt128::ZERO, UInt128::ZERO, n), UInt128::ZERO);
        assert_eq!(mod_sub(UInt128::ZERO, a, n), UInt128::ONE);
    }

    #[test]
    fn test_mod_mul_single_word_modulus() {
        let mut rng = rand::thread_rng();
        for _ in 0..500 {
            let n = rng.gen_range(2..=u64::MAX) as u128;
            let a = rng.gen_range(0..n);
            let b = rng.gen_range(0..n);
            let got = mod_mul(UInt128::from(a), UInt128::from(b), UInt128::from(n));
            assert_eq!(u128::from(got), a * b % n);
        }
    }

    #[test]
    fn test_mod_mul_double_word_modulus() {
        let mut rng = rand::thread_rng();
        for _ in 0..500 {
            let n = rng.gen::<u128>() | 1 << 64;
            let a = rng.gen_range(0..n);
            let b = rng.gen_range(0..n);
            let got = mod_mul(UInt128::from(a), UInt128::from(b), UInt128::from(n));
            assert_eq!(BigUint::from(got), big(a) * big(b) % big(n));
        }
    }

    #[test]
    fn test_mod_pow_matches_reference() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let n = rng.gen_range(2..u128::MAX);
            let v = rng.gen_range(0..n);
            let e = rng.gen::<u128>();
            let got = mod_pow(UInt128::from(v), UInt128::from(e), UInt128::from(n));
            let expected = big(v).modpow(&big(e), &big(n));
            assert_eq!(BigUint::from(got), expected);
        }
    }

    #[test]
    fn test_mod_pow_trivial_exponents() {
        let n = UInt128::from_parts(11, 3);
        let v = UInt128::from(12345u64);
        assert_eq!(mod_pow(v, UInt128::ZERO, n), UInt128::ONE);
        assert_eq!(mod_pow(v, UInt128::ONE, n), v);
        assert_eq!(mod_pow(v, UInt128::TWO, n), mod_mul(v, v, n));
    }

    #[test]
    fn test_mod_pow_fermat() {
        // a^(p-1) = 1 mod p for prime p and a not divisible by p
        let p = UInt128::from(1_000_000_007u64);
        for a in [2u64, 3, 12345, 999_999_999] {
            assert_eq!(
                mod_pow(UInt128::from(a), p - UInt128::ONE, p),
                UInt128::ONE
            );
        }

        // the Mersenne prime 2^127 - 1 exercises the double-word exponent
        let p = UInt128::from((1u128 << 127) - 1);
        for a in [2u64, 3, 65537] {
            assert_eq!(
                mod_pow(UInt128::from(a), p - UInt128::ONE, p),
                UInt128::ONE
            );
        }
    }

    #[test]
    fn test_mont_k0_inverse_identity() {
        let mut rng = rand::thread_rng();
        for _ in 0..500 {
            let n = UInt128::from(rng.gen::<u128>() | 1);
            let k0 = mont_k0(n);
            // k0 * n = -1 mod 2^64
            assert_eq!(k0.wrapping_mul(n.lo), u64::MAX);
        }
    }

    #[test]
    fn test_mont_mul_and_reduce() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let n = rng.gen::<u128>() | 1 << 127 | 1;
            let a = rng.gen_range(0..n);
            let b = rng.gen_range(0..n);
            let nn = UInt128::from(n);
            let k0 = mont_k0(nn);

            let abar = UInt128::cast_from(&((big(a) << 128) % big(n)));
            let bbar = UInt128::cast_from(&((big(b) << 128) % big(n)));

            // products of Montgomery forms stay in Montgomery form
            let prod = mont_mul(abar, bbar, nn, k0);
            assert_eq!(
                BigUint::from(prod),
                (big(a) * big(b) << 128) % big(n)
            );

            // one operand out of Montgomery form gives the plain product
            let mixed = mont_mul(abar, UInt128::from(b), nn, k0);
            assert_eq!(mixed, mod_mul(UInt128::from(a), UInt128::from(b), nn));

            // reduction undoes the Montgomery form
            assert_eq!(mont_reduce(abar, nn, k0), UInt128::from(a));
        }
    }
}
