//! Word-level building blocks shared by the multi-limb algorithms.

/// Add with carry.
#[inline(always)]
pub(crate) const fn adc(l: u64, r: u64, c: bool) -> (u64, bool) {
    let (lr, o0) = l.overflowing_add(r);
    let (lrc, o1) = lr.overflowing_add(c as u64);
    (lrc, o0 | o1)
}

/// Subtract with borrow.
#[inline(always)]
pub(crate) const fn sbb(l: u64, r: u64, b: bool) -> (u64, bool) {
    let (lr, o0) = l.overflowing_sub(r);
    let (lrb, o1) = lr.overflowing_sub(b as u64);
    (lrb, o0 | o1)
}

#[inline(always)]
pub(crate) const fn to_double_digit(lo: u64, hi: u64) -> u128 {
    lo as u128 | ((hi as u128) << 64)
}

#[inline(always)]
pub(crate) const fn from_double_digit(x: u128) -> (u64, u64) {
    (x as u64, (x >> 64) as u64)
}

/// `l * r + c`, returned as (low, high). Cannot overflow: the product of two
/// words plus a word fits in a double word.
#[inline(always)]
pub(crate) const fn mul_with_carry(l: u64, r: u64, c: u64) -> (u64, u64) {
    from_double_digit(l as u128 * r as u128 + c as u128)
}

/// `acc + l * r + c`, returned as (low, high). Also exact: the maximum value
/// is exactly the double-word maximum.
#[inline(always)]
pub(crate) const fn mac_with_carry(acc: u64, l: u64, r: u64, c: u64) -> (u64, u64) {
    from_double_digit(l as u128 * r as u128 + acc as u128 + c as u128)
}

/// Number of significant bits, zero for zero.
#[inline(always)]
pub(crate) const fn bit_length_u64(x: u64) -> u32 {
    64 - x.leading_zeros()
}
