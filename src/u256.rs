use crate::uint128::UInt128;

/// Crate-internal 256-bit accumulator, four little-endian limbs. Transient
/// only: the full multiply produces it and the wide remainder consumes it.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct U256(pub(crate) [u64; 4]);

impl U256 {
    /// Low 128 bits.
    pub(crate) const fn low(self) -> UInt128 {
        UInt128::from_parts(self.0[0], self.0[1])
    }

    /// True when the value fits in 128 bits.
    pub(crate) const fn fits_128(self) -> bool {
        self.0[2] == 0 && self.0[3] == 0
    }
}
