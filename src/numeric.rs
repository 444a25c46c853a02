//! Constants and conversion traits threaded through the integer types.

/// Common constants shared by the numeric types of this crate and the
/// native integers they interoperate with.
pub trait Numeric: Sized + Copy + PartialEq + PartialOrd + Default {
    const BITS: u32;
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    const MAX: Self;
}

/// Marker for unsigned numeric types.
pub trait UnsignedNumeric: Numeric {}

/// Marker for signed numeric types.
pub trait SignedNumeric: Numeric {
    const MIN: Self;
}

/// Value-to-value conversion that may truncate, wrap or round, as documented
/// by each impl. The counterpart of `From` for conversions that are not
/// lossless.
pub trait CastFrom<Input> {
    fn cast_from(input: Input) -> Self;
}

/// Inverse of [`CastFrom`], implemented for free via the blanket impl.
pub trait CastInto<Output> {
    fn cast_into(self) -> Output;
}

impl<Input, Output> CastInto<Output> for Input
where
    Output: CastFrom<Input>,
{
    #[inline]
    fn cast_into(self) -> Output {
        Output::cast_from(self)
    }
}

macro_rules! implement_unsigned {
    ($($T:ty),*) => {
        $(
            impl Numeric for $T {
                const BITS: u32 = <$T>::BITS;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const TWO: Self = 2;
                const MAX: Self = <$T>::MAX;
            }
            impl UnsignedNumeric for $T {}
        )*
    };
}

macro_rules! implement_signed {
    ($($T:ty),*) => {
        $(
            impl Numeric for $T {
                const BITS: u32 = <$T>::BITS;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const TWO: Self = 2;
                const MAX: Self = <$T>::MAX;
            }
            impl SignedNumeric for $T {
                const MIN: Self = <$T>::MIN;
            }
        )*
    };
}

implement_unsigned!(u8, u16, u32, u64, u128);
implement_signed!(i8, i16, i32, i64, i128);
