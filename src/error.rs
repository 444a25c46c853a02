use core::fmt;

/// The reason parsing a 128-bit integer from text failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseIntErrorKind {
    /// The input was empty.
    Empty,
    /// A character was not a digit (or a misplaced sign).
    InvalidDigit,
    /// The value does not fit in the target type.
    PosOverflow,
    /// The value is below the signed minimum.
    NegOverflow,
}

/// Error returned when parsing [`UInt128`](crate::UInt128) or
/// [`Int128`](crate::Int128) from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIntError {
    kind: ParseIntErrorKind,
}

impl ParseIntError {
    pub(crate) const fn new(kind: ParseIntErrorKind) -> Self {
        Self { kind }
    }

    pub const fn kind(&self) -> ParseIntErrorKind {
        self.kind
    }
}

impl fmt::Display for ParseIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            ParseIntErrorKind::Empty => "cannot parse integer from empty string",
            ParseIntErrorKind::InvalidDigit => "invalid digit found in string",
            ParseIntErrorKind::PosOverflow => "number too large to fit in target type",
            ParseIntErrorKind::NegOverflow => "number too small to fit in target type",
        };
        write!(f, "{msg}")
    }
}

impl std::error::Error for ParseIntError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ParseIntError::new(ParseIntErrorKind::InvalidDigit);
        assert_eq!(err.to_string(), "invalid digit found in string");
        assert_eq!(err.kind(), ParseIntErrorKind::InvalidDigit);
    }
}
