use core::fmt;

/// Failures of the fixed-width decoders and of multi-scalar multiplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Byte input whose length does not match the fixed encoding width.
    InputLength { expected: usize, found: usize },
    /// Hex string with a non-hex digit or an odd number of digits.
    InvalidHex,
    /// Decoded affine coordinates do not satisfy the curve equation.
    NotOnCurve,
    /// Bases and scalars of a multi-scalar multiplication differ in length.
    LengthMismatch { points: usize, scalars: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InputLength { expected, found } => write!(
                f,
                "input length error: expected {} bytes, found {}",
                expected, found
            ),
            Error::InvalidHex => write!(f, "invalid hex string"),
            Error::NotOnCurve => write!(f, "point is not on curve"),
            Error::LengthMismatch { points, scalars } => write!(
                f,
                "point and scalar vectors should be in same length: {} points, {} scalars",
                points, scalars
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<hex::FromHexError> for Error {
    fn from(_err: hex::FromHexError) -> Self {
        Error::InvalidHex
    }
}
