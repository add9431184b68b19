//! Error type.

use core::fmt;

/// Errors produced by fallible operations.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// A hex string contained a character outside `0-9a-fA-F`.
    InvalidHexDigit,

    /// The value does not fit in a signed 64-bit integer.
    Int64Overflow,

    /// The element has no inverse for the given modulus.
    NotInvertible,

    /// A Montgomery context requires an odd modulus.
    EvenModulus,

    /// A reduction context requires a nonzero modulus.
    ZeroModulus,

    /// Prime generation requires a bit length of at least 2.
    PrimeBitLength,

    /// Prime generation exhausted its attempt budget without finding a prime.
    PrimeSearchExhausted,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHexDigit => write!(f, "invalid hex digit"),
            Self::Int64Overflow => write!(f, "value does not fit in an i64"),
            Self::NotInvertible => write!(f, "modular inverse does not exist"),
            Self::EvenModulus => write!(f, "Montgomery form requires an odd modulus"),
            Self::ZeroModulus => write!(f, "modulus cannot be zero"),
            Self::PrimeBitLength => write!(f, "prime bit length must be at least 2"),
            Self::PrimeSearchExhausted => {
                write!(f, "failed to generate a prime within the attempt budget")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
