//! Big integers are represented as a vector of smaller CPU word-size
//! integers called "limbs".

mod add;
mod bits;
mod from;
mod mul;
mod sub;

use core::fmt;

/// Unsigned integer type the limbs are composed of.
///
/// The representation is fixed at 64 bits per limb; magnitudes are stored
/// least-significant limb first.
pub type Word = u64;

/// Unsigned integer type that is double the width of [`Word`], used for
/// carrying intermediates in addition, multiplication, and reduction.
pub type WideWord = u128;

/// Big integers are represented as a vector of smaller CPU word-size
/// integers called "limbs".
#[derive(Copy, Clone, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Limb(pub Word);

impl Limb {
    /// The value `0`.
    pub const ZERO: Self = Limb(0);

    /// The value `1`.
    pub const ONE: Self = Limb(1);

    /// Maximum value this [`Limb`] can express.
    pub const MAX: Self = Limb(Word::MAX);

    /// Size of the inner integer in bits.
    pub const BITS: u32 = Word::BITS;

    /// Size of the inner integer in bytes.
    pub const BYTES: usize = 8;

    /// Is this limb equal to zero?
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for Limb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Limb(0x{self:X})")
    }
}

impl fmt::Display for Limb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

impl fmt::LowerHex for Limb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$x}", &self.0, width = Self::BYTES * 2)
    }
}

impl fmt::UpperHex for Limb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$X}", &self.0, width = Self::BYTES * 2)
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for Limb {}

#[cfg(test)]
mod tests {
    use super::Limb;
    use alloc::format;

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", Limb(42)), "Limb(0x000000000000002A)");
    }

    #[test]
    fn lower_hex() {
        assert_eq!(format!("{:x}", Limb(0xab)), "00000000000000ab");
    }
}
