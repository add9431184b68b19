//! Heap-allocated big signed integers.

mod add;
mod bit_and;
mod bit_or;
mod bit_xor;
mod bits;
mod cmp;
mod div;
pub(crate) mod encoding;
mod from;
mod gcd;
mod inv_mod;
mod mul;
mod neg;
mod pow_mod;
mod prime;
mod rand;
mod shl;
mod shr;
mod sub;

#[cfg(feature = "serde")]
mod serde;

use crate::{Limb, Word};
use alloc::vec::Vec;
use core::fmt;

/// Arbitrary-precision signed integer.
///
/// The value is stored as a sign flag plus a magnitude: a vector of
/// [`Limb`]s ordered least significant first. The representation is kept
/// normalized so that equal values always have equal representations:
///
/// - the limb vector is never empty;
/// - the most significant limb is nonzero unless the value is zero;
/// - zero is a single zero limb with the sign flag cleared (there is no
///   negative zero).
///
/// Operations treat values as immutable snapshots: every operator
/// allocates a fresh result, and the compound-assignment forms are
/// defined as `x = x ⊕ y`.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct BigInt {
    /// Magnitude limbs, least significant first.
    limbs: Vec<Limb>,
    /// Sign flag. Never set when the magnitude is zero.
    negative: bool,
}

impl BigInt {
    /// Get the value `0`.
    pub fn zero() -> Self {
        Self {
            limbs: alloc::vec![Limb::ZERO],
            negative: false,
        }
    }

    /// Get the value `1`.
    pub fn one() -> Self {
        Self {
            limbs: alloc::vec![Limb::ONE],
            negative: false,
        }
    }

    /// Get the value `2`.
    pub fn two() -> Self {
        Self {
            limbs: alloc::vec![Limb(2)],
            negative: false,
        }
    }

    /// Create a [`BigInt`] from a little-endian sequence of [`Word`]s plus
    /// a sign flag.
    ///
    /// Leading zero words are stripped, and a negative zero is normalized
    /// to the canonical (positive) zero.
    pub fn from_words(words: impl IntoIterator<Item = Word>, negative: bool) -> Self {
        Self::from_limbs(words.into_iter().map(Limb).collect(), negative)
    }

    /// Construct from raw parts, restoring the representation invariants.
    pub(crate) fn from_limbs(limbs: Vec<Limb>, negative: bool) -> Self {
        let mut ret = Self { limbs, negative };
        ret.normalize();
        ret
    }

    /// Construct a non-negative value from magnitude limbs.
    pub(crate) fn from_magnitude(limbs: Vec<Limb>) -> Self {
        Self::from_limbs(limbs, false)
    }

    /// Strip leading zero limbs and clear the sign of zero.
    fn normalize(&mut self) {
        while self.limbs.len() > 1 && self.limbs.last() == Some(&Limb::ZERO) {
            self.limbs.pop();
        }
        if self.limbs.is_empty() {
            self.limbs.push(Limb::ZERO);
        }
        if self.limbs.len() == 1 && self.limbs[0].is_zero() {
            self.negative = false;
        }
    }

    /// Reinterpret with the given sign; zero stays positive.
    pub(crate) fn with_sign(mut self, negative: bool) -> Self {
        self.negative = negative && !self.is_zero();
        self
    }

    /// Is this value equal to zero?
    pub fn is_zero(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0].is_zero()
    }

    /// Is this value equal to one?
    pub fn is_one(&self) -> bool {
        !self.negative && self.limbs.len() == 1 && self.limbs[0] == Limb::ONE
    }

    /// Is this value negative? Zero is not.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Is this value even?
    pub fn is_even(&self) -> bool {
        self.limbs[0].0 & 1 == 0
    }

    /// Is this value odd?
    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// The absolute value.
    pub fn abs(&self) -> Self {
        Self {
            limbs: self.limbs.clone(),
            negative: false,
        }
    }

    /// Borrow the magnitude limbs, least significant first.
    pub fn as_limbs(&self) -> &[Limb] {
        &self.limbs
    }

    /// Get the number of limbs in the magnitude.
    pub fn nlimbs(&self) -> usize {
        self.limbs.len()
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

impl num_traits::Zero for BigInt {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        self.is_zero()
    }
}

impl num_traits::One for BigInt {
    fn one() -> Self {
        Self::one()
    }

    fn is_one(&self) -> bool {
        self.is_one()
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({self})")
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_hex(f, false)
    }
}

impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_hex(f, true)
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::Zeroize for BigInt {
    fn zeroize(&mut self) {
        use zeroize::Zeroize;
        self.limbs.zeroize();
        self.limbs.push(Limb::ZERO);
        self.negative = false;
    }
}
