//! Bit counting for [`BigInt`].

use super::BigInt;
use crate::Limb;

impl BigInt {
    /// Calculate the number of bits needed to represent the magnitude.
    ///
    /// Zero has bit length 0.
    pub fn bit_length(&self) -> u32 {
        if self.is_zero() {
            return 0;
        }

        let top = self.limbs.last().copied().unwrap_or(Limb::ZERO);
        (self.limbs.len() as u32 - 1) * Limb::BITS + top.bits()
    }

    /// Calculate the number of bytes needed to represent the magnitude.
    pub fn byte_length(&self) -> usize {
        (self.bit_length() as usize + 7) / 8
    }
}
