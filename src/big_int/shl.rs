//! [`BigInt`] left shift.

use super::BigInt;
use crate::{Limb, WideWord, Word};
use alloc::vec;
use core::ops::{Shl, ShlAssign};

impl BigInt {
    /// Shift the magnitude left by `shift` bits, preserving the sign.
    pub fn shl_bits(&self, shift: u32) -> BigInt {
        if shift == 0 || self.is_zero() {
            return self.clone();
        }

        let word_shift = (shift / Limb::BITS) as usize;
        let bit_shift = shift % Limb::BITS;
        let mut limbs = vec![Limb::ZERO; self.limbs.len() + word_shift + 1];

        if bit_shift == 0 {
            limbs[word_shift..word_shift + self.limbs.len()].copy_from_slice(&self.limbs);
        } else {
            let mut carry = Limb::ZERO;
            for (i, limb) in self.limbs.iter().enumerate() {
                let wide = ((limb.0 as WideWord) << bit_shift) | carry.0 as WideWord;
                limbs[i + word_shift] = Limb(wide as Word);
                carry = Limb((wide >> Limb::BITS) as Word);
            }
            limbs[self.limbs.len() + word_shift] = carry;
        }

        BigInt::from_limbs(limbs, self.is_negative())
    }
}

impl_shift!(Shl, shl, ShlAssign, shl_assign, shl_bits);
