//! Limb addition.

use super::{Limb, WideWord, Word};

impl Limb {
    /// Computes `self + rhs + carry`, returning the result along with the
    /// new carry.
    #[inline(always)]
    pub const fn carrying_add(self, rhs: Limb, carry: Limb) -> (Limb, Limb) {
        let sum = self.0 as WideWord + rhs.0 as WideWord + carry.0 as WideWord;
        (Limb(sum as Word), Limb((sum >> Self::BITS) as Word))
    }

    /// Computes `self + rhs % 2^64`, discarding overflow.
    #[inline(always)]
    pub const fn wrapping_add(self, rhs: Limb) -> Limb {
        Limb(self.0.wrapping_add(rhs.0))
    }
}
