//! [`BigInt`] bitwise AND.

use super::BigInt;
use crate::Limb;
use core::ops::{BitAnd, BitAndAssign};

impl BitAnd<&BigInt> for &BigInt {
    type Output = BigInt;

    /// Bitwise AND of the magnitudes; signs are discarded and the result
    /// is non-negative.
    fn bitand(self, rhs: &BigInt) -> BigInt {
        let longer = self.limbs.len().max(rhs.limbs.len());
        let limbs = (0..longer)
            .map(|i| {
                let a = self.limbs.get(i).copied().unwrap_or(Limb::ZERO);
                let b = rhs.limbs.get(i).copied().unwrap_or(Limb::ZERO);
                Limb(a.0 & b.0)
            })
            .collect();
        BigInt::from_magnitude(limbs)
    }
}

impl_binop!(BitAnd, bitand, BitAndAssign, bitand_assign);
