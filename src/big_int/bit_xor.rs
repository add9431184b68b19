//! [`BigInt`] bitwise XOR.

use super::BigInt;
use crate::Limb;
use core::ops::{BitXor, BitXorAssign};

impl BitXor<&BigInt> for &BigInt {
    type Output = BigInt;

    /// Bitwise XOR of the magnitudes; signs are discarded and the result
    /// is non-negative.
    fn bitxor(self, rhs: &BigInt) -> BigInt {
        let longer = self.limbs.len().max(rhs.limbs.len());
        let limbs = (0..longer)
            .map(|i| {
                let a = self.limbs.get(i).copied().unwrap_or(Limb::ZERO);
                let b = rhs.limbs.get(i).copied().unwrap_or(Limb::ZERO);
                Limb(a.0 ^ b.0)
            })
            .collect();
        BigInt::from_magnitude(limbs)
    }
}

impl_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign);

#[cfg(test)]
mod tests {
    use super::BigInt;

    #[test]
    fn self_cancels() {
        let a = BigInt::from_hex("123456789abcdef0f0debc9a78563412").unwrap();
        assert!((&a ^ &a).is_zero());
    }

    #[test]
    fn xor_is_addition_without_carries() {
        let a = BigInt::from(0b1100);
        let b = BigInt::from(0b1010);
        assert_eq!(&a ^ &b, BigInt::from(0b0110));
    }
}
