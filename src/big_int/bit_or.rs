//! [`BigInt`] bitwise OR.

use super::BigInt;
use crate::Limb;
use core::ops::{BitOr, BitOrAssign};

impl BitOr<&BigInt> for &BigInt {
    type Output = BigInt;

    /// Bitwise OR of the magnitudes; signs are discarded and the result
    /// is non-negative.
    fn bitor(self, rhs: &BigInt) -> BigInt {
        let longer = self.limbs.len().max(rhs.limbs.len());
        let limbs = (0..longer)
            .map(|i| {
                let a = self.limbs.get(i).copied().unwrap_or(Limb::ZERO);
                let b = rhs.limbs.get(i).copied().unwrap_or(Limb::ZERO);
                Limb(a.0 | b.0)
            })
            .collect();
        BigInt::from_magnitude(limbs)
    }
}

impl_binop!(BitOr, bitor, BitOrAssign, bitor_assign);

#[cfg(test)]
mod tests {
    use super::BigInt;

    #[test]
    fn merges_disjoint_ranges() {
        let low = BigInt::from_hex("ffff").unwrap();
        let high = &BigInt::from_hex("ffff").unwrap() << 64;
        assert_eq!(
            &low | &high,
            BigInt::from_hex("ffff000000000000ffff").unwrap()
        );
    }

    #[test]
    fn with_zero() {
        let a = BigInt::from(0x1234);
        assert_eq!(&a | &BigInt::zero(), a);
    }
}
