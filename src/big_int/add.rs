//! [`BigInt`] addition operations.

use super::BigInt;
use crate::Limb;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::ops::{Add, AddAssign};

impl BigInt {
    /// Computes `|self| + |rhs|` as magnitude limbs, extending past the
    /// longer operand while a carry remains.
    pub(crate) fn add_magnitude(&self, rhs: &Self) -> Vec<Limb> {
        let longer = self.limbs.len().max(rhs.limbs.len());
        let mut limbs = Vec::with_capacity(longer + 1);
        let mut carry = Limb::ZERO;

        for i in 0..longer {
            let a = self.limbs.get(i).copied().unwrap_or(Limb::ZERO);
            let b = rhs.limbs.get(i).copied().unwrap_or(Limb::ZERO);
            let (sum, c) = a.carrying_add(b, carry);
            limbs.push(sum);
            carry = c;
        }
        if !carry.is_zero() {
            limbs.push(carry);
        }

        limbs
    }
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        if self.is_negative() == rhs.is_negative() {
            return BigInt::from_limbs(self.add_magnitude(rhs), self.is_negative());
        }

        // Opposite signs: subtract the smaller magnitude from the larger;
        // the result takes the sign of the larger-magnitude operand.
        match self.cmp_magnitude(rhs) {
            Ordering::Less => BigInt::from_limbs(rhs.sub_magnitude(self), rhs.is_negative()),
            _ => BigInt::from_limbs(self.sub_magnitude(rhs), self.is_negative()),
        }
    }
}

impl_binop!(Add, add, AddAssign, add_assign);

#[cfg(test)]
mod tests {
    use super::BigInt;

    #[test]
    fn carry_into_new_limb() {
        let a = BigInt::from(u64::MAX);
        let sum = &a + &BigInt::one();
        assert_eq!(sum.nlimbs(), 2);
        assert_eq!(sum.as_limbs()[0].0, 0);
        assert_eq!(sum.as_limbs()[1].0, 1);
    }

    #[test]
    fn opposite_signs() {
        let a = BigInt::from(100);
        let b = BigInt::from(-42);
        assert_eq!(&a + &b, BigInt::from(58));
        assert_eq!(&b + &a, BigInt::from(58));
        assert_eq!(&-&a + &b, BigInt::from(-142));
    }

    #[test]
    fn equal_magnitudes_cancel() {
        let a = BigInt::from(7);
        let sum = &a + &BigInt::from(-7);
        assert!(sum.is_zero());
        assert!(!sum.is_negative());
    }

    #[test]
    fn add_assign() {
        let mut a = BigInt::from(1);
        a += BigInt::from(2);
        a += &BigInt::from(3);
        assert_eq!(a, BigInt::from(6));
    }
}
