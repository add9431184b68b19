//! [`BigInt`] subtraction operations.

use super::BigInt;
use crate::Limb;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::ops::{Sub, SubAssign};

impl BigInt {
    /// Computes `|self| - |rhs|` as magnitude limbs.
    ///
    /// The caller must guarantee `|self| >= |rhs|`, which makes the final
    /// borrow zero.
    pub(crate) fn sub_magnitude(&self, rhs: &Self) -> Vec<Limb> {
        debug_assert!(self.cmp_magnitude(rhs) != Ordering::Less);

        let mut limbs = Vec::with_capacity(self.limbs.len());
        let mut borrow = Limb::ZERO;

        for i in 0..self.limbs.len() {
            let b = rhs.limbs.get(i).copied().unwrap_or(Limb::ZERO);
            let (diff, new_borrow) = self.limbs[i].borrowing_sub(b, borrow);
            limbs.push(diff);
            borrow = new_borrow;
        }
        debug_assert!(borrow.is_zero());

        limbs
    }
}

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        self + &-rhs
    }
}

impl_binop!(Sub, sub, SubAssign, sub_assign);

#[cfg(test)]
mod tests {
    use super::BigInt;

    #[test]
    fn borrow_across_limb() {
        // 2^64 - 1 = ffffffffffffffff
        let a = BigInt::from_hex("10000000000000000").unwrap();
        let diff = &a - &BigInt::one();
        assert_eq!(diff, BigInt::from(u64::MAX));
    }

    #[test]
    fn self_cancels() {
        let a = BigInt::from_hex("-deadbeefdeadbeefdeadbeef").unwrap();
        assert!((&a - &a).is_zero());
    }

    #[test]
    fn signs() {
        let a = BigInt::from(10);
        let b = BigInt::from(25);
        assert_eq!(&a - &b, BigInt::from(-15));
        assert_eq!(&b - &a, BigInt::from(15));
        assert_eq!(&-&a - &b, BigInt::from(-35));
        assert_eq!(&a - &-&b, BigInt::from(35));
    }

    #[test]
    fn sub_assign() {
        let mut a = BigInt::from(100);
        a -= BigInt::from(1);
        a -= &BigInt::from(2);
        assert_eq!(a, BigInt::from(97));
    }
}
