//! [`BigInt`] division operations.

use super::BigInt;
use crate::Limb;
use alloc::vec;
use core::cmp::Ordering;
use core::ops::{Div, DivAssign, Rem, RemAssign};

impl BigInt {
    /// Binary restoring division of magnitudes: computes `(q, r)` with
    /// `|self| = q * |rhs| + r` and `0 <= r < |rhs|`.
    ///
    /// Panics when the divisor is zero.
    pub(crate) fn div_rem_magnitude(&self, rhs: &Self) -> (BigInt, BigInt) {
        assert!(!rhs.is_zero(), "attempt to divide by zero");

        if self.cmp_magnitude(rhs) == Ordering::Less {
            return (BigInt::zero(), self.abs());
        }

        let mut remainder = self.abs();
        let divisor = rhs.abs();

        // Largest shift with `divisor << shift <= |self|`.
        let mut shift = self.bit_length() - divisor.bit_length();
        let mut shifted = &divisor << shift;
        if shifted.cmp_magnitude(&remainder) == Ordering::Greater {
            shifted >>= 1u32;
            shift -= 1;
        }

        let mut quotient = vec![Limb::ZERO; (shift / Limb::BITS) as usize + 1];
        for i in (0..=shift).rev() {
            if remainder >= shifted {
                remainder -= &shifted;
                quotient[(i / Limb::BITS) as usize].0 |= 1 << (i % Limb::BITS);
            }
            shifted >>= 1u32;
        }

        (BigInt::from_magnitude(quotient), remainder)
    }

    /// Computes the quotient and remainder, truncating toward zero: the
    /// quotient sign is the XOR of the operand signs and the remainder
    /// takes the sign of the dividend.
    ///
    /// Panics when `rhs` is zero.
    pub fn div_rem(&self, rhs: &Self) -> (BigInt, BigInt) {
        let (q, r) = self.div_rem_magnitude(rhs);
        (
            q.with_sign(self.is_negative() ^ rhs.is_negative()),
            r.with_sign(self.is_negative()),
        )
    }

    /// Checked division; returns `None` when `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Option<BigInt> {
        (!rhs.is_zero()).then(|| self.div_rem(rhs).0)
    }

    /// Checked remainder; returns `None` when `rhs` is zero.
    pub fn checked_rem(&self, rhs: &Self) -> Option<BigInt> {
        (!rhs.is_zero()).then(|| self.div_rem(rhs).1)
    }

    /// Computes the least non-negative remainder, in `[0, |rhs|)`.
    ///
    /// Unlike `%`, the result never takes the dividend's sign; modular
    /// call sites (exponentiation, inversion, witness selection) reduce
    /// through this.
    ///
    /// Panics when `rhs` is zero.
    pub fn rem_euclid(&self, rhs: &Self) -> BigInt {
        let r = self % rhs;
        if r.is_negative() {
            r + rhs.abs()
        } else {
            r
        }
    }
}

impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    fn div(self, rhs: &BigInt) -> BigInt {
        self.div_rem(rhs).0
    }
}

impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    fn rem(self, rhs: &BigInt) -> BigInt {
        self.div_rem(rhs).1
    }
}

impl_binop!(Div, div, DivAssign, div_assign);
impl_binop!(Rem, rem, RemAssign, rem_assign);
