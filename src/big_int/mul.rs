//! [`BigInt`] multiplication operations.

mod karatsuba;
mod schoolbook;

use super::BigInt;
use core::ops::{Mul, MulAssign};

/// Operand size (in limbs) at which multiplication switches from the
/// schoolbook product to Karatsuba.
pub(crate) const KARATSUBA_THRESHOLD: usize = 8;

impl BigInt {
    /// Computes `|self| * |rhs|`, choosing the algorithm based on operand
    /// size.
    pub(crate) fn mul_magnitude(&self, rhs: &Self) -> BigInt {
        if self.nlimbs().max(rhs.nlimbs()) >= KARATSUBA_THRESHOLD {
            karatsuba::mul(self, rhs)
        } else {
            schoolbook::mul(&self.limbs, &rhs.limbs)
        }
    }
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        self.mul_magnitude(rhs)
            .with_sign(self.is_negative() ^ rhs.is_negative())
    }
}

impl_binop!(Mul, mul, MulAssign, mul_assign);
