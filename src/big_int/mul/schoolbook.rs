//! Schoolbook multiplication.

use crate::{BigInt, Limb};
use alloc::vec;

/// Computes `a * b` limb by limb, accumulating 128-bit partial products.
///
/// The result has `a.len() + b.len()` limbs before normalization, which is
/// always enough to hold the product.
pub(super) fn mul(a: &[Limb], b: &[Limb]) -> BigInt {
    let mut limbs = vec![Limb::ZERO; a.len() + b.len()];

    for i in 0..a.len() {
        let mut carry = Limb::ZERO;
        let mut j = 0;

        while j < b.len() || !carry.is_zero() {
            let idx = i + j;
            let (lo, hi) = if j < b.len() {
                limbs[idx].carrying_mul_add(a[i], b[j], carry)
            } else {
                limbs[idx].carrying_add(carry, Limb::ZERO)
            };
            limbs[idx] = lo;
            carry = hi;
            j += 1;
        }
    }

    BigInt::from_magnitude(limbs)
}

#[cfg(test)]
mod tests {
    use super::mul;
    use crate::{BigInt, Limb};

    #[test]
    fn single_limb() {
        let product = mul(&[Limb(u64::MAX)], &[Limb(u64::MAX)]);
        // (2^64 - 1)^2 = 2^128 - 2^65 + 1
        assert_eq!(
            product,
            BigInt::from_hex("fffffffffffffffe0000000000000001").unwrap()
        );
    }

    #[test]
    fn by_zero() {
        let product = mul(&[Limb(12345), Limb(678)], &[Limb::ZERO]);
        assert!(product.is_zero());
    }

    #[test]
    fn carries_ripple_to_top() {
        let max = BigInt::from_words([u64::MAX, u64::MAX, u64::MAX], false);
        let product = mul(max.as_limbs(), max.as_limbs());
        // (2^192 - 1)^2 = 2^384 - 2^193 + 1
        let expected = (&(&BigInt::one() << 384) - &(&BigInt::one() << 193)) + BigInt::one();
        assert_eq!(product, expected);
    }
}
