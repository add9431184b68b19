//! Modular inversion support for [`BigInt`].

use super::BigInt;
use crate::Error;

impl BigInt {
    /// Compute the multiplicative inverse of `self` modulo `modulus`,
    /// normalized into `[0, |modulus|)`.
    ///
    /// Errors with [`Error::NotInvertible`] when
    /// `gcd(self, modulus) != 1`.
    pub fn inv_mod(&self, modulus: &Self) -> Result<BigInt, Error> {
        let (g, s, _) = self.extended_gcd(modulus);
        if !g.is_one() {
            return Err(Error::NotInvertible);
        }

        let n = modulus.abs();
        let mut inverse = s;
        if inverse.is_negative() {
            inverse += &n;
        }

        Ok(&inverse % &n)
    }
}

#[cfg(test)]
mod tests {
    use super::BigInt;
    use crate::Error;

    #[test]
    fn known_inverses() {
        assert_eq!(
            BigInt::from(3).inv_mod(&BigInt::from(11)),
            Ok(BigInt::from(4))
        );
        assert_eq!(
            BigInt::from(7).inv_mod(&BigInt::from(26)),
            Ok(BigInt::from(15))
        );
    }

    #[test]
    fn not_invertible() {
        assert_eq!(
            BigInt::from(6).inv_mod(&BigInt::from(9)),
            Err(Error::NotInvertible)
        );
        assert_eq!(
            BigInt::zero().inv_mod(&BigInt::from(9)),
            Err(Error::NotInvertible)
        );
    }

    #[test]
    fn inverse_multiplies_to_one() {
        let n = BigInt::from_hex("fffffffffffffffffffffffffffffffeffffffffffffffff").unwrap();
        let a = BigInt::from_hex("123456789abcdef").unwrap();
        let inv = a.inv_mod(&n).unwrap();
        assert!(!inv.is_negative());
        assert!(inv < n);
        assert_eq!((&a * &inv).rem_euclid(&n), BigInt::one());
    }

    #[test]
    fn negative_element() {
        // -3 = 8 (mod 11), and 8 * 7 = 56 = 1 (mod 11)
        let inv = BigInt::from(-3).inv_mod(&BigInt::from(11)).unwrap();
        assert_eq!(inv, BigInt::from(7));
    }
}
