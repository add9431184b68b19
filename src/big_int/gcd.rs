//! Greatest common divisor support for [`BigInt`].

use super::BigInt;
use core::mem;

impl BigInt {
    /// Compute the greatest common divisor of `self` and `rhs` by the
    /// Euclidean algorithm on the magnitudes.
    ///
    /// The result is non-negative for any operands; `gcd(x, 0) = |x|`.
    pub fn gcd(&self, rhs: &Self) -> BigInt {
        let mut a = self.abs();
        let mut b = rhs.abs();

        while !b.is_zero() {
            let r = &a % &b;
            a = mem::replace(&mut b, r);
        }

        a
    }

    /// Compute the extended GCD, returning `(g, s, t)` such that
    /// `g = self * s + rhs * t` and `g = gcd(|self|, |rhs|)`.
    ///
    /// The Bezout iteration runs on the magnitudes; the coefficients are
    /// negated at the end for negative inputs so the identity holds for
    /// the original signed operands.
    pub fn extended_gcd(&self, rhs: &Self) -> (BigInt, BigInt, BigInt) {
        let mut old_r = self.abs();
        let mut r = rhs.abs();
        let mut old_s = BigInt::one();
        let mut s = BigInt::zero();
        let mut old_t = BigInt::zero();
        let mut t = BigInt::one();

        while !r.is_zero() {
            let quotient = &old_r / &r;

            let next = &old_r - &(&quotient * &r);
            old_r = mem::replace(&mut r, next);

            let next = &old_s - &(&quotient * &s);
            old_s = mem::replace(&mut s, next);

            let next = &old_t - &(&quotient * &t);
            old_t = mem::replace(&mut t, next);
        }

        if self.is_negative() {
            old_s = -old_s;
        }
        if rhs.is_negative() {
            old_t = -old_t;
        }

        (old_r, old_s, old_t)
    }
}

#[cfg(test)]
mod tests {
    use super::BigInt;

    #[test]
    fn gcd_known_values() {
        assert_eq!(
            BigInt::from(48).gcd(&BigInt::from(18)),
            BigInt::from(6)
        );
        assert_eq!(BigInt::from(17).gcd(&BigInt::from(13)), BigInt::one());
        assert_eq!(BigInt::from(42).gcd(&BigInt::zero()), BigInt::from(42));
        assert_eq!(BigInt::zero().gcd(&BigInt::from(42)), BigInt::from(42));
    }

    #[test]
    fn gcd_ignores_signs() {
        assert_eq!(
            BigInt::from(-48).gcd(&BigInt::from(18)),
            BigInt::from(6)
        );
        assert_eq!(
            BigInt::from(-48).gcd(&BigInt::from(-18)),
            BigInt::from(6)
        );
    }

    #[test]
    fn bezout_identity() {
        let a = BigInt::from(240);
        let b = BigInt::from(46);
        let (g, s, t) = a.extended_gcd(&b);
        assert_eq!(g, BigInt::from(2));
        assert_eq!(&(&a * &s) + &(&b * &t), g);
    }

    #[test]
    fn bezout_identity_signed() {
        let a = BigInt::from(-240);
        let b = BigInt::from(46);
        let (g, s, t) = a.extended_gcd(&b);
        assert_eq!(g, BigInt::from(2));
        assert_eq!(&(&a * &s) + &(&b * &t), g);

        let (g, s, t) = b.extended_gcd(&a);
        assert_eq!(&(&b * &s) + &(&a * &t), g);
    }

    #[test]
    fn bezout_with_zero() {
        let a = BigInt::from(7);
        let (g, s, t) = a.extended_gcd(&BigInt::zero());
        assert_eq!(g, a);
        assert_eq!(s, BigInt::one());
        assert!(t.is_zero());
    }
}
