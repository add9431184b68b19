//! Barrett modular reduction for arbitrary nonzero moduli.

use crate::{BigInt, Error};

/// Parameters for Barrett reduction modulo a modulus chosen at runtime.
///
/// With `k` the bit length of the modulus, the precomputed quotient
/// `mu = floor(2^(2k) / modulus)` lets a reduction be carried out with
/// two multiplications, shifts, and masks in place of long division,
/// for inputs up to `2k` bits.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BarrettParams {
    /// The modulus.
    modulus: BigInt,
    /// Bit length of the modulus.
    k: u32,
    /// `mu = floor(2^(2k) / modulus)`.
    mu: BigInt,
}

impl BarrettParams {
    /// Precompute Barrett parameters for the given modulus.
    ///
    /// Errors only on a zero modulus. A negative modulus is reduced to
    /// its magnitude.
    pub fn new(modulus: &BigInt) -> Result<Self, Error> {
        if modulus.is_zero() {
            return Err(Error::ZeroModulus);
        }

        let modulus = modulus.abs();
        let k = modulus.bit_length();
        let mu = &(&BigInt::one() << (2 * k)) / &modulus;

        Ok(Self { modulus, k, mu })
    }

    /// The modulus this context reduces by.
    pub fn modulus(&self) -> &BigInt {
        &self.modulus
    }

    /// Reduce a non-negative `a` into `[0, modulus)`.
    ///
    /// Inputs below the modulus pass through; inputs of at most `k` bits
    /// fall back to long division. Everything else takes the
    /// estimate-quotient-and-correct path, whose final subtraction loop
    /// runs at most twice.
    pub fn reduce(&self, a: &BigInt) -> BigInt {
        debug_assert!(!a.is_negative());

        if *a < self.modulus {
            return a.clone();
        }
        if a.bit_length() <= self.k {
            return a % &self.modulus;
        }

        let q1 = a >> (self.k - 1);
        let q2 = &q1 * &self.mu;
        let q3 = &q2 >> (self.k + 1);

        let mask = &(&BigInt::one() << (self.k + 1)) - &BigInt::one();
        let r1 = a & &mask;
        let r2 = &(&q3 * &self.modulus) & &mask;

        let mut r = &r1 - &r2;
        if r.is_negative() {
            r += &BigInt::one() << (self.k + 1);
        }

        while r >= self.modulus {
            r -= &self.modulus;
        }

        r
    }
}
