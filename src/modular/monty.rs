//! Montgomery modular reduction (CIOS form) for odd moduli.

use crate::{BigInt, Error, Limb};
use alloc::vec;

/// Parameters for Montgomery reduction modulo an odd modulus chosen at
/// runtime.
///
/// With `k` the limb count of the modulus and `R = 2^(64k)`, the context
/// maps values into the Montgomery domain (`a -> a * R mod n`) where a
/// modular multiplication costs one ordinary product plus one reduction
/// pass, with no long division.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MontyParams {
    /// The (odd) modulus.
    modulus: BigInt,
    /// Limb count of the modulus.
    k: usize,
    /// `R = 2^(64k)`.
    r: BigInt,
    /// `R^-1 mod modulus`.
    r_inv: BigInt,
    /// `n' = (-modulus)^-1 mod R`. Only the low limb enters the
    /// reduction loop.
    n_prime: BigInt,
}

impl MontyParams {
    /// Precompute Montgomery parameters for the given modulus.
    ///
    /// Errors on a zero or even modulus, or when a precomputation turns
    /// out not to be invertible. A negative modulus is reduced to its
    /// magnitude.
    pub fn new(modulus: &BigInt) -> Result<Self, Error> {
        if modulus.is_zero() {
            return Err(Error::ZeroModulus);
        }
        if modulus.is_even() {
            return Err(Error::EvenModulus);
        }

        let modulus = modulus.abs();
        let k = modulus.nlimbs();
        let r = &BigInt::one() << (k as u32 * Limb::BITS);

        let (g, s, _) = r.extended_gcd(&modulus);
        if !g.is_one() {
            return Err(Error::NotInvertible);
        }
        let mut r_inv = s;
        if r_inv.is_negative() {
            r_inv += &modulus;
        }

        let (g, s, _) = modulus.extended_gcd(&r);
        if !g.is_one() {
            return Err(Error::NotInvertible);
        }
        let mut n_prime = -s;
        if n_prime.is_negative() {
            n_prime += &r;
        }

        Ok(Self {
            modulus,
            k,
            r,
            r_inv,
            n_prime,
        })
    }

    /// The modulus this context reduces by.
    pub fn modulus(&self) -> &BigInt {
        &self.modulus
    }

    /// `R = 2^(64k)` for a `k`-limb modulus.
    pub fn r(&self) -> &BigInt {
        &self.r
    }

    /// `R^-1 mod modulus`.
    pub fn r_inv(&self) -> &BigInt {
        &self.r_inv
    }

    /// Montgomery reduction: computes `a * R^-1 mod modulus` for a
    /// non-negative `a` of at most `2k` limbs.
    ///
    /// Coarsely integrated operand scanning over a `2k + 1` limb working
    /// buffer: each pass folds one low limb into a multiple of the
    /// modulus, leaving the top of the buffer holding a value in
    /// `[0, 2n)` that one conditional subtraction brings below `n`.
    pub fn reduce(&self, a: &BigInt) -> BigInt {
        let mut t = vec![Limb::ZERO; 2 * self.k + 1];
        let a_limbs = a.as_limbs();
        let take = a_limbs.len().min(2 * self.k);
        t[..take].copy_from_slice(&a_limbs[..take]);

        let n = self.modulus.as_limbs();
        let n_prime_low = self.n_prime.as_limbs()[0];

        for i in 0..self.k {
            let m = t[i].wrapping_mul(n_prime_low);

            // t += m * modulus << (64 * i)
            let mut carry = Limb::ZERO;
            for j in 0..self.k {
                let (lo, hi) = t[i + j].carrying_mul_add(m, n[j], carry);
                t[i + j] = lo;
                carry = hi;
            }
            for limb in t.iter_mut().skip(i + self.k) {
                if carry.is_zero() {
                    break;
                }
                let (lo, hi) = limb.carrying_add(carry, Limb::ZERO);
                *limb = lo;
                carry = hi;
            }
        }

        // The folded value is t / R: the top k limbs plus the carry limb,
        // which can be set when the modulus uses its topmost bit.
        let reduced = BigInt::from_limbs(t[self.k..].to_vec(), false);
        if reduced >= self.modulus {
            &reduced - &self.modulus
        } else {
            reduced
        }
    }

    /// Montgomery multiplication: `a * b * R^-1 mod modulus`.
    pub fn mul(&self, a: &BigInt, b: &BigInt) -> BigInt {
        self.reduce(&(a * b))
    }

    /// Map into the Montgomery domain: `a * R mod modulus`.
    pub fn to_montgomery(&self, a: &BigInt) -> BigInt {
        &(&a.rem_euclid(&self.modulus) * &self.r) % &self.modulus
    }

    /// Map out of the Montgomery domain: `a * R^-1 mod modulus`.
    pub fn from_montgomery(&self, a: &BigInt) -> BigInt {
        self.reduce(a)
    }
}
