//! Modular exponentiation for [`BigInt`].

use super::BigInt;
use crate::{BarrettParams, MontyParams};

/// Minimum modulus size (in limbs) for the Montgomery exponentiation
/// path; the modulus must additionally be odd.
pub(crate) const MONTGOMERY_THRESHOLD: usize = 4;

/// Minimum modulus size (in limbs) at which the binary path reduces with
/// a Barrett context instead of plain long division.
pub(crate) const BARRETT_THRESHOLD: usize = 8;

impl BigInt {
    /// Compute `self^exponent mod modulus`, normalized into
    /// `[0, |modulus|)`.
    ///
    /// A zero exponent yields `1` and a modulus of magnitude one yields
    /// `0`. The exponent is treated as a magnitude. Large odd moduli are
    /// handled with Montgomery multiplication and large even moduli with
    /// Barrett reduction; either setup failing falls back to the next
    /// tier.
    ///
    /// Panics when `modulus` is zero.
    pub fn pow_mod(&self, exponent: &Self, modulus: &Self) -> BigInt {
        assert!(!modulus.is_zero(), "modulus cannot be zero");

        if exponent.is_zero() {
            return BigInt::one();
        }
        if modulus.abs().is_one() {
            return BigInt::zero();
        }

        if modulus.nlimbs() >= MONTGOMERY_THRESHOLD && modulus.is_odd() {
            self.pow_mod_montgomery(exponent, modulus)
        } else {
            self.pow_mod_binary(exponent, modulus)
        }
    }

    /// Square-and-multiply in the Montgomery domain.
    fn pow_mod_montgomery(&self, exponent: &Self, modulus: &Self) -> BigInt {
        let params = match MontyParams::new(modulus) {
            Ok(params) => params,
            Err(_) => return self.pow_mod_binary(exponent, modulus),
        };

        let mut base = params.to_montgomery(self);
        let mut result = params.to_montgomery(&BigInt::one());
        let mut exp = exponent.abs();

        while !exp.is_zero() {
            if exp.is_odd() {
                result = params.mul(&result, &base);
            }
            base = params.mul(&base, &base);
            exp >>= 1u32;
        }

        params.from_montgomery(&result)
    }

    /// Square-and-multiply with Barrett reduction for large moduli and
    /// plain long-division reduction otherwise.
    fn pow_mod_binary(&self, exponent: &Self, modulus: &Self) -> BigInt {
        let n = modulus.abs();
        let mut base = self.rem_euclid(&n);
        let mut exp = exponent.abs();
        let mut result = BigInt::one();

        if n.nlimbs() >= BARRETT_THRESHOLD {
            if let Ok(barrett) = BarrettParams::new(&n) {
                while !exp.is_zero() {
                    if exp.is_odd() {
                        result = barrett.reduce(&(&result * &base));
                    }
                    base = barrett.reduce(&(&base * &base));
                    exp >>= 1u32;
                }
                return result;
            }
        }

        while !exp.is_zero() {
            if exp.is_odd() {
                result = &(&result * &base) % &n;
            }
            base = &(&base * &base) % &n;
            exp >>= 1u32;
        }

        result
    }
}
