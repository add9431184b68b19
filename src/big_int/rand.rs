//! Random number generator support.

use super::BigInt;
use crate::Limb;
use alloc::vec;
use rand_core::{OsRng, RngCore};

impl BigInt {
    /// Generate a random value of exactly `bit_length` bits: the top bit
    /// is forced on, so the result lies in `[2^(bit_length - 1),
    /// 2^bit_length)`. A bit length of zero yields zero.
    pub fn random_bits(rng: &mut impl RngCore, bit_length: u32) -> Self {
        if bit_length == 0 {
            return Self::zero();
        }

        let nlimbs = bit_length.div_ceil(Limb::BITS) as usize;
        let mut limbs = vec![Limb::ZERO; nlimbs];
        for limb in &mut limbs {
            limb.0 = rng.next_u64();
        }

        let top_bits = bit_length % Limb::BITS;
        let top = limbs.last_mut().expect("at least one limb");
        if top_bits == 0 {
            top.0 |= 1 << (Limb::BITS - 1);
        } else {
            top.0 &= (1 << top_bits) - 1;
            top.0 |= 1 << (top_bits - 1);
        }

        Self::from_magnitude(limbs)
    }

    /// Generate a random value of exactly `bit_length` bits from the
    /// operating system entropy source.
    pub fn random(bit_length: u32) -> Self {
        Self::random_bits(&mut OsRng, bit_length)
    }
}
