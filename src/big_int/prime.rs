//! Miller-Rabin primality testing and random prime generation.

use super::BigInt;
use crate::Error;
use rand_core::{OsRng, RngCore};

/// Witness rounds used by prime generation; gives a false-positive
/// probability below 4^-20 per candidate.
const PRIME_TEST_ROUNDS: usize = 20;

impl BigInt {
    /// Miller-Rabin probabilistic primality test with witnesses drawn
    /// from the given RNG.
    ///
    /// Returns `false` with certainty; `true` means prime with
    /// probability at least `1 - 4^-rounds`.
    pub fn miller_rabin(&self, rng: &mut impl RngCore, rounds: usize) -> bool {
        if *self <= BigInt::one() {
            return false;
        }
        let two = BigInt::two();
        if *self == two {
            return true;
        }
        if self.is_even() {
            return false;
        }
        // 3 is prime, and its witness range [2, n - 2] is empty
        if *self == BigInt::from(3) {
            return true;
        }

        // n - 1 = d * 2^s with d odd
        let n_minus_1 = self - &BigInt::one();
        let mut d = n_minus_1.clone();
        let mut s = 0u32;
        while d.is_even() {
            d >>= 1u32;
            s += 1;
        }

        let witness_bits = self.bit_length() - 1;

        'witness: for _ in 0..rounds {
            // Out-of-range draws are discarded without spending a round.
            let a = loop {
                let a = BigInt::random_bits(rng, witness_bits);
                if a > BigInt::one() && a < n_minus_1 {
                    break a;
                }
            };

            let mut x = a.pow_mod(&d, self);
            if x.is_one() || x == n_minus_1 {
                continue;
            }

            for _ in 1..s {
                x = (&x * &x).rem_euclid(self);
                if x == n_minus_1 {
                    continue 'witness;
                }
            }

            return false;
        }

        true
    }

    /// Miller-Rabin primality test with witnesses drawn from the
    /// operating system entropy source. 20 rounds is the conventional
    /// choice.
    pub fn is_probable_prime(&self, rounds: usize) -> bool {
        self.miller_rabin(&mut OsRng, rounds)
    }

    /// Search for a probable prime of exactly `bit_length` bits, drawing
    /// candidates from the given RNG.
    ///
    /// Errors with [`Error::PrimeBitLength`] below 2 bits, and with
    /// [`Error::PrimeSearchExhausted`] when no candidate passes within
    /// `50 * bit_length` attempts.
    pub fn random_prime_from_rng(rng: &mut impl RngCore, bit_length: u32) -> Result<Self, Error> {
        if bit_length < 2 {
            return Err(Error::PrimeBitLength);
        }
        if bit_length == 2 {
            return Ok(Self::two());
        }
        if bit_length == 3 {
            return Ok(Self::from(5));
        }

        let max_attempts = 50 * bit_length as usize;
        for _ in 0..max_attempts {
            let mut candidate = Self::random_bits(rng, bit_length);
            if candidate.is_even() {
                candidate += BigInt::one();
            }
            if candidate.bit_length() < bit_length {
                candidate |= &BigInt::one() << (bit_length - 1);
            }

            if candidate.miller_rabin(rng, PRIME_TEST_ROUNDS) {
                return Ok(candidate);
            }

            // Try the next odd number before drawing fresh entropy.
            candidate += BigInt::two();
            if candidate.miller_rabin(rng, PRIME_TEST_ROUNDS) {
                return Ok(candidate);
            }
        }

        Err(Error::PrimeSearchExhausted)
    }

    /// Search for a probable prime of exactly `bit_length` bits using the
    /// operating system entropy source.
    pub fn random_prime(bit_length: u32) -> Result<Self, Error> {
        Self::random_prime_from_rng(&mut OsRng, bit_length)
    }
}

#[cfg(test)]
mod tests {
    use super::BigInt;
    use crate::Error;
    use rand_core::SeedableRng;

    fn rng() -> rand_chacha::ChaCha8Rng {
        rand_chacha::ChaCha8Rng::seed_from_u64(0xbdbd)
    }

    #[test]
    fn small_values() {
        let mut rng = rng();
        assert!(!BigInt::zero().miller_rabin(&mut rng, 20));
        assert!(!BigInt::one().miller_rabin(&mut rng, 20));
        assert!(!BigInt::from(-7).miller_rabin(&mut rng, 20));
        assert!(BigInt::two().miller_rabin(&mut rng, 20));
        assert!(BigInt::from(3).miller_rabin(&mut rng, 20));
        assert!(!BigInt::from(4).miller_rabin(&mut rng, 20));
        assert!(BigInt::from(5).miller_rabin(&mut rng, 20));
        assert!(!BigInt::from(9).miller_rabin(&mut rng, 20));
    }

    #[test]
    fn known_primes() {
        let mut rng = rng();
        for p in [97u64, 101, 65537, (1 << 31) - 1] {
            assert!(BigInt::from(p).miller_rabin(&mut rng, 20), "{p}");
        }
        assert!(!BigInt::from(100).miller_rabin(&mut rng, 20));
        // Carmichael numbers fool Fermat but not Miller-Rabin
        for c in [561u64, 41041, 825265] {
            assert!(!BigInt::from(c).miller_rabin(&mut rng, 20), "{c}");
        }
    }

    #[test]
    fn large_prime_and_composite() {
        let mut rng = rng();
        // 2^127 - 1 is a Mersenne prime; 2^128 + 1 is not prime
        let m127 = &(&BigInt::one() << 127) - &BigInt::one();
        assert!(m127.miller_rabin(&mut rng, 20));

        let f7 = &(&BigInt::one() << 128) + &BigInt::one();
        assert!(!f7.miller_rabin(&mut rng, 20));
    }

    #[test]
    fn generated_primes_have_exact_size() {
        let mut rng = rng();
        for bits in [2u32, 3, 16, 64, 100] {
            let p = BigInt::random_prime_from_rng(&mut rng, bits).unwrap();
            assert!(p.bit_length() <= bits.max(3));
            if bits > 3 {
                assert_eq!(p.bit_length(), bits);
                assert!(p.is_odd());
            }
            assert!(p.miller_rabin(&mut rng, 20));
        }
    }

    #[test]
    fn rejects_tiny_bit_lengths() {
        let mut rng = rng();
        assert_eq!(
            BigInt::random_prime_from_rng(&mut rng, 0),
            Err(Error::PrimeBitLength)
        );
        assert_eq!(
            BigInt::random_prime_from_rng(&mut rng, 1),
            Err(Error::PrimeBitLength)
        );
        assert_eq!(
            BigInt::random_prime_from_rng(&mut rng, 2),
            Ok(BigInt::two())
        );
    }
}
