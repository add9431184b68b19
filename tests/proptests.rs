//! Equivalence tests between `bignum::BigInt` and `num_bigint::BigInt`.

use bignum::BigInt;
use num_bigint::Sign;
use num_integer::Integer;
use proptest::prelude::*;

fn to_num(value: &BigInt) -> num_bigint::BigInt {
    let sign = if value.is_zero() {
        Sign::NoSign
    } else if value.is_negative() {
        Sign::Minus
    } else {
        Sign::Plus
    };
    num_bigint::BigInt::from_bytes_be(sign, &value.to_be_bytes())
}

fn from_num(value: &num_bigint::BigInt) -> BigInt {
    let (sign, bytes) = value.to_bytes_be();
    let magnitude = BigInt::from_be_bytes(&bytes);
    if sign == Sign::Minus {
        -magnitude
    } else {
        magnitude
    }
}

prop_compose! {
    fn bigint()(bytes in any::<Vec<u8>>(), negative in any::<bool>()) -> BigInt {
        let magnitude = BigInt::from_be_bytes(&bytes);
        if negative { -magnitude } else { magnitude }
    }
}

prop_compose! {
    /// Nonzero values for divisors and moduli.
    fn nonzero()(value in bigint()) -> BigInt {
        if value.is_zero() { BigInt::from(3) } else { value }
    }
}

proptest! {
    #[test]
    fn conversion_roundtrip(a in bigint()) {
        prop_assert_eq!(from_num(&to_num(&a)), a);
    }

    #[test]
    fn hex_roundtrip(a in bigint()) {
        prop_assert_eq!(BigInt::from_hex(&a.to_hex()).unwrap(), a);
    }

    #[test]
    fn bytes_roundtrip(a in bigint()) {
        prop_assert_eq!(BigInt::from_be_bytes(&a.to_be_bytes()), a.abs());
    }

    #[test]
    fn i64_roundtrip(n in any::<i64>()) {
        prop_assert_eq!(BigInt::from(n).to_i64().unwrap(), n);
    }

    #[test]
    fn add_matches(a in bigint(), b in bigint()) {
        prop_assert_eq!(to_num(&(&a + &b)), to_num(&a) + to_num(&b));
    }

    #[test]
    fn sub_matches(a in bigint(), b in bigint()) {
        prop_assert_eq!(to_num(&(&a - &b)), to_num(&a) - to_num(&b));
    }

    #[test]
    fn mul_matches(a in bigint(), b in bigint()) {
        prop_assert_eq!(to_num(&(&a * &b)), to_num(&a) * to_num(&b));
    }

    #[test]
    fn div_rem_match(a in bigint(), b in nonzero()) {
        prop_assert_eq!(to_num(&(&a / &b)), to_num(&a) / to_num(&b));
        prop_assert_eq!(to_num(&(&a % &b)), to_num(&a) % to_num(&b));
    }

    #[test]
    fn shifts_match(a in bigint(), shift in 0u32..320) {
        prop_assert_eq!(to_num(&(&a.abs() << shift)), to_num(&a.abs()) << shift);
        prop_assert_eq!(to_num(&(&a.abs() >> shift)), to_num(&a.abs()) >> shift);
    }

    #[test]
    fn bitwise_match_on_magnitudes(a in bigint(), b in bigint()) {
        let (a, b) = (a.abs(), b.abs());
        prop_assert_eq!(to_num(&(&a & &b)), to_num(&a) & to_num(&b));
        prop_assert_eq!(to_num(&(&a | &b)), to_num(&a) | to_num(&b));
        prop_assert_eq!(to_num(&(&a ^ &b)), to_num(&a) ^ to_num(&b));
    }

    #[test]
    fn gcd_matches(a in bigint(), b in bigint()) {
        let expected = to_num(&a.abs()).gcd(&to_num(&b.abs()));
        prop_assert_eq!(to_num(&a.gcd(&b)), expected);
        prop_assert_eq!(a.gcd(&b), b.gcd(&a));
    }

    #[test]
    fn addition_laws(a in bigint(), b in bigint(), c in bigint()) {
        prop_assert_eq!(&a + &b, &b + &a);
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
    }

    #[test]
    fn multiplication_laws(a in bigint(), b in bigint(), c in bigint()) {
        prop_assert_eq!(&a * &b, &b * &a);
        prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    }

    #[test]
    fn division_identity(a in bigint(), b in nonzero()) {
        let (q, r) = a.div_rem(&b);
        prop_assert_eq!(&(&q * &b) + &r, a.clone());
        prop_assert!(r.abs() < b.abs());
        prop_assert!(r.is_zero() || r.is_negative() == a.is_negative());
    }

    #[test]
    fn shift_multiply_equivalence(a in bigint(), k in 0u32..200) {
        let a = a.abs();
        let pow2 = &BigInt::one() << k;
        prop_assert_eq!(&a << k, &a * &pow2);
        prop_assert_eq!(&a >> k, &a / &pow2);
    }

    #[test]
    fn extended_gcd_identity(a in bigint(), b in bigint()) {
        let (g, s, t) = a.extended_gcd(&b);
        prop_assert_eq!(&(&a * &s) + &(&b * &t), g.clone());
        prop_assert_eq!(g, a.gcd(&b));
    }

    #[test]
    fn inv_mod_agrees_with_gcd(a in bigint(), n in nonzero()) {
        let n = n.abs();
        prop_assume!(!n.is_one());
        match a.inv_mod(&n) {
            Ok(inverse) => {
                prop_assert!(!inverse.is_negative());
                prop_assert!(inverse < n);
                prop_assert_eq!((&a * &inverse).rem_euclid(&n), BigInt::one());
            }
            Err(_) => prop_assert!(!a.gcd(&n).is_one()),
        }
    }

    #[test]
    fn rem_euclid_is_canonical(a in bigint(), n in nonzero()) {
        let r = a.rem_euclid(&n);
        prop_assert!(!r.is_negative());
        prop_assert!(r < n.abs());
        prop_assert!((&a - &r).rem_euclid(&n).is_zero());
    }
}

proptest! {
    // modular exponentiation walks every exponent bit, so keep the case
    // count lower than the cheap laws above
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn pow_mod_matches(
        base in bigint(),
        exponent in 0u64..0x10000,
        modulus_bytes in proptest::collection::vec(any::<u8>(), 1..80),
        force_odd in any::<bool>(),
    ) {
        let mut modulus = BigInt::from_be_bytes(&modulus_bytes);
        if force_odd {
            modulus = &modulus | &BigInt::one();
        }
        // a zero-exponent power is 1 even modulo 1, where modpow says 0
        prop_assume!(!modulus.is_zero() && !modulus.is_one());

        let exponent = BigInt::from(exponent);
        let result = base.pow_mod(&exponent, &modulus);

        let expected = to_num(&base.rem_euclid(&modulus))
            .modpow(&to_num(&exponent), &to_num(&modulus));
        prop_assert_eq!(to_num(&result), expected);
    }

    #[test]
    fn inverse_of_modular_product(a in bigint(), n in nonzero()) {
        // (a * a^-1) * x = x (mod n) for any x when the inverse exists
        let n = n.abs();
        prop_assume!(!n.is_one());
        if let Ok(inverse) = a.inv_mod(&n) {
            let x = BigInt::from(0x1234_5678u64);
            let lhs = (&(&a.rem_euclid(&n) * &inverse) * &x).rem_euclid(&n);
            prop_assert_eq!(lhs, x.rem_euclid(&n));
        }
    }
}
