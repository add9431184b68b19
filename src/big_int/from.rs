//! `From`-like conversions for [`BigInt`].

use super::BigInt;
use crate::{Limb, Word};
use alloc::vec;

impl From<u8> for BigInt {
    fn from(n: u8) -> Self {
        Word::from(n).into()
    }
}

impl From<u16> for BigInt {
    fn from(n: u16) -> Self {
        Word::from(n).into()
    }
}

impl From<u32> for BigInt {
    fn from(n: u32) -> Self {
        Word::from(n).into()
    }
}

impl From<u64> for BigInt {
    fn from(n: u64) -> Self {
        Self {
            limbs: vec![Limb(n)],
            negative: false,
        }
    }
}

impl From<u128> for BigInt {
    fn from(n: u128) -> Self {
        Self::from_limbs(vec![Limb(n as Word), Limb((n >> Limb::BITS) as Word)], false)
    }
}

impl From<i8> for BigInt {
    fn from(n: i8) -> Self {
        i64::from(n).into()
    }
}

impl From<i16> for BigInt {
    fn from(n: i16) -> Self {
        i64::from(n).into()
    }
}

impl From<i32> for BigInt {
    fn from(n: i32) -> Self {
        i64::from(n).into()
    }
}

impl From<i64> for BigInt {
    fn from(n: i64) -> Self {
        Self::from_limbs(vec![Limb(n.unsigned_abs())], n < 0)
    }
}

impl From<i128> for BigInt {
    fn from(n: i128) -> Self {
        let magnitude = n.unsigned_abs();
        Self::from_limbs(
            vec![
                Limb(magnitude as Word),
                Limb((magnitude >> Limb::BITS) as Word),
            ],
            n < 0,
        )
    }
}
