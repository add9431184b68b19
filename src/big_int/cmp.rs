//! [`BigInt`] comparisons.

use super::BigInt;
use core::cmp::Ordering;

impl BigInt {
    /// Compare magnitudes, ignoring signs: first by limb count, then
    /// limb-wise from the most significant end.
    pub(crate) fn cmp_magnitude(&self, rhs: &Self) -> Ordering {
        if self.limbs.len() != rhs.limbs.len() {
            return self.limbs.len().cmp(&rhs.limbs.len());
        }

        for (a, b) in self.limbs.iter().rev().zip(rhs.limbs.iter().rev()) {
            match a.cmp(b) {
                Ordering::Equal => continue,
                other => return other,
            }
        }

        Ordering::Equal
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.cmp_magnitude(other),
            (true, true) => other.cmp_magnitude(self),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
