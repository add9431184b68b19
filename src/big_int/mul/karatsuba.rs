//! Karatsuba multiplication.
//!
//! Splitting each operand into halves `x = x1 * R^h + x0` (with `R` the
//! limb radix and `h` half the padded operand length) turns one product
//! into three half-sized ones:
//!
//! ```text
//! z0 = x0 * y0
//! z2 = x1 * y1
//! z1 = (x1 + x0) * (y1 + y0) - z2 - z0
//! x * y = z2 * R^(2h) + z1 * R^h + z0
//! ```
//!
//! Recursion flows back through the size-dispatched multiply, so
//! sub-products below the threshold take the schoolbook path instead of
//! recursing down to single limbs.

use crate::{BigInt, Limb};
use alloc::vec::Vec;

pub(super) fn mul(x: &BigInt, y: &BigInt) -> BigInt {
    // Pad both operands to a common even limb count for clean splitting.
    let mut n = x.nlimbs().max(y.nlimbs());
    if n % 2 != 0 {
        n += 1;
    }
    let half = n / 2;

    let (x0, x1) = split(x, half);
    let (y0, y1) = split(y, half);

    let z0 = x0.mul_magnitude(&y0);
    let z2 = x1.mul_magnitude(&y1);
    let z1 = &(&x1 + &x0).mul_magnitude(&(&y1 + &y0)) - &(&z2 + &z0);

    let mut result = z0;
    result += &z1 << (half as u32 * Limb::BITS);
    result += &z2 << (n as u32 * Limb::BITS);
    result
}

/// Split a magnitude into `(low, high)` halves of `half` limbs each.
fn split(value: &BigInt, half: usize) -> (BigInt, BigInt) {
    let limbs = value.as_limbs();

    let low: Vec<Limb> = limbs[..half.min(limbs.len())].to_vec();
    let high: Vec<Limb> = if limbs.len() > half {
        limbs[half..].to_vec()
    } else {
        Vec::new()
    };

    (BigInt::from_magnitude(low), BigInt::from_magnitude(high))
}
