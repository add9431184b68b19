//! Pure Rust implementation of arbitrary-precision signed integer arithmetic
//! geared towards number-theoretic workloads.
//!
//! # About
//! This library implements a sign-magnitude big integer over 64-bit limbs
//! together with the operations cryptographic and number-theoretic code
//! leans on: Karatsuba multiplication, Montgomery and Barrett modular
//! reduction contexts, modular exponentiation and inversion, the extended
//! Euclidean algorithm, Miller-Rabin primality testing, and random prime
//! generation.
//!
//! All arithmetic runs in variable time. This crate is *not* a suitable
//! implementation for handling deployed cryptographic secrets; it is aimed
//! at calculators, protocol prototyping, and test tooling where timing
//! side channels are not a concern.
//!
//! # Usage
//! ```
//! use bignum::BigInt;
//!
//! let a = BigInt::from_hex("123456789")?;
//! let b = BigInt::from_hex("abcdef")?;
//! assert_eq!((&a * &b).to_hex(), "c379aaaa375de7");
//!
//! let base = BigInt::from(2);
//! let exponent = BigInt::from(10);
//! let modulus = BigInt::from(1000);
//! assert_eq!(base.pow_mod(&exponent, &modulus), BigInt::from(24));
//!
//! assert_eq!(BigInt::from(3).inv_mod(&BigInt::from(11))?, BigInt::from(4));
//! # Ok::<(), bignum::Error>(())
//! ```
//!
//! # Feature flags
//! - `std` (default): `std::error::Error` impls.
//! - `serde`: serialization as a hex string (human-readable formats) or a
//!   sign/magnitude pair (binary formats).
//! - `zeroize`: best-effort clearing of limb buffers.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

mod big_int;
mod error;
mod limb;
mod modular;

pub use crate::{
    big_int::BigInt,
    error::Error,
    limb::{Limb, WideWord, Word},
    modular::{BarrettParams, MontyParams},
};
pub use rand_core;
