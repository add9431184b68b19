//! Hex, byte-array, and fixed-precision conversions for [`BigInt`].

use super::BigInt;
use crate::{Error, Limb, Word};
use alloc::string::String;
use alloc::vec::Vec;
use alloc::vec;
use core::fmt::{self, Write};
use core::str::FromStr;

impl BigInt {
    /// Encode as a hex string: an optional leading `-`, the most
    /// significant limb unpadded, then each remaining limb zero-padded to
    /// 16 digits. Zero encodes as `"0"`.
    pub fn to_hex(&self) -> String {
        let mut s = String::new();
        self.write_hex(&mut s, false).expect("writing to a String cannot fail");
        s
    }

    pub(super) fn fmt_hex(&self, f: &mut fmt::Formatter<'_>, upper: bool) -> fmt::Result {
        self.write_hex(f, upper)
    }

    fn write_hex(&self, out: &mut impl Write, upper: bool) -> fmt::Result {
        if self.is_zero() {
            return out.write_char('0');
        }

        if self.is_negative() {
            out.write_char('-')?;
        }

        let mut limbs = self.limbs.iter().rev();
        let top = limbs.next().expect("limb vector is never empty");
        if upper {
            write!(out, "{:X}", top.0)?;
            for limb in limbs {
                write!(out, "{limb:X}")?;
            }
        } else {
            write!(out, "{:x}", top.0)?;
            for limb in limbs {
                write!(out, "{limb:x}")?;
            }
        }

        Ok(())
    }

    /// Parse a hex string: an optional leading `-`, an optional `0x`
    /// prefix, then hex digits in either case. The empty string (after
    /// stripping sign and prefix) parses to zero.
    pub fn from_hex(hex: &str) -> Result<Self, Error> {
        let (negative, digits) = match hex.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, hex),
        };
        let digits = digits.strip_prefix("0x").unwrap_or(digits);

        if digits.is_empty() {
            return Ok(Self::zero());
        }

        // Right-aligned 16-digit chunks, one per limb.
        let mut limbs = Vec::with_capacity(digits.len().div_ceil(16));
        for chunk in digits.as_bytes().rchunks(16) {
            let mut value: Word = 0;
            for &byte in chunk {
                let digit = (byte as char).to_digit(16).ok_or(Error::InvalidHexDigit)?;
                value = (value << 4) | Word::from(digit);
            }
            limbs.push(Limb(value));
        }

        Ok(Self::from_limbs(limbs, negative))
    }

    /// Serialize the magnitude as big-endian bytes, without leading zero
    /// bytes; the sign is discarded. Zero encodes as the empty sequence.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.limbs.len() * Limb::BYTES);
        for limb in self.limbs.iter().rev() {
            out.extend_from_slice(&limb.0.to_be_bytes());
        }
        out.drain(..out.len() - self.byte_length());
        out
    }

    /// Create a non-negative [`BigInt`] from big-endian bytes. The empty
    /// slice decodes to zero.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            return Self::zero();
        }

        let mut limbs = vec![Limb::ZERO; bytes.len().div_ceil(Limb::BYTES)];
        for (chunk, limb) in bytes.rchunks(Limb::BYTES).zip(limbs.iter_mut()) {
            let mut buf = [0u8; Limb::BYTES];
            buf[Limb::BYTES - chunk.len()..].copy_from_slice(chunk);
            *limb = Limb(Word::from_be_bytes(buf));
        }

        Self::from_magnitude(limbs)
    }

    /// Convert to a signed 64-bit integer.
    ///
    /// Errors when the value lies outside `[i64::MIN, i64::MAX]`.
    pub fn to_i64(&self) -> Result<i64, Error> {
        if self.limbs.len() > 1 {
            return Err(Error::Int64Overflow);
        }

        let magnitude = self.limbs[0].0;
        if self.is_negative() {
            // -i64::MIN is i64::MAX + 1
            if magnitude > i64::MAX as Word + 1 {
                return Err(Error::Int64Overflow);
            }
            Ok(magnitude.wrapping_neg() as i64)
        } else {
            if magnitude > i64::MAX as Word {
                return Err(Error::Int64Overflow);
            }
            Ok(magnitude as i64)
        }
    }
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Self::from_hex(s)
    }
}
