//! Serde support for [`BigInt`].
//!
//! Human-readable formats carry the hex string form; binary formats carry
//! a `(sign, magnitude-bytes)` pair.

use super::BigInt;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for BigInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_hex())
        } else {
            (self.is_negative(), self.to_be_bytes()).serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let hex = String::deserialize(deserializer)?;
            Self::from_hex(&hex).map_err(de::Error::custom)
        } else {
            let (negative, bytes) = <(bool, Vec<u8>)>::deserialize(deserializer)?;
            Ok(Self::from_be_bytes(&bytes).with_sign(negative))
        }
    }
}
