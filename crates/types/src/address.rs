//! Defines the canonical 32-byte [`Address`] used for every on-chain entity.
//!
//! Two address namespaces exist by convention: wallet addresses, which are
//! externally supplied, and derived addresses, which are computed
//! deterministically from a program identifier and a seed list. Both share
//! this representation; nothing in this layer ever generates an address
//! randomly.

use crate::error::AddressParseError;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A 32-byte public identifier for an on-chain account or program.
///
/// The text form is base58, matching the host chain's convention, and is what
/// the serde implementation emits for human-readable formats such as JSON.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address(pub [u8; 32]);

impl Address {
    /// Creates an address from raw bytes. Usable in `const` context, which is
    /// how the well-known program identifiers are declared.
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw 32-byte representation.
    pub const fn to_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Parses a base58 string into an address.
    pub fn from_base58(s: &str) -> Result<Self, AddressParseError> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|e| AddressParseError::InvalidBase58(e.to_string()))?;
        let arr: [u8; 32] = bytes
            .try_into()
            .map_err(|v: Vec<u8>| AddressParseError::InvalidLength { got: v.len() })?;
        Ok(Self(arr))
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for Address {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", bs58::encode(&self.0).into_string())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base58(s)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_string())
        } else {
            serializer.serialize_bytes(&self.0)
        }
    }
}

struct AddressVisitor;

impl Visitor<'_> for AddressVisitor {
    type Value = Address;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a base58 string or 32 raw bytes")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Address, E> {
        Address::from_base58(v).map_err(de::Error::custom)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Address, E> {
        let arr: [u8; 32] = v
            .try_into()
            .map_err(|_| de::Error::invalid_length(v.len(), &self))?;
        Ok(Address(arr))
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            deserializer.deserialize_str(AddressVisitor)
        } else {
            deserializer.deserialize_bytes(AddressVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base58_round_trip() {
        let addr = Address::new([7u8; 32]);
        let text = addr.to_string();
        let parsed: Address = text.parse().unwrap();
        assert_eq!(addr, parsed);
    }

    #[test]
    fn rejects_wrong_length() {
        // 31 bytes of zeros encodes to 31 '1' characters.
        let err = Address::from_base58(&"1".repeat(31)).unwrap_err();
        assert!(matches!(err, AddressParseError::InvalidLength { got: 31 }));
    }

    #[test]
    fn rejects_bad_alphabet() {
        assert!(Address::from_base58("not-base58-0OIl").is_err());
    }

    #[test]
    fn json_uses_base58_text() {
        let addr = Address::new([3u8; 32]);
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, format!("\"{addr}\""));
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(addr, back);
    }
}
