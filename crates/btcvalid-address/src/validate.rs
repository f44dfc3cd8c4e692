//! Bitcoin address decoding and validation.
//!
//! Address format:
//! - Version byte: network and address type (1 byte)
//! - Content: hash160 (20 bytes)
//! - Checksum: sha256(sha256(version || hash160))[0:4] (4 bytes)
//! - Encoded: Base58(version || hash160 || checksum)
//!
//! [`decode_address`] reports why an address is rejected; [`is_valid`] and
//! [`is_valid_with`] only answer yes or no and never fail.

#![forbid(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use crate::network::{classify, AddressType, Network};
use btcvalid_core::{EncodingError, Result};
use btcvalid_crypto::base58check;

/// hash160 length in bytes.
pub const HASH160_LEN: usize = 20;

/// Decoded payload length: 1 (version) + 20 (hash160) = 21 bytes
pub const ADDRESS_PAYLOAD_LEN: usize = 1 + HASH160_LEN;

/// Version bytes accepted when the caller supplies none (mainnet P2PKH).
pub const DEFAULT_VERSIONS: &[u8] = &[0x00];

/// Testnet P2PKH.
pub const TESTNET_VERSIONS: &[u8] = &[0x6f];

/// A checksum-verified address split into its version byte and hash160.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DecodedAddress {
    pub version: u8,
    pub hash160: [u8; HASH160_LEN],
}

impl DecodedAddress {
    /// Network the version byte belongs to, if it is a known one.
    pub fn network(&self) -> Option<Network> {
        classify(self.version).map(|(network, _)| network)
    }

    /// Address type the version byte denotes, if it is a known one.
    pub fn address_type(&self) -> Option<AddressType> {
        classify(self.version).map(|(_, addr_type)| addr_type)
    }

    /// The 21-byte payload: version || hash160.
    pub fn payload(&self) -> [u8; ADDRESS_PAYLOAD_LEN] {
        let mut out = [0u8; ADDRESS_PAYLOAD_LEN];
        out[0] = self.version;
        out[1..].copy_from_slice(&self.hash160);
        out
    }
}

impl fmt::Display for DecodedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only UnmappableDigit can fail here, and a byte payload never yields one
        let text = base58check::encode_checked(&self.payload()).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl FromStr for DecodedAddress {
    type Err = EncodingError;

    /// Parse against [`DEFAULT_VERSIONS`].
    fn from_str(s: &str) -> Result<Self> {
        decode_address(s, DEFAULT_VERSIONS)
    }
}

/// Decode `address` into its version byte and hash160.
///
/// Fails on a bad Base58 character, a checksum mismatch, a payload that is
/// not 21 bytes, or a version byte missing from `allowed_versions`.
pub fn decode_address(address: &str, allowed_versions: &[u8]) -> Result<DecodedAddress> {
    let payload = base58check::decode_checked(address)?;

    if payload.len() != ADDRESS_PAYLOAD_LEN {
        return Err(EncodingError::InvalidLength {
            len: payload.len(),
            address: address.to_string(),
        });
    }

    let version = payload[0];
    if !allowed_versions.contains(&version) {
        return Err(EncodingError::InvalidVersion {
            version,
            address: address.to_string(),
        });
    }

    let mut hash160 = [0u8; HASH160_LEN];
    hash160.copy_from_slice(&payload[1..]);

    Ok(DecodedAddress { version, hash160 })
}

/// Return true if and only if `address` is a valid mainnet P2PKH address.
pub fn is_valid(address: &str) -> bool {
    is_valid_with(address, DEFAULT_VERSIONS)
}

/// Return true if and only if `address` is valid and its version byte is in
/// `allowable_prefixes`.
pub fn is_valid_with(address: &str, allowable_prefixes: &[u8]) -> bool {
    match decode_address(address, allowable_prefixes) {
        Ok(decoded) => allowable_prefixes.contains(&decoded.version),
        Err(_) => false,
    }
}
