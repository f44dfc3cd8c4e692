//! Base58Check: Base58 with a double-SHA256 checksum suffix.
//!
//! Format:
//! - Payload: arbitrary bytes
//! - Checksum: sha256(sha256(payload))[0:4] (4 bytes)
//! - Encoded: Base58(payload || checksum)

#![forbid(unsafe_code)]

use crate::base58;
use btcvalid_core::{EncodingError, Result};
use sha2::{Digest, Sha256};

/// Checksum length in bytes.
pub const CHECKSUM_LEN: usize = 4;

/// SHA-256 applied twice: `sha256(sha256(data))`.
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(Sha256::digest(data)).into()
}

/// First four bytes of the double-SHA256 of `payload`.
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let hash = double_sha256(payload);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&hash[..CHECKSUM_LEN]);
    out
}

/// Decode Base58Check text and return the payload with the checksum stripped.
pub fn decode_checked(text: &str) -> Result<Vec<u8>> {
    let mut data = base58::decode(text)?;
    if data.len() < CHECKSUM_LEN {
        return Err(EncodingError::TooShort {
            len: data.len(),
            input: text.to_string(),
        });
    }

    let split = data.len() - CHECKSUM_LEN;
    if data[split..] != checksum(&data[..split]) {
        return Err(EncodingError::BadChecksum {
            input: text.to_string(),
        });
    }

    data.truncate(split);
    Ok(data)
}

/// Append the checksum to `payload` and Base58-encode the result.
pub fn encode_checked(payload: &[u8]) -> Result<String> {
    let mut data = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    data.extend_from_slice(payload);
    data.extend_from_slice(&checksum(payload));
    base58::encode(&data)
}
