//! Bitcoin legacy (Base58Check) address validation.

#![forbid(unsafe_code)]

pub mod network;
pub mod validate;

pub use network::{classify, version_byte, versions_for, AddressType, Network};
pub use validate::{
    decode_address, is_valid, is_valid_with, DecodedAddress, ADDRESS_PAYLOAD_LEN, DEFAULT_VERSIONS,
    HASH160_LEN, TESTNET_VERSIONS,
};
