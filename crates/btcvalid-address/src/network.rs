//! Bitcoin network and address-type version bytes.
//!
//! The version byte is the first byte of the Base58Check payload.

#![forbid(unsafe_code)]

use std::fmt;

/// Bitcoin network type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Network {
    Mainnet,
    Testnet,
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mainnet => f.write_str("mainnet"),
            Self::Testnet => f.write_str("testnet"),
        }
    }
}

/// Legacy address types carried by a Base58Check payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AddressType {
    /// Pay-to-Public-Key-Hash
    P2PKH,
    /// Pay-to-Script-Hash
    P2SH,
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::P2PKH => f.write_str("p2pkh"),
            Self::P2SH => f.write_str("p2sh"),
        }
    }
}

/// Version byte for an address type on a network.
///
/// | | P2PKH | P2SH |
/// |---|---|---|
/// | mainnet | 0x00 | 0x05 |
/// | testnet | 0x6f | 0xc4 |
pub const fn version_byte(network: Network, addr_type: AddressType) -> u8 {
    match (network, addr_type) {
        (Network::Mainnet, AddressType::P2PKH) => 0x00,
        (Network::Mainnet, AddressType::P2SH) => 0x05,
        (Network::Testnet, AddressType::P2PKH) => 0x6f,
        (Network::Testnet, AddressType::P2SH) => 0xc4,
    }
}

/// Inverse of [`version_byte`].
pub const fn classify(version: u8) -> Option<(Network, AddressType)> {
    match version {
        0x00 => Some((Network::Mainnet, AddressType::P2PKH)),
        0x05 => Some((Network::Mainnet, AddressType::P2SH)),
        0x6f => Some((Network::Testnet, AddressType::P2PKH)),
        0xc4 => Some((Network::Testnet, AddressType::P2SH)),
        _ => None,
    }
}

/// Allow-list of version bytes for every (network, type) combination given.
pub fn versions_for(networks: &[Network], addr_types: &[AddressType]) -> Vec<u8> {
    let mut out = Vec::with_capacity(networks.len() * addr_types.len());
    for &network in networks {
        for &addr_type in addr_types {
            let v = version_byte(network, addr_type);
            if !out.contains(&v) {
                out.push(v);
            }
        }
    }
    out
}
