//! Encoding primitives for btcvalid.
//!
//! Base58 goes through an arbitrary-precision integer; bs58 is a
//! dev-dependency only and used to cross-check results.

#![forbid(unsafe_code)]

pub mod base58;
pub mod base58check;
pub mod bigbase;
