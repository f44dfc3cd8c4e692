//! Core error type shared by the btcvalid crates.

#![forbid(unsafe_code)]

mod error;

pub use error::EncodingError;

pub type Result<T> = std::result::Result<T, EncodingError>;
