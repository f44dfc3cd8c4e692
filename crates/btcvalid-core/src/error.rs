use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("bad character {character:?} in string {input:?}")]
    InvalidCharacter { character: char, input: String },

    #[error("can't convert to character corresponding to {0}")]
    UnmappableDigit(u32),

    #[error("invalid base {0}: must be at least 2")]
    InvalidBase(u32),

    #[error("hashed base58 too short ({len} bytes) to carry a checksum: {input:?}")]
    TooShort { len: usize, input: String },

    #[error("hashed base58 has bad checksum {input:?}")]
    BadChecksum { input: String },

    #[error("incorrect binary length ({len}) for Bitcoin address {address:?}")]
    InvalidLength { len: usize, address: String },

    #[error("incorrect first byte ({version:#04x}) for Bitcoin address {address:?}")]
    InvalidVersion { version: u8, address: String },
}
