//! Base58 encoding and decoding.
//!
//! Uses Bitcoin alphabet (excludes 0, O, I, l to avoid confusion).
//! Leading zero bytes map one-to-one onto leading '1' characters.

#![forbid(unsafe_code)]

use crate::bigbase::{from_integer, to_integer};
use btcvalid_core::Result;

/// Base58 alphabet (Bitcoin style).
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Numeric base of the encoding.
pub const BASE: u32 = 58;

const BYTE_BASE: u32 = 256;

/// Reverse lookup: ASCII byte -> digit, 0xFF where the byte is not in the alphabet.
const DECODE_MAP: [u8; 128] = {
    let mut map = [0xFFu8; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        map[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    map
};

/// Digit value of a Base58 character, if it belongs to the alphabet.
pub fn digit(c: char) -> Option<u32> {
    if !c.is_ascii() {
        return None;
    }
    match DECODE_MAP[c as usize] {
        0xFF => None,
        d => Some(u32::from(d)),
    }
}

/// Check if a character is in the Base58 alphabet.
pub fn is_base58_char(c: char) -> bool {
    digit(c).is_some()
}

/// Encode bytes to Base58 string.
///
/// Fails only with [`EncodingError::UnmappableDigit`](btcvalid_core::EncodingError::UnmappableDigit),
/// which no input can trigger while every remainder stays below 58.
pub fn encode(data: &[u8]) -> Result<String> {
    let (value, zeros) = to_integer(BYTE_BASE, |b: u8| Some(u32::from(b)), data)?;
    let chars = from_integer(value, zeros, BASE, |d| {
        ALPHABET.get(d as usize).map(|&b| char::from(b))
    })?;
    Ok(chars.into_iter().collect())
}

/// Decode a Base58 string to bytes.
///
/// The first character outside the alphabet is reported as
/// [`EncodingError::InvalidCharacter`](btcvalid_core::EncodingError::InvalidCharacter).
pub fn decode(text: &str) -> Result<Vec<u8>> {
    let chars: Vec<char> = text.chars().collect();
    let (value, zeros) = to_integer(BASE, digit, &chars)?;
    from_integer(value, zeros, BYTE_BASE, |d| u8::try_from(d).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use btcvalid_core::EncodingError;

    #[test]
    fn test_empty() {
        assert_eq!(encode(b"").unwrap(), "");
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_single_zero() {
        assert_eq!(encode(&[0]).unwrap(), "1");
        assert_eq!(decode("1").unwrap(), vec![0]);
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(encode(&[0, 0, 0, 1]).unwrap(), "1112");
        assert_eq!(decode("1112").unwrap(), vec![0, 0, 0, 1]);
    }

    #[test]
    fn test_hello_world() {
        assert_eq!(encode(b"Hello World!").unwrap(), "2NEpo7TZRRrLZSi2U");
        assert_eq!(decode("2NEpo7TZRRrLZSi2U").unwrap(), b"Hello World!");
    }

    #[test]
    fn test_alphabet_lookup_is_bijective() {
        for (i, &c) in ALPHABET.iter().enumerate() {
            assert_eq!(digit(char::from(c)), Some(i as u32));
        }
        let valid = (0u8..128).filter(|&b| digit(char::from(b)).is_some()).count();
        assert_eq!(valid, 58);
    }

    #[test]
    fn test_excluded_characters() {
        for c in ['0', 'O', 'I', 'l', '+', '/', ' ', 'é'] {
            assert!(!is_base58_char(c), "{c:?} should be rejected");
        }
    }

    #[test]
    fn test_invalid_characters_name_first_offender() {
        let err = decode("l1IO0").unwrap_err();
        assert_eq!(
            err,
            EncodingError::InvalidCharacter {
                character: 'l',
                input: "l1IO0".to_string()
            }
        );
    }

    #[test]
    fn test_non_ascii_rejected() {
        let err = decode("1A€").unwrap_err();
        assert!(matches!(err, EncodingError::InvalidCharacter { character: '€', .. }));
    }

    #[test]
    fn test_against_bs58_crate() {
        let test_cases: &[&[u8]] = &[
            b"",
            b"a",
            b"abc",
            b"Hello World!",
            &[0],
            &[0, 0, 0],
            &[0, 0, 0, 1, 2, 3],
            &[0xff; 32],
            &[0x00, 0xff, 0x00, 0xff],
            &[0x00; 25],
        ];

        for data in test_cases {
            let ours = encode(data).unwrap();
            let reference = bs58::encode(data).into_string();
            assert_eq!(ours, reference, "mismatch for data {:?}", data);
            assert_eq!(decode(&ours).unwrap(), data.to_vec());
        }
    }

    #[test]
    fn test_text_roundtrip() {
        for s in ["1", "11", "1z", "z", "1111211", "2NEpo7TZRRrLZSi2U"] {
            assert_eq!(encode(&decode(s).unwrap()).unwrap(), s);
        }
    }

    #[test]
    fn test_generated_bytes_roundtrip() {
        use rand::{Rng, RngCore, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = ChaCha8Rng::seed_from_u64(58);
        for _ in 0..400 {
            let zeros = rng.gen_range(0..6);
            let len = rng.gen_range(0..48);
            let mut data = vec![0u8; zeros + len];
            rng.fill_bytes(&mut data[zeros..]);

            let ours = encode(&data).unwrap();
            assert_eq!(ours, bs58::encode(&data).into_string(), "mismatch for {:02x?}", data);
            assert_eq!(decode(&ours).unwrap(), data);
        }
    }

    #[test]
    fn test_leading_ones_roundtrip() {
        for k in 0..=5 {
            for tail in ["", "2", "z", "2NEpo7TZRRrLZSi2U", "BvBMSEYstWetqTFn5Au4m4GFg7xJaNVN2"] {
                let s = format!("{}{}", "1".repeat(k), tail);
                let bytes = decode(&s).unwrap();
                assert_eq!(bytes.iter().take_while(|&&b| b == 0).count(), k, "for {s}");
                assert_eq!(encode(&bytes).unwrap(), s);
            }
        }
    }

    #[test]
    fn test_address_sized_payload() {
        // version (1) + hash160 (20) + checksum (4) = 25 bytes
        let data = [0x01u8; 25];
        assert_eq!(encode(&data).unwrap(), bs58::encode(&data).into_string());
    }
}
