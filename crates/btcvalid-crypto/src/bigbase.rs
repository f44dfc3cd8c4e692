//! Arbitrary-base numeral conversion through a big integer.
//!
//! A symbol sequence in one base becomes `(value, leading_zeros)`, and back.
//! Leading zero-valued symbols carry no weight in `value`, so their count is
//! tracked separately and re-emitted as zero symbols of the target base.

#![forbid(unsafe_code)]

use btcvalid_core::{EncodingError, Result};
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

/// Convert `symbols` (most significant first) in `base` to an integer.
///
/// Returns the value together with the number of leading zero-valued symbols.
/// `digit_lookup` maps a symbol to its digit; a symbol it rejects, or whose
/// digit is not below `base`, is an [`EncodingError::InvalidCharacter`].
pub fn to_integer<T, F>(base: u32, digit_lookup: F, symbols: &[T]) -> Result<(BigUint, usize)>
where
    T: Copy + Into<char>,
    F: Fn(T) -> Option<u32>,
{
    check_base(base)?;

    let mut value = BigUint::zero();
    let mut leading_zeros = 0usize;

    for &symbol in symbols {
        let digit = digit_lookup(symbol)
            .filter(|&d| d < base)
            .ok_or_else(|| EncodingError::InvalidCharacter {
                character: symbol.into(),
                input: symbols.iter().map(|&s| Into::<char>::into(s)).collect(),
            })?;

        value *= base;
        value += digit;

        // value never decreases, so this only fires for the leading run
        if value.is_zero() {
            leading_zeros += 1;
        }
    }

    Ok((value, leading_zeros))
}

/// Convert `value` to symbols in `base` (most significant first), prefixed by
/// `leading_zeros` copies of the zero symbol.
///
/// A zero `value` produces only the prefix.
pub fn from_integer<T, F>(
    mut value: BigUint,
    leading_zeros: usize,
    base: u32,
    symbol_for_digit: F,
) -> Result<Vec<T>>
where
    T: Clone,
    F: Fn(u32) -> Option<T>,
{
    check_base(base)?;

    let symbol = |digit: u32| symbol_for_digit(digit).ok_or(EncodingError::UnmappableDigit(digit));

    let divisor = BigUint::from(base);
    let mut out = Vec::new();

    while !value.is_zero() {
        let rem = &value % &divisor;
        value /= &divisor;
        // rem < base <= u32::MAX
        let digit = rem.to_u32().ok_or(EncodingError::UnmappableDigit(base))?;
        out.push(symbol(digit)?);
    }

    if leading_zeros > 0 {
        let zero = symbol(0)?;
        out.extend(std::iter::repeat(zero).take(leading_zeros));
    }

    out.reverse();
    Ok(out)
}

fn check_base(base: u32) -> Result<()> {
    if base < 2 {
        return Err(EncodingError::InvalidBase(base));
    }
    Ok(())
}
