//! Textual encoding of unsigned integers in any radix between 2 and 62.
//!
//! Digits use the alphabet `0-9A-Za-z`. Up to radix 36 letters are read
//! case-insensitively and written in lowercase. Above that, uppercase
//! letters stand for 10 to 35 and lowercase letters for 36 to 61.
//!
//! ASCII whitespace anywhere in the input is skipped when parsing, so
//! `"1 000 000"` reads as one million.
use core::fmt;
use std::error;

use num_bigint::BigUint;

/// The smallest supported radix.
pub const MIN_RADIX: u32 = 2;
/// The largest supported radix.
pub const MAX_RADIX: u32 = 62;

const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Represents an error which can happen when parsing an integer from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The radix was outside of `2..=62`.
    InvalidRadix(u32),
    /// The string had no digits at all.
    Empty,
    /// Some character is not a digit in the requested radix.
    InvalidDigit { found: char, radix: u32 },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidRadix(radix) => {
                write!(f, "radix must be in {}..={}, found: {}", MIN_RADIX, MAX_RADIX, radix)
            }
            ParseError::Empty => write!(f, "cannot parse integer from empty string"),
            ParseError::InvalidDigit { found, radix } => {
                write!(f, "invalid digit {:?} for radix {}", found, radix)
            }
        }
    }
}

impl error::Error for ParseError {}

fn check_radix(radix: u32) -> Result<(), ParseError> {
    if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
        Ok(())
    } else {
        Err(ParseError::InvalidRadix(radix))
    }
}

fn digit_value(c: u8, radix: u32) -> Option<u8> {
    let value = match c {
        b'0'..=b'9' => c - b'0',
        b'A'..=b'Z' => c - b'A' + 10,
        b'a'..=b'z' if radix <= 36 => c - b'a' + 10,
        b'a'..=b'z' => c - b'a' + 36,
        _ => return None,
    };
    (u32::from(value) < radix).then_some(value)
}

/// Parse an unsigned integer written in `radix`.
pub fn parse(s: &str, radix: u32) -> Result<BigUint, ParseError> {
    check_radix(radix)?;
    let digits = s
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .map(|c| {
            u8::try_from(c)
                .ok()
                .and_then(|c| digit_value(c, radix))
                .ok_or(ParseError::InvalidDigit { found: c, radix })
        })
        .collect::<Result<Vec<u8>, _>>()?;
    if digits.is_empty() {
        return Err(ParseError::Empty);
    }
    BigUint::from_radix_be(&digits, radix).ok_or(ParseError::InvalidRadix(radix))
}

/// Write an unsigned integer in `radix`.
pub fn format(x: &BigUint, radix: u32) -> Result<String, ParseError> {
    check_radix(radix)?;
    let out = x
        .to_radix_be(radix)
        .into_iter()
        .map(|d| {
            let c = ALPHABET[usize::from(d)];
            if radix <= 36 {
                char::from(c).to_ascii_lowercase()
            } else {
                char::from(c)
            }
        })
        .collect();
    Ok(out)
}
