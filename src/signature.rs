use core::fmt;

use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::{
    radix::{self, ParseError},
    serde::{deserialize_uint, serialize_uint},
};

/// An ECDSA signature, i.e. the pair of integers `(r, s)`.
///
/// A signature produced by [`crate::sign`] always has both components in
/// `[1, n-1]`. Signatures built by hand may hold anything, and
/// [`crate::verify`] rejects those which are out of range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    #[serde(serialize_with = "serialize_uint", deserialize_with = "deserialize_uint")]
    r: BigUint,
    #[serde(serialize_with = "serialize_uint", deserialize_with = "deserialize_uint")]
    s: BigUint,
}

impl Signature {
    /// Create a signature with both components set to zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_components(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }

    /// Parse both components from strings in any radix between 2 and 62.
    pub fn from_str_radix(r: &str, s: &str, radix: u32) -> Result<Self, ParseError> {
        Ok(Self {
            r: radix::parse(r, radix)?,
            s: radix::parse(s, radix)?,
        })
    }

    pub fn from_hex(r: &str, s: &str) -> Result<Self, ParseError> {
        Self::from_str_radix(r, s, 16)
    }

    pub fn from_u64(r: u64, s: u64) -> Self {
        Self {
            r: BigUint::from(r),
            s: BigUint::from(s),
        }
    }

    /// Overwrite both components from strings in any radix between 2 and 62.
    ///
    /// If either string fails to parse, the signature is left untouched.
    pub fn set_str_radix(&mut self, r: &str, s: &str, radix: u32) -> Result<(), ParseError> {
        *self = Self::from_str_radix(r, s, radix)?;
        Ok(())
    }

    pub fn set_hex(&mut self, r: &str, s: &str) -> Result<(), ParseError> {
        self.set_str_radix(r, s, 16)
    }

    pub fn set_u64(&mut self, r: u64, s: u64) {
        self.r = BigUint::from(r);
        self.s = BigUint::from(s);
    }

    /// Make this signature a copy of another one.
    pub fn copy_from(&mut self, other: &Self) {
        self.clone_from(other);
    }

    /// Release the storage held by this signature.
    ///
    /// This is what dropping the signature does anyway, but reads better at
    /// call sites which manage signatures explicitly.
    pub fn release(self) {}

    pub fn r(&self) -> &BigUint {
        &self.r
    }

    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Split the signature into `(r, s)`.
    pub fn into_components(self) -> (BigUint, BigUint) {
        (self.r, self.s)
    }

    pub fn is_zero(&self) -> bool {
        self.r.is_zero() && self.s.is_zero()
    }

    /// Write both components in any radix between 2 and 62.
    pub fn to_str_radix(&self, radix: u32) -> Result<(String, String), ParseError> {
        Ok((radix::format(&self.r, radix)?, radix::format(&self.s, radix)?))
    }

    pub fn to_hex(&self) -> (String, String) {
        (self.r.to_str_radix(16), self.s.to_str_radix(16))
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.s)
    }
}
