//! Points and domain parameters for short Weierstrass curves.
//!
//! A curve here is `y² = x³ + ax + b` over the prime field `F_p`, along with
//! a generator `G` of a subgroup of prime order `n`, and the cofactor `h`.
//!
//! The arithmetic uses affine coordinates and is written for clarity rather
//! than speed. Scalar multiplication uses a Montgomery ladder, so the sequence
//! of group operations doesn't depend on the bits of the scalar, but the
//! underlying big integer operations are not constant time.
use core::fmt;
use std::error;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::{
    constants::{SECP192R1, SECP256K1, SECP256R1},
    math,
    radix::{self, ParseError},
    serde::{deserialize_uint, serialize_uint},
};

/// A point on some curve, in affine coordinates.
///
/// The point at infinity is represented with a flag, with both coordinates
/// set to zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    #[serde(serialize_with = "serialize_uint", deserialize_with = "deserialize_uint")]
    x: BigUint,
    #[serde(serialize_with = "serialize_uint", deserialize_with = "deserialize_uint")]
    y: BigUint,
    infinity: bool,
}

impl Point {
    /// Create a point from its affine coordinates.
    ///
    /// This doesn't check that the point lies on any curve, see
    /// [`DomainParameters::contains`].
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Self {
            x,
            y,
            infinity: false,
        }
    }

    /// The point at infinity, i.e. the identity of the group.
    pub fn identity() -> Self {
        Self {
            x: BigUint::zero(),
            y: BigUint::zero(),
            infinity: true,
        }
    }

    /// Parse a point from two hexadecimal coordinates.
    pub fn from_hex(x: &str, y: &str) -> Result<Self, ParseError> {
        Ok(Self::new(radix::parse(x, 16)?, radix::parse(y, 16)?))
    }

    pub fn x(&self) -> &BigUint {
        &self.x
    }

    pub fn y(&self) -> &BigUint {
        &self.y
    }

    pub fn is_identity(&self) -> bool {
        self.infinity
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.infinity {
            write!(f, "(infinity)")
        } else {
            write!(f, "({}, {})", self.x, self.y)
        }
    }
}

/// Represents an error which can happen when building domain parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One of the parameters couldn't be parsed.
    Parse(ParseError),
    /// Some parameter is structurally wrong.
    BadParameters(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::Parse(e) => write!(f, "failed to parse domain parameter: {}", e),
            DomainError::BadParameters(s) => write!(f, "bad domain parameters: {}", s),
        }
    }
}

impl error::Error for DomainError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            DomainError::Parse(e) => Some(e),
            DomainError::BadParameters(_) => None,
        }
    }
}

impl From<ParseError> for DomainError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

/// The parameters describing the group we sign in.
///
/// These are immutable once created, and can be freely shared between
/// threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainParameters {
    name: String,
    p: BigUint,
    a: BigUint,
    b: BigUint,
    generator: Point,
    n: BigUint,
    h: BigUint,
}

impl DomainParameters {
    /// Create domain parameters, after a few structural checks.
    ///
    /// We check that the field and group orders are large enough, that the
    /// curve isn't singular, and that the generator lies on the curve. We do
    /// *not* check primality, or that `n` is really the order of `G`.
    pub fn new(
        name: impl Into<String>,
        p: BigUint,
        a: BigUint,
        b: BigUint,
        generator: Point,
        n: BigUint,
        h: BigUint,
    ) -> Result<Self, DomainError> {
        if p <= BigUint::from(3u32) || !p.bit(0) {
            return Err(DomainError::BadParameters(
                "field prime must be odd and > 3".to_string(),
            ));
        }
        if a >= p || b >= p {
            return Err(DomainError::BadParameters(
                "curve coefficients must be reduced modulo p".to_string(),
            ));
        }
        // A nonce is drawn from [1, n-2], which must not be empty.
        if n < BigUint::from(3u32) {
            return Err(DomainError::BadParameters(format!(
                "group order cannot be < 3, found: {}",
                n
            )));
        }
        if h.is_zero() {
            return Err(DomainError::BadParameters(
                "cofactor cannot be 0".to_string(),
            ));
        }
        let out = Self {
            name: name.into(),
            p,
            a,
            b,
            generator,
            n,
            h,
        };
        let discriminant = (BigUint::from(4u32) * out.a.pow(3) + BigUint::from(27u32) * out.b.pow(2))
            % &out.p;
        if discriminant.is_zero() {
            return Err(DomainError::BadParameters("curve is singular".to_string()));
        }
        if out.generator.is_identity() || !out.contains(&out.generator) {
            return Err(DomainError::BadParameters(
                "generator must be a finite point on the curve".to_string(),
            ));
        }
        Ok(out)
    }

    /// Create domain parameters from hexadecimal strings.
    #[allow(clippy::too_many_arguments)]
    pub fn from_hex(
        name: impl Into<String>,
        p: &str,
        a: &str,
        b: &str,
        gx: &str,
        gy: &str,
        n: &str,
        h: &str,
    ) -> Result<Self, DomainError> {
        Self::new(
            name,
            radix::parse(p, 16)?,
            radix::parse(a, 16)?,
            radix::parse(b, 16)?,
            Point::from_hex(gx, gy)?,
            radix::parse(n, 16)?,
            radix::parse(h, 16)?,
        )
    }

    /// Look up one of the built-in curves by its SEC 2 name.
    pub fn named(name: &str) -> Option<Self> {
        match name {
            SECP192R1 => Some(Self::secp192r1()),
            SECP256K1 => Some(Self::secp256k1()),
            SECP256R1 => Some(Self::secp256r1()),
            _ => None,
        }
    }

    /// NIST P-192, from FIPS 186-4 § D.1.2.1.
    pub fn secp192r1() -> Self {
        Self::from_hex(
            SECP192R1,
            "fffffffffffffffffffffffffffffffeffffffffffffffff",
            "fffffffffffffffffffffffffffffffefffffffffffffffc",
            "64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1",
            "188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012",
            "07192b95ffc8da78631011ed6b24cdd573f977a11e794811",
            "ffffffffffffffffffffffff99def836146bc9b1b4d22831",
            "1",
        )
        .expect("secp192r1 parameters are valid")
    }

    /// The Koblitz curve secp256k1, from SEC 2 § 2.4.1.
    pub fn secp256k1() -> Self {
        Self::from_hex(
            SECP256K1,
            "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
            "0",
            "7",
            "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
            "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
            "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141",
            "1",
        )
        .expect("secp256k1 parameters are valid")
    }

    /// NIST P-256, from FIPS 186-4 § D.1.2.3.
    pub fn secp256r1() -> Self {
        Self::from_hex(
            SECP256R1,
            "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
            "ffffffff00000001000000000000000000000000fffffffffffffffffffffffc",
            "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b",
            "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
            "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5",
            "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551",
            "1",
        )
        .expect("secp256r1 parameters are valid")
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The prime `p` of the base field.
    pub fn field_prime(&self) -> &BigUint {
        &self.p
    }

    pub fn a(&self) -> &BigUint {
        &self.a
    }

    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// The generator `G` of the signing subgroup.
    pub fn generator(&self) -> &Point {
        &self.generator
    }

    /// The prime order `n` of the signing subgroup.
    pub fn order(&self) -> &BigUint {
        &self.n
    }

    pub fn cofactor(&self) -> &BigUint {
        &self.h
    }

    /// The number of bytes needed to hold an integer modulo `n`.
    pub fn scalar_len(&self) -> usize {
        ((self.n.bits() + 7) / 8) as usize
    }

    fn sub(&self, x: &BigUint, y: &BigUint) -> BigUint {
        ((x + &self.p) - (y % &self.p)) % &self.p
    }

    fn mul_mod(&self, x: &BigUint, y: &BigUint) -> BigUint {
        (x * y) % &self.p
    }

    fn div(&self, x: &BigUint, y: &BigUint) -> BigUint {
        // Only called with non zero denominators, and p is prime.
        let y_inv = math::try_invert(y, &self.p).unwrap_or_else(BigUint::zero);
        self.mul_mod(x, &y_inv)
    }

    /// Check whether a point lies on this curve.
    ///
    /// The point at infinity is always on the curve.
    pub fn contains(&self, point: &Point) -> bool {
        if point.infinity {
            return true;
        }
        if point.x >= self.p || point.y >= self.p {
            return false;
        }
        let lhs = self.mul_mod(&point.y, &point.y);
        let rhs = (point.x.modpow(&BigUint::from(3u32), &self.p) + &self.a * &point.x + &self.b)
            % &self.p;
        lhs == rhs
    }

    /// Compute `-P`.
    pub fn negate(&self, point: &Point) -> Point {
        if point.infinity {
            return Point::identity();
        }
        Point::new(point.x.clone(), self.sub(&BigUint::zero(), &point.y))
    }

    /// Compute `2P`.
    pub fn double(&self, point: &Point) -> Point {
        if point.infinity || point.y.is_zero() {
            return Point::identity();
        }
        // λ = (3x² + a) / 2y
        let numerator = (BigUint::from(3u32) * &point.x * &point.x + &self.a) % &self.p;
        let lambda = self.div(&numerator, &(BigUint::from(2u32) * &point.y));
        self.finish_add(&lambda, &point.x, &point.x, &point.y)
    }

    /// Compute `P + Q`.
    pub fn add(&self, lhs: &Point, rhs: &Point) -> Point {
        if lhs.infinity {
            return rhs.clone();
        }
        if rhs.infinity {
            return lhs.clone();
        }
        if lhs.x == rhs.x {
            if lhs.y == rhs.y {
                return self.double(lhs);
            }
            // Q = -P
            return Point::identity();
        }
        // λ = (y₂ - y₁) / (x₂ - x₁)
        let lambda = self.div(&self.sub(&rhs.y, &lhs.y), &self.sub(&rhs.x, &lhs.x));
        self.finish_add(&lambda, &lhs.x, &rhs.x, &lhs.y)
    }

    fn finish_add(&self, lambda: &BigUint, x1: &BigUint, x2: &BigUint, y1: &BigUint) -> Point {
        let x3 = self.sub(&self.sub(&self.mul_mod(lambda, lambda), x1), x2);
        let y3 = self.sub(&self.mul_mod(lambda, &self.sub(x1, &x3)), y1);
        Point::new(x3, y3)
    }

    /// Compute `kP`.
    pub fn mul(&self, k: &BigUint, point: &Point) -> Point {
        let mut r0 = Point::identity();
        let mut r1 = point.clone();
        for i in (0..k.bits()).rev() {
            if k.bit(i) {
                r0 = self.add(&r0, &r1);
                r1 = self.double(&r1);
            } else {
                r1 = self.add(&r0, &r1);
                r0 = self.double(&r0);
            }
        }
        r0
    }

    /// Compute `kG`.
    pub fn mul_generator(&self, k: &BigUint) -> Point {
        self.mul(k, &self.generator)
    }

    /// Check that `n` really annihilates the generator.
    ///
    /// This costs a full scalar multiplication, so [`Self::new`] doesn't do it.
    pub fn generator_has_order(&self) -> bool {
        self.mul_generator(&self.n).is_identity()
            && !self.mul_generator(&(&self.n - BigUint::one())).is_identity()
    }
}
