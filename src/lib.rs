//! ECDSA signing and verification over arbitrary domain parameters.
//!
//! Most ECDSA libraries hard-code a handful of curves, with arithmetic
//! specialized for each of them. This crate instead takes the curve as a
//! value: any short Weierstrass curve `y² = x³ + ax + b` over a prime field,
//! with a generator of prime order `n`, described by [`DomainParameters`].
//! Integers are arbitrary precision [`BigUint`](num_bigint::BigUint)s
//! throughout.
//!
//! # Warning
//!
//! The arithmetic here is generic and not constant time. For production
//! signing on a standard curve, prefer a dedicated implementation such as
//! `k256` or `p256`; the [`compat`] module converts between the two.
//!
//! # Usage
//!
//! ```ignore
//! let domain = DomainParameters::secp256k1();
//! let keys = KeyPair::generate(&mut OsRng, &domain);
//! let e = hash_message::<Sha256>(b"hello", &domain);
//! let sig = sign(&mut OsRng, &e, keys.private_key(), &domain);
//! assert!(verify(&e, &sig, keys.public_key(), &domain));
//! ```
//!
//! Messages are integers rather than byte strings, so that any hash can be
//! used. A message must not have more bits than `n`; [`hash_message`] takes
//! care of this, and [`sign`] panics otherwise.
//!
//! # Nonces
//!
//! Signing draws a fresh nonce from the caller's RNG on every attempt. If the
//! nonce leads to `r = 0` or `s = 0`, which is astronomically unlikely on
//! real curves, the attempt is thrown away and another nonce is drawn.
//!
//! # Verification
//!
//! Verification returns a plain `bool`. Signatures with a component outside
//! of `[1, n-1]` are rejected before any curve arithmetic happens, and are
//! not distinguished from signatures which simply don't match.
pub mod compat;
mod constants;
mod curve;
mod keygen;
mod math;
pub mod radix;
mod random;
pub mod serde;
mod sign;
mod signature;
#[cfg(test)]
mod test;
mod verify;

pub use constants::{MAX_SIGN_ATTEMPTS, SECP192R1, SECP256K1, SECP256R1};
pub use curve::{DomainError, DomainParameters, Point};
pub use keygen::{derive_public_key, KeyPair};
pub use radix::ParseError;
pub use random::NonceSource;
pub use sign::{hash_message, sign, sign_with_os_rng};
pub use signature::Signature;
pub use verify::verify;
