//! Conversions to and from the RustCrypto curve crates.
//!
//! The types in this crate work over any domain parameters, while the
//! RustCrypto crates have one type per curve. For the curves both sides
//! know about, [`NamedCurve`] links the two, and the functions here move
//! signatures and points across.
use core::fmt;
use std::error;

use ecdsa::SignatureSize;
#[allow(deprecated)]
use elliptic_curve::generic_array::ArrayLength;
use elliptic_curve::{
    sec1::{EncodedPoint, FromEncodedPoint, ModulusSize, ToEncodedPoint},
    AffinePoint, Curve, CurveArithmetic, FieldBytes, FieldBytesSize, PrimeCurve,
};
use num_bigint::BigUint;

use crate::{curve::Point, math, DomainParameters, Signature};

pub mod k256_impl;
pub mod p256_impl;

/// Represents a RustCrypto curve which this crate also knows the parameters of.
///
/// This library provides feature-gated implementations for `k256` and `p256`.
pub trait NamedCurve: PrimeCurve + CurveArithmetic {
    /// The SEC 2 name of the curve.
    const NAME: &'static str;

    /// The domain parameters describing this curve.
    fn domain_parameters() -> DomainParameters;
}

/// Represents an error which can happen when converting to a RustCrypto type.
#[derive(Debug)]
pub enum ConversionError {
    /// Some integer doesn't fit in the curve's field size.
    OutOfRange,
    /// The point isn't on the target curve.
    NotOnCurve,
    /// The RustCrypto signature type rejected the components.
    Rejected(ecdsa::Error),
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::OutOfRange => write!(f, "integer too large for the curve"),
            ConversionError::NotOnCurve => write!(f, "point is not on the curve"),
            ConversionError::Rejected(e) => write!(f, "signature rejected: {}", e),
        }
    }
}

impl error::Error for ConversionError {}

fn field_bytes<C: Curve>(x: &BigUint) -> Result<FieldBytes<C>, ConversionError> {
    let mut out = FieldBytes::<C>::default();
    let raw = math::to_fixed_bytes(x, out.len()).ok_or(ConversionError::OutOfRange)?;
    out.copy_from_slice(&raw);
    Ok(out)
}

/// Convert a signature into the fixed size RustCrypto representation.
///
/// This fails if either component is zero or not below the curve order.
#[allow(deprecated)]
pub fn to_ecdsa_signature<C>(sig: &Signature) -> Result<ecdsa::Signature<C>, ConversionError>
where
    C: PrimeCurve,
    SignatureSize<C>: ArrayLength<u8>,
{
    let r = field_bytes::<C>(sig.r())?;
    let s = field_bytes::<C>(sig.s())?;
    ecdsa::Signature::from_scalars(r, s).map_err(ConversionError::Rejected)
}

/// Convert a RustCrypto signature into a signature of this crate.
#[allow(deprecated)]
pub fn from_ecdsa_signature<C>(sig: &ecdsa::Signature<C>) -> Signature
where
    C: PrimeCurve,
    SignatureSize<C>: ArrayLength<u8>,
{
    let (r, s) = sig.split_bytes();
    Signature::from_components(BigUint::from_bytes_be(&r), BigUint::from_bytes_be(&s))
}

/// Convert a point into an affine point of a RustCrypto curve.
pub fn to_affine_point<C>(point: &Point) -> Result<AffinePoint<C>, ConversionError>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let encoded = if point.is_identity() {
        EncodedPoint::<C>::identity()
    } else {
        let x = field_bytes::<C>(point.x())?;
        let y = field_bytes::<C>(point.y())?;
        EncodedPoint::<C>::from_affine_coordinates(&x, &y, false)
    };
    Option::<AffinePoint<C>>::from(AffinePoint::<C>::from_encoded_point(&encoded))
        .ok_or(ConversionError::NotOnCurve)
}

/// Convert an affine point of a RustCrypto curve into a point of this crate.
pub fn from_affine_point<C>(point: &AffinePoint<C>) -> Point
where
    C: CurveArithmetic,
    AffinePoint<C>: ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let encoded = point.to_encoded_point(false);
    match (encoded.x(), encoded.y()) {
        (Some(x), Some(y)) => Point::new(BigUint::from_bytes_be(x), BigUint::from_bytes_be(y)),
        _ => Point::identity(),
    }
}

#[cfg(test)]
mod test {
    use std::error::Error;

    use digest::Digest;
    use ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
    use k256::Secp256k1;
    use p256::NistP256;
    use rand_core::OsRng;
    use sha2::Sha256;

    use super::*;
    use crate::{hash_message, sign, verify, KeyPair};

    const MSG: &[u8] = b"hello world";

    #[test]
    fn test_k256_verifies_our_signatures() -> Result<(), Box<dyn Error>> {
        let domain = Secp256k1::domain_parameters();
        let digest = Sha256::digest(MSG);
        // Run a few times, so that both halves of s get hit.
        for _ in 0..4 {
            let pair = KeyPair::generate(&mut OsRng, &domain);
            let e = hash_message::<Sha256>(MSG, &domain);
            let sig = sign(&mut OsRng, &e, pair.private_key(), &domain);

            // k256 only accepts the low half of s, and (r, n - s) is just as valid.
            let n = domain.order();
            let sig = if sig.s() > &(n >> 1) {
                Signature::from_components(sig.r().clone(), n - sig.s())
            } else {
                sig
            };
            let their_sig = to_ecdsa_signature::<Secp256k1>(&sig)?;
            let verifying_key =
                k256::ecdsa::VerifyingKey::from_affine(to_affine_point::<Secp256k1>(
                    pair.public_key(),
                )?)?;
            verifying_key.verify_prehash(&digest, &their_sig)?;

            assert_eq!(from_ecdsa_signature(&their_sig), sig);
            assert!(verify(&e, &sig, pair.public_key(), &domain));
        }
        Ok(())
    }

    #[test]
    fn test_we_verify_k256_signatures() -> Result<(), Box<dyn Error>> {
        let domain = DomainParameters::secp256k1();
        let signing_key = k256::ecdsa::SigningKey::random(&mut OsRng);
        let private_key = BigUint::from_bytes_be(&signing_key.to_bytes());
        let public_key = from_affine_point::<Secp256k1>(signing_key.verifying_key().as_affine());
        assert_eq!(
            KeyPair::from_private_key(private_key, &domain).public_key(),
            &public_key
        );

        let digest = Sha256::digest(MSG);
        let their_sig: k256::ecdsa::Signature = signing_key.sign_prehash(&digest)?;
        let sig = from_ecdsa_signature(&their_sig);
        let e = hash_message::<Sha256>(MSG, &domain);
        assert!(verify(&e, &sig, &public_key, &domain));
        assert!(!verify(&(e + 1u32), &sig, &public_key, &domain));
        Ok(())
    }

    #[test]
    fn test_p256_interop() -> Result<(), Box<dyn Error>> {
        let domain = NistP256::domain_parameters();
        assert_eq!(domain.name(), NistP256::NAME);
        let digest = Sha256::digest(MSG);
        let e = hash_message::<Sha256>(MSG, &domain);

        let pair = KeyPair::generate(&mut OsRng, &domain);
        let sig = sign(&mut OsRng, &e, pair.private_key(), &domain);
        let verifying_key =
            p256::ecdsa::VerifyingKey::from_affine(to_affine_point::<NistP256>(pair.public_key())?)?;
        verifying_key.verify_prehash(&digest, &to_ecdsa_signature::<NistP256>(&sig)?)?;

        let signing_key = p256::ecdsa::SigningKey::random(&mut OsRng);
        let public_key = from_affine_point::<NistP256>(signing_key.verifying_key().as_affine());
        let their_sig: p256::ecdsa::Signature = signing_key.sign_prehash(&digest)?;
        assert!(verify(&e, &from_ecdsa_signature(&their_sig), &public_key, &domain));
        Ok(())
    }

    #[test]
    fn test_conversion_errors() {
        let sig = Signature::from_u64(0, 1);
        let err = to_ecdsa_signature::<Secp256k1>(&sig).unwrap_err();
        assert!(matches!(err, ConversionError::Rejected(_)));
        assert!(err.to_string().starts_with("signature rejected"));
        // The error has to be usable as a boxed std error by callers.
        let boxed: Box<dyn Error + Send + Sync> = Box::new(err);
        assert!(!boxed.to_string().is_empty());
        let huge = BigUint::from(1u32) << 300;
        let sig = Signature::from_components(huge, BigUint::from(1u32));
        assert!(matches!(
            to_ecdsa_signature::<Secp256k1>(&sig),
            Err(ConversionError::OutOfRange)
        ));
        let off_curve = Point::new(BigUint::from(1u32), BigUint::from(1u32));
        assert!(matches!(
            to_affine_point::<Secp256k1>(&off_curve),
            Err(ConversionError::NotOnCurve)
        ));
        assert!(from_affine_point::<Secp256k1>(
            &to_affine_point::<Secp256k1>(&Point::identity()).unwrap()
        )
        .is_identity());
    }
}
