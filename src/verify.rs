use num_bigint::BigUint;
use tracing::trace;

use crate::{
    curve::{DomainParameters, Point},
    math, Signature,
};

/// Check that a signature on a message was produced by the owner of a public key.
///
/// Malformed signatures, malformed public keys, and signatures which simply
/// don't match all produce `false`, without telling the caller which.
///
/// # Panics
///
/// Only if the domain parameters are broken, with a group order which isn't
/// prime.
#[must_use]
pub fn verify(
    message: &BigUint,
    signature: &Signature,
    public_key: &Point,
    domain: &DomainParameters,
) -> bool {
    let n = domain.order();
    let (r, s) = (signature.r(), signature.s());
    if !math::in_scalar_range(r, n) || !math::in_scalar_range(s, n) {
        trace!("signature component outside of [1, n-1]");
        return false;
    }
    if public_key.is_identity() || !domain.contains(public_key) {
        trace!("public key is not a finite point on the curve");
        return false;
    }

    let w = math::invert(s, n);
    let u1 = ((message % n) * &w) % n;
    let u2 = (r * &w) % n;

    let big_x = domain.add(&domain.mul_generator(&u1), &domain.mul(&u2, public_key));
    if big_x.is_identity() {
        return false;
    }
    let x = big_x.x() % n;
    math::ct_eq(&x, r, domain.scalar_len()).into()
}
