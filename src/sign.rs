use digest::Digest;
use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::OsRng;
use tracing::debug;

use crate::{
    constants::MAX_SIGN_ATTEMPTS,
    curve::DomainParameters,
    math,
    random::{self, NonceSource},
    Signature,
};

/// Hash a message and turn it into an integer suitable for [`sign`].
///
/// The digest is truncated to the leftmost bits of the group order, so the
/// result never trips the size check in [`sign`].
pub fn hash_message<D: Digest>(msg: &[u8], domain: &DomainParameters) -> BigUint {
    math::bits_to_int(&D::digest(msg), domain.order())
}

/// Sign a message with a private key.
///
/// The message is an integer, usually a hash produced by [`hash_message`].
/// A fresh nonce is drawn from `rng` on every attempt; attempts where
/// `r` or `s` come out as zero are thrown away.
///
/// # Panics
///
/// If the message has more bits than the group order. Truncating the message
/// silently would sign something other than what the caller asked for, so
/// callers must reduce their digests first.
///
/// If [`MAX_SIGN_ATTEMPTS`] nonces in a row are degenerate, which only
/// happens when `rng` is broken.
pub fn sign(
    rng: &mut (impl NonceSource + ?Sized),
    message: &BigUint,
    private_key: &BigUint,
    domain: &DomainParameters,
) -> Signature {
    let n = domain.order();
    assert!(
        message.bits() <= n.bits(),
        "message has {} bits, but the group order only has {}",
        message.bits(),
        n.bits()
    );

    for attempt in 1..=MAX_SIGN_ATTEMPTS {
        let k = random::nonce(&mut *rng, n);

        let big_r = domain.mul_generator(&k);
        let r = big_r.x() % n;
        if r.is_zero() {
            debug!(attempt, "nonce gave r = 0, retrying");
            continue;
        }

        // s = k⁻¹(e + dr) mod n
        let k_inv = math::invert(&k, n);
        let s = (k_inv * ((message + private_key * &r) % n)) % n;
        if s.is_zero() {
            debug!(attempt, "nonce gave s = 0, retrying");
            continue;
        }

        return Signature::from_components(r, s);
    }

    panic!(
        "no valid signature after {} nonces: entropy or algorithm invariant violated",
        MAX_SIGN_ATTEMPTS
    );
}

/// Sign a message, drawing nonces from the operating system.
///
/// See [`sign`] for the conditions under which this panics.
pub fn sign_with_os_rng(
    message: &BigUint,
    private_key: &BigUint,
    domain: &DomainParameters,
) -> Signature {
    sign(&mut OsRng, message, private_key, domain)
}
