use num_bigint::{BigUint, RandBigInt};
use rand_core::CryptoRngCore;

/// A source of secret nonces.
///
/// Every cryptographically secure RNG is a nonce source. Implementing this
/// trait by hand is only useful for tests which need to pin down the nonce.
pub trait NonceSource {
    /// Draw an integer uniformly from `[0, bound)`.
    ///
    /// `bound` is always at least 1.
    fn uniform_below(&mut self, bound: &BigUint) -> BigUint;
}

impl<R: CryptoRngCore + ?Sized> NonceSource for R {
    fn uniform_below(&mut self, bound: &BigUint) -> BigUint {
        self.gen_biguint_below(bound)
    }
}

/// Draw a nonce uniformly from `[1, n-2]`.
pub(crate) fn nonce(source: &mut (impl NonceSource + ?Sized), n: &BigUint) -> BigUint {
    let bound = n - 2u32;
    source.uniform_below(&bound) + 1u32
}

/// Draw a scalar uniformly from `[1, n-1]`.
pub(crate) fn nonzero_scalar(source: &mut (impl NonceSource + ?Sized), n: &BigUint) -> BigUint {
    let bound = n - 1u32;
    source.uniform_below(&bound) + 1u32
}
