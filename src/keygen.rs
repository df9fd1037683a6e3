use num_bigint::BigUint;

use crate::{
    curve::{DomainParameters, Point},
    random::{self, NonceSource},
};

/// Derive the public key `dG` for a private key `d`.
///
/// The private key is assumed to lie in `[1, n-1]`; this isn't checked.
pub fn derive_public_key(private_key: &BigUint, domain: &DomainParameters) -> Point {
    domain.mul_generator(private_key)
}

/// A private key along with its public key.
#[derive(Clone)]
pub struct KeyPair {
    private_key: BigUint,
    public_key: Point,
}

impl KeyPair {
    /// Generate a fresh key pair, with a private key uniform in `[1, n-1]`.
    pub fn generate(rng: &mut (impl NonceSource + ?Sized), domain: &DomainParameters) -> Self {
        let private_key = random::nonzero_scalar(rng, domain.order());
        Self::from_private_key(private_key, domain)
    }

    pub fn from_private_key(private_key: BigUint, domain: &DomainParameters) -> Self {
        let public_key = derive_public_key(&private_key, domain);
        Self {
            private_key,
            public_key,
        }
    }

    pub fn private_key(&self) -> &BigUint {
        &self.private_key
    }

    pub fn public_key(&self) -> &Point {
        &self.public_key
    }
}

// Keep the private key out of debug output.
impl core::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}
