/// How many nonces a single call to [`crate::sign`] may draw before giving up.
///
/// A degenerate nonce happens with probability about `2/n`, so hitting this
/// cap means the randomness source is broken, not that we were unlucky.
pub const MAX_SIGN_ATTEMPTS: usize = 64;

/// The SEC 2 name of the NIST P-192 curve.
pub const SECP192R1: &str = "secp192r1";
/// The SEC 2 name of the Koblitz curve used by Bitcoin.
pub const SECP256K1: &str = "secp256k1";
/// The SEC 2 name of the NIST P-256 curve.
pub const SECP256R1: &str = "secp256r1";
