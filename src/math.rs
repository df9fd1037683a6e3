use num_bigint::BigUint;
use num_traits::Zero;
use subtle::{Choice, ConstantTimeEq};

/// Compute `a⁻¹ mod n`, or `None` if `a` shares a factor with `n`.
pub fn try_invert(a: &BigUint, n: &BigUint) -> Option<BigUint> {
    if n.is_zero() {
        return None;
    }
    a.modinv(n)
}

/// Compute `a⁻¹ mod n`.
///
/// # Panics
///
/// The callers only ever invert values in `[1, n-1]` modulo a prime, so a
/// missing inverse means the domain parameters are broken.
pub fn invert(a: &BigUint, n: &BigUint) -> BigUint {
    try_invert(a, n).unwrap_or_else(|| panic!("no inverse modulo the group order"))
}

/// Check that `1 <= x <= n-1`.
pub fn in_scalar_range(x: &BigUint, n: &BigUint) -> bool {
    !x.is_zero() && x < n
}

/// Encode `x` as exactly `len` big-endian bytes, or `None` if it doesn't fit.
pub fn to_fixed_bytes(x: &BigUint, len: usize) -> Option<Vec<u8>> {
    let raw = if x.is_zero() { Vec::new() } else { x.to_bytes_be() };
    if raw.len() > len {
        return None;
    }
    let mut out = vec![0u8; len];
    out[len - raw.len()..].copy_from_slice(&raw);
    Some(out)
}

/// Compare two integers without branching on their contents.
///
/// Both values are padded to `len` bytes first; a value which doesn't fit
/// compares unequal.
pub fn ct_eq(a: &BigUint, b: &BigUint, len: usize) -> Choice {
    match (to_fixed_bytes(a, len), to_fixed_bytes(b, len)) {
        (Some(a), Some(b)) => a.ct_eq(&b),
        _ => Choice::from(0),
    }
}

/// Convert a digest into an integer with at most as many bits as `n`.
///
/// This keeps the leftmost bits of the digest, as in SEC 1, section 4.1.3.
pub fn bits_to_int(digest: &[u8], n: &BigUint) -> BigUint {
    let e = BigUint::from_bytes_be(digest);
    let digest_bits = 8 * digest.len() as u64;
    let order_bits = n.bits();
    if digest_bits > order_bits {
        e >> (digest_bits - order_bits)
    } else {
        e
    }
}
