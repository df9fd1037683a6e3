use num_bigint::BigUint;
use rand_core::OsRng;
use sha2::{Sha256, Sha512};

use crate::{
    hash_message,
    serde::{decode, encode},
    sign, sign_with_os_rng, verify, DomainParameters, KeyPair, Point, Signature, SECP192R1,
    SECP256K1, SECP256R1,
};

fn run_e2e(domain: &DomainParameters, msg: &[u8]) {
    let keys = KeyPair::generate(&mut OsRng, domain);
    let e = hash_message::<Sha512>(msg, domain);
    let sig = sign(&mut OsRng, &e, keys.private_key(), domain);
    assert!(verify(&e, &sig, keys.public_key(), domain));

    // Signatures travel as two integers, either as text or as bytes.
    let (r, s) = sig.to_str_radix(62).unwrap();
    let parsed = Signature::from_str_radix(&r, &s, 62).unwrap();
    assert!(verify(&e, &parsed, keys.public_key(), domain));

    let decoded: Signature = decode(&encode(&sig)).unwrap();
    let public_key: Point = decode(&encode(keys.public_key())).unwrap();
    assert!(verify(&e, &decoded, &public_key, domain));

    let (r, s) = decoded.into_components();
    assert_eq!(Signature::from_components(r, s), sig);

    let other = hash_message::<Sha512>(b"some other message", domain);
    assert!(!verify(&other, &sig, keys.public_key(), domain));
}

#[test]
fn test_e2e_named_curves() {
    for name in [SECP192R1, SECP256K1, SECP256R1] {
        let domain = DomainParameters::named(name).unwrap();
        run_e2e(&domain, b"hello world");
    }
}

#[test]
fn test_e2e_custom_domain() {
    // secp256k1 again, but loaded the way a caller with their own curve would.
    let domain = DomainParameters::from_hex(
        "custom",
        "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
        "0",
        "7",
        "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
        "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
        "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141",
        "1",
    )
    .unwrap();
    run_e2e(&domain, b"hello world");
}

#[test]
fn test_signing_is_randomized() {
    let domain = DomainParameters::secp256r1();
    let keys = KeyPair::generate(&mut OsRng, &domain);
    let e = hash_message::<Sha256>(b"hello world", &domain);
    let sig0 = sign_with_os_rng(&e, keys.private_key(), &domain);
    let sig1 = sign_with_os_rng(&e, keys.private_key(), &domain);
    assert_ne!(sig0, sig1);
    assert!(verify(&e, &sig0, keys.public_key(), &domain));
    assert!(verify(&e, &sig1, keys.public_key(), &domain));
}

#[test]
fn test_concurrent_signing_shares_domain() {
    let domain = DomainParameters::secp256k1();
    let keys = KeyPair::generate(&mut OsRng, &domain);
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0u32..4)
            .map(|i| {
                let (domain, keys) = (&domain, &keys);
                scope.spawn(move || {
                    let e = BigUint::from(i) << 200;
                    let sig = sign(&mut OsRng, &e, keys.private_key(), domain);
                    (e, sig)
                })
            })
            .collect();
        for handle in handles {
            let (e, sig) = handle.join().unwrap();
            assert!(verify(&e, &sig, keys.public_key(), &domain));
        }
    });
}
