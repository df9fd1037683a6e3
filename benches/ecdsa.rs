use bigcurve_ecdsa::{
    derive_public_key, hash_message, sign, verify, DomainParameters, KeyPair, SECP192R1,
    SECP256K1, SECP256R1,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand_core::OsRng;
use sha2::Sha256;

pub fn criterion_benchmark(c: &mut Criterion) {
    let msg = b"hello world";

    for name in [SECP192R1, SECP256K1, SECP256R1] {
        let domain = DomainParameters::named(name).unwrap();
        let keys = KeyPair::generate(&mut OsRng, &domain);
        let e = hash_message::<Sha256>(msg, &domain);

        c.bench_function(&format!("derive public key ({})", name), |b| {
            b.iter(|| derive_public_key(black_box(keys.private_key()), &domain))
        });

        c.bench_function(&format!("sign ({})", name), |b| {
            b.iter(|| sign(&mut OsRng, black_box(&e), keys.private_key(), &domain))
        });

        let sig = sign(&mut OsRng, &e, keys.private_key(), &domain);

        c.bench_function(&format!("verify ({})", name), |b| {
            b.iter(|| verify(black_box(&e), black_box(&sig), keys.public_key(), &domain))
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
