#[cfg(any(feature = "p256", test))]
mod p256_impl {
    use p256::NistP256;

    use super::super::*;
    use crate::constants::SECP256R1;

    impl NamedCurve for NistP256 {
        const NAME: &'static str = SECP256R1;

        fn domain_parameters() -> DomainParameters {
            DomainParameters::secp256r1()
        }
    }
}
