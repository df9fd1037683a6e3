#[cfg(any(feature = "k256", test))]
mod k256_impl {
    use k256::Secp256k1;

    use super::super::*;
    use crate::constants::SECP256K1;

    impl NamedCurve for Secp256k1 {
        const NAME: &'static str = SECP256K1;

        fn domain_parameters() -> DomainParameters {
            DomainParameters::secp256k1()
        }
    }
}
