use core::fmt;

use num_bigint::BigUint;
use serde::{
    de::{self, DeserializeOwned, SeqAccess, Visitor},
    Deserializer, Serialize, Serializer,
};

/// Encode an arbitrary serializable value into a vec.
pub fn encode<T: Serialize + ?Sized>(val: &T) -> Vec<u8> {
    rmp_serde::encode::to_vec(val).expect("failed to encode value")
}

/// Decode a value previously produced by [`encode`].
pub fn decode<T: DeserializeOwned>(data: &[u8]) -> Result<T, rmp_serde::decode::Error> {
    rmp_serde::decode::from_slice(data)
}

/// Serialize an unsigned integer as big endian bytes.
pub fn serialize_uint<S: Serializer>(data: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_bytes(&data.to_bytes_be())
}

struct UintVisitor;

impl<'de> Visitor<'de> for UintVisitor {
    type Value = BigUint;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "big endian bytes of an unsigned integer")
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        Ok(BigUint::from_bytes_be(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(b) = seq.next_element::<u8>()? {
            bytes.push(b);
        }
        Ok(BigUint::from_bytes_be(&bytes))
    }
}

/// Deserialize an unsigned integer written by [`serialize_uint`].
pub fn deserialize_uint<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
    deserializer.deserialize_bytes(UintVisitor)
}
