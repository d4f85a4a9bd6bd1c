//! Serde support for arkworks objects, which only implement `CanonicalSerialize` and
//! `CanonicalDeserialize`. Use as `#[serde_as(as = "ArkObjectBytes")]` on a field.

use alloc::vec::Vec;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_with::{DeserializeAs, SerializeAs};

/// Serializes the compressed canonical bytes of the object as a byte sequence
pub struct ArkObjectBytes;

impl<T: CanonicalSerialize> SerializeAs<T> for ArkObjectBytes {
    fn serialize_as<S: Serializer>(elem: &T, serializer: S) -> Result<S::Ok, S::Error> {
        let mut bytes = Vec::with_capacity(elem.compressed_size());
        elem.serialize_compressed(&mut bytes)
            .map_err(serde::ser::Error::custom)?;
        bytes.serialize(serializer)
    }
}

impl<'de, T: CanonicalDeserialize> DeserializeAs<'de, T> for ArkObjectBytes {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<T, D::Error> {
        let bytes = Vec::<u8>::deserialize(deserializer)?;
        T::deserialize_compressed(bytes.as_slice()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::{Fr, G2Affine};
    use ark_ec::AffineRepr;
    use serde::{Deserialize, Serialize};
    use serde_with::serde_as;

    #[serde_as]
    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Wrapper {
        #[serde_as(as = "ArkObjectBytes")]
        point: G2Affine,
        #[serde_as(as = "Vec<ArkObjectBytes>")]
        scalars: Vec<Fr>,
    }

    #[test]
    fn json_round_trip() {
        let w = Wrapper {
            point: (G2Affine::generator() * Fr::from(7u64)).into(),
            scalars: vec![Fr::from(1u64), -Fr::from(2u64)],
        };
        let json = serde_json::to_string(&w).unwrap();
        let back: Wrapper = serde_json::from_str(&json).unwrap();
        assert_eq!(w, back);

        assert!(serde_json::from_str::<Wrapper>(r#"{"point":[1,2,3],"scalars":[]}"#).is_err());
    }
}
