use ark_std::{fmt, vec::Vec};
use serde::de::{SeqAccess, Visitor};

/// Visitor that accepts a byte string, a base64 string, or a sequence of bytes.
pub struct BytesVisitor;

impl<'de> Visitor<'de> for BytesVisitor {
    type Value = Vec<u8>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a valid byte or base64 encoding")
    }

    fn visit_bytes<E: serde::de::Error>(self, v: &[u8]) -> Result<Vec<u8>, E> {
        Ok(v.to_vec())
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Vec<u8>, E> {
        crate::utils::b64dec(v).map_err(serde::de::Error::custom)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Vec<u8>, A::Error> {
        let mut bytes = Vec::new();
        while let Some(b) = seq.next_element::<u8>()? {
            bytes.push(b);
        }
        Ok(bytes)
    }
}

/// Implement serde through `to_bytes`/`from_bytes`, using base64 for human-readable formats.
#[macro_export]
macro_rules! serialize_deserialize {
    ($t:ident, $to:ident, $from:ident) => {
        impl serde::Serialize for $t {
            fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                if serializer.is_human_readable() {
                    serializer.serialize_str(&$crate::utils::b64enc(&self.$to()))
                } else {
                    serializer.serialize_bytes(&self.$to())
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for $t {
            fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let bytes = if deserializer.is_human_readable() {
                    deserializer.deserialize_str($crate::serialization::BytesVisitor)?
                } else {
                    deserializer.deserialize_bytes($crate::serialization::BytesVisitor)?
                };
                $t::$from(bytes.as_slice()).map_err(serde::de::Error::custom)
            }
        }
    };
    ($t:ident) => {
        $crate::serialize_deserialize!($t, to_bytes, from_bytes);
    };
}
