// SPDX-License-Identifier: Apache-2.0
use crate::{Cid, CidJson};
use ::serde::{
    de::{value::MapAccessDeserializer, Error, MapAccess, SeqAccess, Visitor},
    Deserialize, Deserializer,
};
use core::fmt;

struct CidVisitor;

impl<'de> Visitor<'de> for CidVisitor {
    type Value = Cid;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "a CID string, CID bytes or an object with codec, version and hash"
        )
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Cid::from_text(v).map_err(Error::custom)
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Cid::from_bytes(v).map_err(Error::custom)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut v: Vec<u8> = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(b) = seq.next_element()? {
            v.push(b);
        }
        self.visit_bytes(&v)
    }

    fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let json = CidJson::deserialize(MapAccessDeserializer::new(map))?;
        Cid::try_from(json).map_err(Error::custom)
    }
}

/// Accepts the string, binary and object forms regardless of the format
impl<'de> Deserialize<'de> for Cid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(CidVisitor)
    }
}
