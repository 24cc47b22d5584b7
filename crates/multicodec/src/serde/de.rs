// SPDX-License-Identifier: Apache-2.0
use crate::Codec;
use ::serde::{
    de::{Error, Visitor},
    Deserialize, Deserializer,
};
use core::fmt;

struct CodecVisitor;

impl Visitor<'_> for CodecVisitor {
    type Value = Codec;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a multicodec name or code")
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Codec::try_from(v).map_err(Error::custom)
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Codec::try_from(v).map_err(Error::custom)
    }
}

/// Accepts either form regardless of the format
impl<'de> Deserialize<'de> for Codec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(CodecVisitor)
    }
}
