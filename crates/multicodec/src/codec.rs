// SPDX-License-Identifier: Apache-2.0
use crate::Error;
use core::{fmt, str::FromStr};
use multitrait::{EncodeInto, TryDecodeFrom};

include!(concat!(env!("OUT_DIR"), "/codec_table.rs"));

impl Codec {
    /// Normalize a legacy codec name into the table's dash form: surrounding
    /// whitespace dropped, lowercased, underscores turned into dashes
    pub fn normalize_name(name: &str) -> String {
        name.trim().to_lowercase().replace('_', "-")
    }

    /// True if this codec identifies a hash function
    pub fn is_hash(&self) -> bool {
        self.tag() == "multihash"
    }

    /// Iterate over every (name, code) pair in the table
    pub fn table() -> impl Iterator<Item = (&'static str, u64)> {
        Self::ALL.iter().map(|c| (c.name(), c.code()))
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<u64> for Codec {
    type Error = Error;

    fn try_from(code: u64) -> Result<Self, Self::Error> {
        Self::lookup_code(code).ok_or(Error::InvalidCode(code))
    }
}

impl TryFrom<&str> for Codec {
    type Error = Error;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Self::lookup_name(&Self::normalize_name(name))
            .ok_or_else(|| Error::InvalidName(name.to_string()))
    }
}

impl FromStr for Codec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl From<Codec> for u64 {
    fn from(codec: Codec) -> u64 {
        codec.code()
    }
}

impl EncodeInto for Codec {
    fn encode_into(&self) -> Vec<u8> {
        self.code().encode_into()
    }
}

impl From<Codec> for Vec<u8> {
    fn from(codec: Codec) -> Vec<u8> {
        codec.encode_into()
    }
}

impl<'a> TryDecodeFrom<'a> for Codec {
    type Error = Error;

    fn try_decode_from(bytes: &'a [u8]) -> Result<(Self, &'a [u8]), Self::Error> {
        let (code, ptr) = u64::try_decode_from(bytes)?;
        Ok((Self::try_from(code)?, ptr))
    }
}
