// SPDX-License-Identifier: Apache-2.0
use crate::{Cid, CidError, Error, Version};
use core::fmt;
use multicodec::Codec;
use multitrait::{EncodeInto, TryDecodeFrom};
use multiutil::CodecInfo;

/// All of the metadata of a Cid without the digest payload. Every Cid with
/// the same content codec and hash algorithm has the same prefix.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Prefix {
    /// format version
    pub version: Version,
    /// content codec
    pub codec: Codec,
    /// multihash algorithm
    pub hash_codec: Codec,
    /// digest length in bytes
    pub hash_len: usize,
}

impl Prefix {
    /// True if the Cid has this prefix
    pub fn matches(&self, cid: &Cid) -> bool {
        *self == Prefix::from(cid)
    }
}

impl From<&Cid> for Prefix {
    fn from(cid: &Cid) -> Self {
        Self {
            version: cid.version(),
            codec: cid.codec(),
            hash_codec: cid.multihash().codec(),
            hash_len: cid.multihash().len(),
        }
    }
}

impl EncodeInto for Prefix {
    fn encode_into(&self) -> Vec<u8> {
        let mut v = self.version.encode_into();
        v.append(&mut self.codec.encode_into());
        v.append(&mut self.hash_codec.encode_into());
        v.append(&mut self.hash_len.encode_into());
        v
    }
}

impl From<Prefix> for Vec<u8> {
    fn from(p: Prefix) -> Self {
        p.encode_into()
    }
}

impl<'a> TryDecodeFrom<'a> for Prefix {
    type Error = Error;

    fn try_decode_from(bytes: &'a [u8]) -> Result<(Self, &'a [u8]), Self::Error> {
        let (version, ptr) = Version::try_decode_from(bytes)?;
        let (codec, ptr) = Codec::try_decode_from(ptr)?;
        let (hash_codec, ptr) = Codec::try_decode_from(ptr)?;
        let (hash_len, ptr) = usize::try_decode_from(ptr)?;
        Ok((
            Self {
                version,
                codec,
                hash_codec,
                hash_len,
            },
            ptr,
        ))
    }
}

/// The bytes must hold exactly one prefix; use [`TryDecodeFrom`] to read the
/// prefix at the front of a longer buffer
impl<'a> TryFrom<&'a [u8]> for Prefix {
    type Error = Error;

    fn try_from(bytes: &'a [u8]) -> Result<Self, Self::Error> {
        let (p, ptr) = Self::try_decode_from(bytes)?;
        if !ptr.is_empty() {
            return Err(CidError::TrailingBytes(ptr.len()).into());
        }
        Ok(p)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:?} {} {} {}",
            self.version, self.codec, self.hash_codec, self.hash_len
        )
    }
}
