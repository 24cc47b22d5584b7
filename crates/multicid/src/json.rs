// SPDX-License-Identifier: Apache-2.0
use crate::{Cid, Error};
use core::fmt;

/// The plain object form of a Cid: the codec by name, the numeric version
/// and the raw multihash bytes. No multibase is carried; converting back
/// uses the version default.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub struct CidJson {
    /// codec name, e.g. "dag-pb"
    pub codec: String,
    /// format version, 0 or 1
    pub version: u64,
    /// multihash bytes
    pub hash: Vec<u8>,
}

impl From<&Cid> for CidJson {
    fn from(cid: &Cid) -> Self {
        cid.to_json()
    }
}

impl CidJson {
    /// Convert back into a [`Cid`]
    pub fn try_into_cid(self) -> Result<Cid, Error> {
        Cid::try_from(self)
    }
}

impl fmt::Display for CidJson {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{{ codec: {}, version: {}, hash: {} bytes }}",
            self.codec,
            self.version,
            self.hash.len()
        )
    }
}
