// SPDX-License-Identifier: Apache-2.0
use crate::{CidError, Error};
use core::fmt;
use multibase::Base;
use multitrait::{EncodeInto, TryDecodeFrom};

/// The Cid format version; determines the binary layout
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Version {
    /// a bare sha2-256 dag-pb multihash, rendered in base58btc
    V0,
    /// version byte, codec and multihash, rendered in any multibase
    V1,
}

impl Version {
    /// The base a Cid of this version renders with when none is given
    pub fn default_base(&self) -> Base {
        match self {
            Version::V0 => Base::Base58Btc,
            Version::V1 => Base::Base32Lower,
        }
    }
}

impl From<Version> for u64 {
    fn from(version: Version) -> u64 {
        match version {
            Version::V0 => 0,
            Version::V1 => 1,
        }
    }
}

impl TryFrom<u64> for Version {
    type Error = CidError;

    fn try_from(v: u64) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Version::V0),
            1 => Ok(Version::V1),
            _ => Err(CidError::InvalidVersion(v)),
        }
    }
}

impl EncodeInto for Version {
    fn encode_into(&self) -> Vec<u8> {
        u64::from(*self).encode_into()
    }
}

impl<'a> TryDecodeFrom<'a> for Version {
    type Error = Error;

    fn try_decode_from(bytes: &'a [u8]) -> Result<(Self, &'a [u8]), Self::Error> {
        let (v, ptr) = u64::try_decode_from(bytes)?;
        Ok((Self::try_from(v)?, ptr))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", u64::from(*self))
    }
}
