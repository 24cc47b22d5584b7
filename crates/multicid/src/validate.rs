// SPDX-License-Identifier: Apache-2.0
//! Checks for Cid-like structures assembled by hand. Structural problems are
//! reported as messages so callers can collect them; a malformed multihash is
//! raised as an error because nothing can be done with it.
use crate::{Cid, CidError, Error, Version};
use multibase::Base;
use multicodec::Codec;
use multiutil::{base_from_name, base_name};
use tracing::debug;

/// The codec as an ad hoc caller holds it
#[derive(Clone, Debug, PartialEq)]
pub enum CodecField {
    /// a numeric multicodec code
    Code(u64),
    /// a legacy codec name such as "dag-pb"
    Name(String),
}

/// The multihash as an ad hoc caller holds it
#[derive(Clone, Debug, PartialEq)]
pub enum HashField {
    /// digest record bytes
    Bytes(Vec<u8>),
    /// text, which is never a valid multihash field
    Text(String),
}

/// The fields of a Cid-like structure, any of which may be missing
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Components {
    /// format version
    pub version: Option<u64>,
    /// content codec
    pub codec: Option<CodecField>,
    /// digest record
    pub multihash: Option<HashField>,
    /// multibase name
    pub multibase: Option<String>,
}

/// A value handed to the validator
#[derive(Clone, Debug, PartialEq)]
pub enum Candidate {
    /// nothing at all
    Null,
    /// a bare string
    Text(String),
    /// bare bytes
    Bytes(Vec<u8>),
    /// a structure with Cid fields
    Components(Components),
}

impl From<&Cid> for Components {
    fn from(cid: &Cid) -> Self {
        Self {
            version: Some(cid.version().into()),
            codec: Some(CodecField::Code(cid.code())),
            multihash: Some(HashField::Bytes(cid.multihash().into())),
            multibase: Some(cid.multibase_name().to_string()),
        }
    }
}

impl From<Components> for Candidate {
    fn from(c: Components) -> Self {
        Candidate::Components(c)
    }
}

impl From<&Cid> for Candidate {
    fn from(cid: &Cid) -> Self {
        Candidate::Components(cid.into())
    }
}

impl From<&str> for Candidate {
    fn from(s: &str) -> Self {
        Candidate::Text(s.to_string())
    }
}

impl From<&[u8]> for Candidate {
    fn from(b: &[u8]) -> Self {
        Candidate::Bytes(b.to_vec())
    }
}

/// Check the fields of a Cid-like structure.
///
/// Returns `Ok(None)` when the components describe a valid Cid and
/// `Ok(Some(reason))` when a field is missing or of the wrong shape. A
/// multihash that fails to decode is returned as `Err`.
pub fn check_cid_components(candidate: &Candidate) -> Result<Option<String>, Error> {
    let c = match candidate {
        Candidate::Null => return Ok(Some("null values are not valid CIDs".to_string())),
        Candidate::Text(_) => {
            return Ok(Some(
                "a bare string is not a CID structure, parse it instead".to_string(),
            ))
        }
        Candidate::Bytes(_) => {
            return Ok(Some(
                "bare bytes are not a CID structure, parse them instead".to_string(),
            ))
        }
        Candidate::Components(c) => c,
    };

    let version = match c.version {
        Some(v) => match Version::try_from(v) {
            Ok(version) => version,
            Err(e) => return Ok(Some(e.to_string())),
        },
        None => return Ok(Some("version is missing".to_string())),
    };

    let codec = match &c.codec {
        Some(CodecField::Code(code)) => match Codec::try_from(*code) {
            Ok(codec) => codec,
            Err(_) => return Ok(Some(CidError::UnknownCodec(format!("{:#x}", code)).to_string())),
        },
        Some(CodecField::Name(name)) => match Codec::try_from(name.as_str()) {
            Ok(codec) => codec,
            Err(_) => return Ok(Some(CidError::UnknownCodec(name.clone()).to_string())),
        },
        None => return Ok(Some("codec must be a name or a numeric code".to_string())),
    };

    let hash = match &c.multihash {
        Some(HashField::Bytes(b)) => b,
        Some(HashField::Text(_)) | None => {
            return Ok(Some("multihash must be a byte sequence".to_string()))
        }
    };

    let base = match &c.multibase {
        Some(name) => match base_from_name(name) {
            Ok(base) => Some(base),
            Err(e) => return Ok(Some(e.to_string())),
        },
        None => None,
    };

    if let Err(e) = check_base(base).and_then(|_| check_v0(version, codec, base)) {
        return Ok(Some(e.to_string()));
    }

    if let Err(e) = multihash::validate(hash) {
        debug!("rejecting CID components: {}", e);
        return Err(e.into());
    }

    Ok(None)
}

/// The identity multibase cannot render binary data as text
pub(crate) fn check_base(base: Option<Base>) -> Result<(), CidError> {
    match base {
        Some(Base::Identity) => Err(CidError::IdentityBase),
        _ => Ok(()),
    }
}

/// A v0 Cid may only carry the dag-pb codec and the base58btc multibase
pub(crate) fn check_v0(version: Version, codec: Codec, base: Option<Base>) -> Result<(), CidError> {
    if version == Version::V0 {
        if codec != Codec::DagPb {
            return Err(CidError::V0Codec(codec));
        }
        if let Some(base) = base {
            if base != Base::Base58Btc {
                return Err(CidError::V0Base(base_name(base).to_string()));
            }
        }
    }
    Ok(())
}
