// SPDX-License-Identifier: Apache-2.0
use crate::{
    validate::{check_base, check_v0},
    CidError, CidJson, Error, Prefix, Version,
};
use core::{
    any::Any,
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};
use multibase::Base;
use multicodec::Codec;
use multihash::Multihash;
use multitrait::{EncodeInto, TryDecodeFrom};
use multiutil::{base_from_name, base_name, is_encoded, CodecInfo, EncodingInfo};
use std::sync::OnceLock;
use tracing::{debug, trace};

/// The read-only (name, code) table of known codecs
pub fn codecs() -> impl Iterator<Item = (&'static str, u64)> {
    Codec::table()
}

/// A codec given either by its numeric code or by its legacy name
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CodecId<'a> {
    /// numeric multicodec code
    Code(u64),
    /// codec name, matched after case and dash normalization
    Name(&'a str),
}

impl CodecId<'_> {
    /// Look the codec up in the multicodec table
    pub fn resolve(&self) -> Result<Codec, CidError> {
        match self {
            CodecId::Code(code) => {
                Codec::try_from(*code).map_err(|_| CidError::UnknownCodec(format!("{:#x}", code)))
            }
            CodecId::Name(name) => {
                Codec::try_from(*name).map_err(|_| CidError::UnknownCodec(name.to_string()))
            }
        }
    }
}

impl From<Codec> for CodecId<'_> {
    fn from(codec: Codec) -> Self {
        CodecId::Code(codec.code())
    }
}

impl From<u64> for CodecId<'_> {
    fn from(code: u64) -> Self {
        CodecId::Code(code)
    }
}

impl<'a> From<&'a str> for CodecId<'a> {
    fn from(name: &'a str) -> Self {
        CodecId::Name(name)
    }
}

/// The shapes a Cid can be constructed from, in the order they are tried
#[derive(Clone, Debug)]
pub enum Input<'a> {
    /// copy an existing Cid
    Existing(&'a Cid),
    /// a multibase encoded Cid or a bare base58btc multihash
    Text(&'a str),
    /// a binary Cid or a bare multihash
    Bytes(&'a [u8]),
    /// the individual fields
    Parts {
        /// format version, 0 or 1
        version: u64,
        /// content codec
        codec: CodecId<'a>,
        /// digest record bytes
        multihash: &'a [u8],
        /// multibase name, defaults by version
        multibase: Option<&'a str>,
    },
}

impl<'a> From<&'a Cid> for Input<'a> {
    fn from(cid: &'a Cid) -> Self {
        Input::Existing(cid)
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(s: &'a str) -> Self {
        Input::Text(s)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(s: &'a String) -> Self {
        Input::Text(s.as_str())
    }
}

impl<'a> From<&'a [u8]> for Input<'a> {
    fn from(b: &'a [u8]) -> Self {
        Input::Bytes(b)
    }
}

impl<'a> From<&'a Vec<u8>> for Input<'a> {
    fn from(b: &'a Vec<u8>) -> Self {
        Input::Bytes(b.as_slice())
    }
}

impl<'a, C: Into<CodecId<'a>>> From<(u64, C, &'a [u8])> for Input<'a> {
    fn from((version, codec, multihash): (u64, C, &'a [u8])) -> Self {
        Input::Parts {
            version,
            codec: codec.into(),
            multihash,
            multibase: None,
        }
    }
}

impl<'a, C: Into<CodecId<'a>>> From<(u64, C, &'a [u8], &'a str)> for Input<'a> {
    fn from((version, codec, multihash, multibase): (u64, C, &'a [u8], &'a str)) -> Self {
        Input::Parts {
            version,
            codec: codec.into(),
            multihash,
            multibase: Some(multibase),
        }
    }
}

/// A content identifier: a versioned, codec tagged wrapper around a
/// multihash.
///
/// The binary form, the prefix and the default string form are computed on
/// first use and cached. The caches and the multibase take no part in
/// equality, ordering or hashing.
#[derive(Clone)]
pub struct Cid {
    pub(crate) version: Version,
    pub(crate) codec: Codec,
    pub(crate) hash: Multihash,
    pub(crate) base: Base,
    bytes: OnceLock<Vec<u8>>,
    prefix: OnceLock<Vec<u8>>,
    string: OnceLock<String>,
}

impl Cid {
    /// Construct a Cid from any of the supported input shapes:
    ///
    /// 1. an existing Cid is copied
    /// 2. text is decoded as a multibase Cid if its first character is a
    ///    multibase prefix and the rest decodes, otherwise as a bare base58btc
    ///    multihash (CIDv0)
    /// 3. bytes starting with 0x00 or 0x01 are a binary Cid, anything else is
    ///    a bare multihash (CIDv0)
    /// 4. parts are checked and assembled directly
    pub fn new<'a>(input: impl Into<Input<'a>>) -> Result<Self, Error> {
        match input.into() {
            Input::Existing(cid) => Ok(Self::from_existing(cid)),
            Input::Text(s) => Self::from_text(s),
            Input::Bytes(b) => Self::from_bytes(b),
            Input::Parts {
                version,
                codec,
                multihash,
                multibase,
            } => Self::from_parts(version, codec, multihash, multibase),
        }
    }

    /// Copy an existing Cid. The copy is equal to the original but shares no
    /// cached state with it.
    pub fn from_existing(other: &Cid) -> Self {
        Self::assemble(other.version, other.codec, other.hash.clone(), other.base)
    }

    /// Parse a multibase encoded Cid or a bare base58btc multihash
    pub fn from_text(s: &str) -> Result<Self, Error> {
        if s.is_empty() {
            return Err(CidError::EmptyInput.into());
        }
        match is_encoded(s) {
            Some(base) => {
                trace!("Cid::from_text: {} encoded", base_name(base));
                let (_, bytes) = multibase::decode(s)?;
                Self::decode_exact(&bytes, Some(base))
            }
            None => {
                trace!("Cid::from_text: bare base58btc multihash");
                let hash = Multihash::from_b58(s).inspect_err(|e| {
                    debug!("rejecting {:?}: {}", s, e);
                })?;
                Self::checked(Version::V0, Codec::DagPb, hash, Some(Base::Base58Btc))
            }
        }
    }

    /// Decode a binary Cid or a bare multihash. The bytes must hold exactly
    /// one Cid.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        Self::decode_exact(bytes, None)
    }

    /// Assemble a Cid from its fields. Codec names are looked up in the
    /// multicodec table; the multibase name defaults by version.
    pub fn from_parts<'a>(
        version: u64,
        codec: impl Into<CodecId<'a>>,
        multihash: &[u8],
        multibase: Option<&str>,
    ) -> Result<Self, Error> {
        let version = Version::try_from(version)?;
        let codec = codec.into().resolve()?;
        let base = multibase.map(base_from_name).transpose()?;
        let hash = Multihash::try_from(multihash)?;
        Self::checked(version, codec, hash, base)
    }

    /// The read-only (name, code) table of known codecs
    pub fn codecs() -> impl Iterator<Item = (&'static str, u64)> {
        codecs()
    }

    /// Nominal type check: true only for genuine Cid values
    pub fn is_cid(value: &dyn Any) -> bool {
        value.is::<Cid>()
    }

    /// Validate a Cid-like structure, turning every reported problem into an
    /// error
    pub fn validate(candidate: &crate::Candidate) -> Result<(), Error> {
        match crate::check_cid_components(candidate)? {
            Some(msg) => Err(CidError::Invalid(msg).into()),
            None => Ok(()),
        }
    }

    /// The format version
    pub fn version(&self) -> Version {
        self.version
    }

    /// The content codec
    pub fn codec(&self) -> Codec {
        self.codec
    }

    /// The numeric content codec
    pub fn code(&self) -> u64 {
        self.codec.code()
    }

    /// The content codec name
    pub fn codec_name(&self) -> &'static str {
        self.codec.name()
    }

    /// The multihash this Cid wraps
    pub fn multihash(&self) -> &Multihash {
        &self.hash
    }

    /// The multibase this Cid renders with by default
    pub fn multibase(&self) -> Base {
        self.base
    }

    /// The name of the multibase this Cid renders with by default
    pub fn multibase_name(&self) -> &'static str {
        base_name(self.base)
    }

    /// The binary form: the multihash for v0, version, codec and multihash
    /// for v1. Computed once; every call returns the same slice.
    pub fn bytes(&self) -> &[u8] {
        self.bytes.get_or_init(|| {
            let mut v = Vec::default();
            if self.version == Version::V1 {
                v.append(&mut self.version.encode_into());
                v.append(&mut self.codec.encode_into());
            }
            v.append(&mut self.hash.encode_into());
            v
        })
    }

    /// Alias for [`Cid::bytes`]
    pub fn buffer(&self) -> &[u8] {
        self.bytes()
    }

    /// The version, codec and multihash header without the digest payload
    pub fn prefix(&self) -> &[u8] {
        self.prefix
            .get_or_init(|| Prefix::from(self).encode_into())
    }

    /// Convert to a CIDv0. Fails unless the codec is dag-pb and the
    /// multihash is a 32 byte sha2-256 digest.
    pub fn to_v0(&self) -> Result<Self, Error> {
        if self.codec != Codec::DagPb {
            return Err(CidError::NotDagPb(self.codec).into());
        }
        if self.hash.codec() != Codec::Sha2256 {
            return Err(CidError::NotSha2256(self.hash.codec()).into());
        }
        if self.hash.len() != 32 {
            return Err(CidError::NotV0Length(self.hash.len()).into());
        }
        Ok(Self::assemble(
            Version::V0,
            self.codec,
            self.hash.clone(),
            Version::V0.default_base(),
        ))
    }

    /// Convert to a CIDv1. A v1 Cid keeps its multibase, a v0 Cid gets the
    /// v1 default.
    pub fn to_v1(&self) -> Self {
        let base = match self.version {
            Version::V0 => Version::V1.default_base(),
            Version::V1 => self.base,
        };
        Self::assemble(Version::V1, self.codec, self.hash.clone(), base)
    }

    /// Encode the Cid as a string. A v0 Cid only renders as bare base58btc;
    /// asking for any other base is an error. A v1 Cid renders in the given
    /// base or its own. The identity base is never accepted.
    pub fn to_base_encoded_string(&self, base: Option<Base>) -> Result<String, Error> {
        check_base(base)?;
        match (self.version, base) {
            (Version::V0, Some(b)) if b != Base::Base58Btc => {
                Err(CidError::V0Base(base_name(b).to_string()).into())
            }
            (Version::V1, Some(b)) if b != self.base => Ok(multibase::encode(b, self.bytes())),
            _ => Ok(self.cached_string().to_string()),
        }
    }

    /// Same as [`Cid::to_base_encoded_string`] with the base given by name
    pub fn to_base_encoded_string_named(&self, base: Option<&str>) -> Result<String, Error> {
        let base = base.map(base_from_name).transpose()?;
        self.to_base_encoded_string(base)
    }

    /// The plain object projection: codec name, version and multihash bytes
    pub fn to_json(&self) -> CidJson {
        CidJson {
            codec: self.codec.name().to_string(),
            version: self.version.into(),
            hash: self.hash.encode_into(),
        }
    }

    // the rendering in the instance's own base
    fn cached_string(&self) -> &str {
        self.string.get_or_init(|| match self.version {
            Version::V0 => self.hash.to_b58(),
            Version::V1 => multibase::encode(self.base, self.bytes()),
        })
    }

    fn decode_exact(bytes: &[u8], base: Option<Base>) -> Result<Self, Error> {
        let ((version, codec, hash), ptr) = decode_fields(bytes)?;
        if !ptr.is_empty() {
            return Err(CidError::TrailingBytes(ptr.len()).into());
        }
        Self::checked(version, codec, hash, base)
    }

    fn checked(
        version: Version,
        codec: Codec,
        hash: Multihash,
        base: Option<Base>,
    ) -> Result<Self, Error> {
        check_base(base)?;
        check_v0(version, codec, base)?;
        let base = base.unwrap_or_else(|| version.default_base());
        Ok(Self::assemble(version, codec, hash, base))
    }

    fn assemble(version: Version, codec: Codec, hash: Multihash, base: Base) -> Self {
        Self {
            version,
            codec,
            hash,
            base,
            bytes: OnceLock::new(),
            prefix: OnceLock::new(),
            string: OnceLock::new(),
        }
    }
}

type Fields = (Version, Codec, Multihash);

// 0x00 and 0x01 mark a versioned Cid, anything else starts a bare multihash
fn decode_fields(bytes: &[u8]) -> Result<(Fields, &[u8]), Error> {
    match bytes.first() {
        None => Err(CidError::EmptyInput.into()),
        Some(0x00) | Some(0x01) => {
            let (version, ptr) = Version::try_decode_from(bytes)?;
            let (codec, ptr) = Codec::try_decode_from(ptr)?;
            let (hash, ptr) = Multihash::try_decode_from(ptr)?;
            Ok(((version, codec, hash), ptr))
        }
        Some(_) => {
            let (hash, ptr) = Multihash::try_decode_from(bytes)?;
            Ok(((Version::V0, Codec::DagPb, hash), ptr))
        }
    }
}

impl PartialEq for Cid {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version && self.codec == other.codec && self.hash == other.hash
    }
}

impl Eq for Cid {}

impl Hash for Cid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.version.hash(state);
        self.codec.hash(state);
        self.hash.hash(state);
    }
}

impl PartialOrd for Cid {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cid {
    fn cmp(&self, other: &Self) -> Ordering {
        self.version
            .cmp(&other.version)
            .then_with(|| self.codec.cmp(&other.codec))
            .then_with(|| self.hash.cmp(&other.hash))
    }
}

impl EncodingInfo for Cid {
    fn preferred_encoding() -> Base {
        Version::V1.default_base()
    }

    fn encoding(&self) -> Base {
        self.base
    }
}

impl EncodeInto for Cid {
    fn encode_into(&self) -> Vec<u8> {
        self.bytes().to_vec()
    }
}

impl From<Cid> for Vec<u8> {
    fn from(cid: Cid) -> Self {
        cid.encode_into()
    }
}

impl From<&Cid> for Vec<u8> {
    fn from(cid: &Cid) -> Self {
        cid.encode_into()
    }
}

impl<'a> TryFrom<&'a [u8]> for Cid {
    type Error = Error;

    fn try_from(bytes: &'a [u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

impl<'a> TryFrom<&'a str> for Cid {
    type Error = Error;

    fn try_from(s: &'a str) -> Result<Self, Self::Error> {
        Self::from_text(s)
    }
}

impl FromStr for Cid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}

impl TryFrom<CidJson> for Cid {
    type Error = Error;

    fn try_from(json: CidJson) -> Result<Self, Self::Error> {
        Self::from_parts(json.version, json.codec.as_str(), &json.hash, None)
    }
}

impl<'a> TryDecodeFrom<'a> for Cid {
    type Error = Error;

    fn try_decode_from(bytes: &'a [u8]) -> Result<(Self, &'a [u8]), Self::Error> {
        let ((version, codec, hash), ptr) = decode_fields(bytes)?;
        Ok((Self::checked(version, codec, hash, None)?, ptr))
    }
}

impl fmt::Debug for Cid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} - {:?} - {:?}", self.version, self.codec, self.hash)
    }
}

impl fmt::Display for Cid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.cached_string())
    }
}

/// Cid builder
#[derive(Clone, Debug)]
pub struct Builder {
    version: Version,
    codec: Option<Codec>,
    hash: Option<Multihash>,
    base: Option<Base>,
}

impl Builder {
    /// create a builder for the given version
    pub fn new(version: Version) -> Self {
        Self {
            version,
            codec: None,
            hash: None,
            base: None,
        }
    }

    /// set the content codec
    pub fn with_codec(mut self, codec: Codec) -> Self {
        self.codec = Some(codec);
        self
    }

    /// set the multihash
    pub fn with_hash(mut self, hash: &Multihash) -> Self {
        self.hash = Some(hash.clone());
        self
    }

    /// set the multibase the Cid renders with
    pub fn with_base(mut self, base: Base) -> Self {
        self.base = Some(base);
        self
    }

    /// build the [Cid]. A v0 Cid defaults to the dag-pb codec.
    pub fn try_build(&self) -> Result<Cid, Error> {
        let codec = match (self.codec, self.version) {
            (Some(codec), _) => codec,
            (None, Version::V0) => Codec::DagPb,
            (None, Version::V1) => return Err(CidError::MissingField("codec").into()),
        };
        let hash = self.hash.clone().ok_or(CidError::MissingField("multihash"))?;
        Cid::checked(self.version, codec, hash, self.base)
    }
}
