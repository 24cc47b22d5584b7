// SPDX-License-Identifier: Apache-2.0
use multicodec::Codec;

/// Errors created by this library
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A Cid error
    #[error(transparent)]
    Cid(#[from] CidError),

    /// A multibase conversion error
    #[error(transparent)]
    Multibase(#[from] multibase::Error),
    /// A multicodec decoding error
    #[error(transparent)]
    Multicodec(#[from] multicodec::Error),
    /// A multihash error
    #[error(transparent)]
    Multihash(#[from] multihash::Error),
    /// Multitrait error
    #[error(transparent)]
    Multitrait(#[from] multitrait::Error),
    /// Multiutil error
    #[error(transparent)]
    Multiutil(#[from] multiutil::Error),
}

/// Cid errors created by this library
#[derive(Clone, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CidError {
    /// The version is neither 0 nor 1
    #[error("invalid version {0}, must be a number equal to 0 or 1")]
    InvalidVersion(u64),
    /// The codec name or code is not in the multicodec table
    #[error("codec `{0}` not found")]
    UnknownCodec(String),
    /// A v0 Cid carries a codec other than dag-pb
    #[error("codec must be dag-pb for CIDv0, got {0}")]
    V0Codec(Codec),
    /// A v0 Cid can only be rendered in base58btc
    #[error("multibase must be base58btc for CIDv0, got {0}; convert to CIDv1 first")]
    V0Base(String),
    /// The identity multibase cannot render a Cid as text
    #[error("multibase identity cannot encode a CID as text")]
    IdentityBase,
    /// to_v0 on a Cid whose codec is not dag-pb
    #[error("cannot convert a non dag-pb CID to CIDv0, codec is {0}")]
    NotDagPb(Codec),
    /// to_v0 on a Cid whose hash is not sha2-256
    #[error("cannot convert a non sha2-256 multihash CID to CIDv0, hash is {0}")]
    NotSha2256(Codec),
    /// to_v0 on a Cid whose digest is not 32 bytes
    #[error("cannot convert a multihash CID with a {0} byte digest to CIDv0, must be 32")]
    NotV0Length(usize),
    /// The validator rejected the components
    #[error("invalid CID: {0}")]
    Invalid(String),
    /// Nothing to decode
    #[error("empty input is not a CID")]
    EmptyInput,
    /// Bytes left over after a complete Cid
    #[error("{0} unexpected bytes after the CID")]
    TrailingBytes(usize),
    /// A builder field was never set
    #[error("missing {0}")]
    MissingField(&'static str),
}
