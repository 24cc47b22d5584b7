// SPDX-License-Identifier: Apache-2.0
use multicodec::Codec;

/// Errors created by this library
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A multibase conversion error
    #[error(transparent)]
    Multibase(#[from] multibase::Error),
    /// A multicodec decoding error
    #[error(transparent)]
    Multicodec(#[from] multicodec::Error),
    /// Multitrait error
    #[error(transparent)]
    Multitrait(#[from] multitrait::Error),

    /// The digest record is too short to hold a header
    #[error("multihash too short: {0} bytes, need at least 2")]
    TooShort(usize),
    /// The algorithm id is a codec but not a hash function
    #[error("{0} is not a hash codec")]
    NotHash(Codec),
    /// The length field does not match the payload
    #[error("multihash length field is {declared} but {actual} digest bytes follow")]
    LengthMismatch {
        /// the length the header declares
        declared: usize,
        /// the number of bytes actually present
        actual: usize,
    },
    /// No hash implementation for this algorithm
    #[error("hashing with {0} is not supported")]
    UnsupportedHash(Codec),
}
