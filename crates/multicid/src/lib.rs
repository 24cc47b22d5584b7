// SPDX-License-Identifier: Apache-2.0
//! multicid
#![warn(missing_docs)]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

/// Errors produced by this library
pub mod error;
pub use error::{CidError, Error};

/// Cid implementation
pub mod cid;
pub use cid::{codecs, Builder, Cid, CodecId, Input};

/// Plain object projection of a Cid
pub mod json;
pub use json::CidJson;

/// Cid prefix (everything but the digest payload)
pub mod prefix;
pub use prefix::Prefix;

/// Component validator
pub mod validate;
pub use validate::{check_cid_components, Candidate, CodecField, Components, HashField};

/// Cid version
pub mod version;
pub use version::Version;

/// Serde serialization
#[cfg(feature = "serde")]
pub mod serde;

/// one-stop shop for all exported symbols
pub mod prelude {
    pub use super::*;
    /// re-exports
    pub use multibase::Base;
    pub use multicodec::Codec;
    pub use multihash::{mh, Multihash};
    pub use multiutil::{CodecInfo, EncodingInfo};
}
