// SPDX-License-Identifier: Apache-2.0
//! multihash
#![warn(missing_docs)]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

/// Errors produced by this library
pub mod error;
pub use error::Error;

/// Multihash implementation
pub mod mh;
pub use mh::{validate, Builder, Multihash};

/// one-stop shop for all exported symbols
pub mod prelude {
    pub use super::*;
    /// re-exports
    pub use multibase::Base;
    pub use multicodec::Codec;
    pub use multiutil::{CodecInfo, EncodingInfo};
}
