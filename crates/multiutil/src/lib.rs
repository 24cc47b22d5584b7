// SPDX-License-Identifier: Apache-2.0
//! multiutil
#![warn(missing_docs)]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

/// Base related utility functions / types
pub mod base_util;
pub use base_util::{base_from_name, base_name, is_encoded, BaseIter};

/// CodecInfo trait
pub mod codec_info;
pub use codec_info::CodecInfo;

/// EncodingInfo trait
pub mod encoding_info;
pub use encoding_info::EncodingInfo;

/// Errors generated from the implementations
pub mod error;
pub use error::Error;

/// one-stop shop for all exported symbols
pub mod prelude {
    pub use super::{base_util::*, codec_info::*, encoding_info::*, error::*};

    /// re-exports
    pub use multibase::Base;
    pub use multicodec::Codec;
}
