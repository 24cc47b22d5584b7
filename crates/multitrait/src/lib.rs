// SPDX-License-Identifier: Apache-2.0
//! multitrait
#![warn(missing_docs)]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

/// Errors generated from the implementations
pub mod error;
pub use error::Error;

/// EncodeInto trait and unsigned varint impls
pub mod enc_into;
pub use enc_into::EncodeInto;

/// TryDecodeFrom trait and unsigned varint impls
pub mod try_decode_from;
pub use try_decode_from::TryDecodeFrom;

/// one-stop shop for all exported symbols
pub mod prelude {
    pub use super::{enc_into::*, error::*, try_decode_from::*};
}
