// SPDX-License-Identifier: Apache-2.0
//! multicodec
#![warn(missing_docs)]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

/// The Codec type generated from the multicodec table
pub mod codec;
pub use codec::Codec;

/// Errors generated from the implementations
pub mod error;
pub use error::Error;

/// Serde serialization
#[cfg(feature = "serde")]
pub mod serde;

/// one-stop shop for all exported symbols
pub mod prelude {
    pub use super::{codec::*, error::*};
}
