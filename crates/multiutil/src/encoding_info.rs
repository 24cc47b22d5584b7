// SPDX-License-Identifier: Apache-2.0
use multibase::Base;

/// This trait exposes the preferred encoding for this multiformat type
pub trait EncodingInfo {
    /// Return the preferred string encoding for this type
    fn preferred_encoding() -> Base;

    /// Return the encoding this value renders with
    fn encoding(&self) -> Base;
}
