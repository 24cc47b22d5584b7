// SPDX-License-Identifier: Apache-2.0
use multicodec::Codec;

/// This trait exposes the codec information for multicoded types
pub trait CodecInfo {
    /// Return the preferred codec for this type
    fn preferred_codec() -> Codec;

    /// Return the codec of this value
    fn codec(&self) -> Codec;
}
