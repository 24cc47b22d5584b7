// SPDX-License-Identifier: Apache-2.0
use crate::Error;
use unsigned_varint::decode;

/// This trait is for types that decode themselves from the front of a byte
/// slice and hand back the unconsumed remainder
pub trait TryDecodeFrom<'a>: Sized {
    /// The error type returned when decoding fails
    type Error;

    /// try to decode the value, returning it and the remaining bytes
    fn try_decode_from(bytes: &'a [u8]) -> Result<(Self, &'a [u8]), Self::Error>;
}

macro_rules! impl_try_decode_from {
    ($t:ty, $dec:ident) => {
        impl<'a> TryDecodeFrom<'a> for $t {
            type Error = Error;

            fn try_decode_from(bytes: &'a [u8]) -> Result<(Self, &'a [u8]), Self::Error> {
                Ok(decode::$dec(bytes)?)
            }
        }
    };
}

impl_try_decode_from!(u8, u8);
impl_try_decode_from!(u16, u16);
impl_try_decode_from!(u32, u32);
impl_try_decode_from!(u64, u64);
impl_try_decode_from!(u128, u128);
impl_try_decode_from!(usize, usize);

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;
    use tracing::{span, Level};

    #[test]
    fn test_empty_fails() {
        let _s = span!(Level::INFO, "test_empty_fails").entered();
        assert!(u64::try_decode_from(&[]).is_err());
    }

    #[test]
    fn test_unterminated_fails() {
        let _s = span!(Level::INFO, "test_unterminated_fails").entered();
        assert!(u64::try_decode_from(&[0x80, 0x80]).is_err());
    }

    #[test]
    fn test_non_minimal_fails() {
        let _s = span!(Level::INFO, "test_non_minimal_fails").entered();
        // 0x70 padded with a zero continuation byte
        assert!(u64::try_decode_from(&[0xf0, 0x00]).is_err());
    }
}
