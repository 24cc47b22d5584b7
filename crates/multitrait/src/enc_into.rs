// SPDX-License-Identifier: Apache-2.0
use unsigned_varint::encode;

/// This trait is for types that encode themselves into a byte vector in their
/// canonical binary form
pub trait EncodeInto {
    /// encode the value into a Vec<u8>
    fn encode_into(&self) -> Vec<u8>;
}

macro_rules! impl_encode_into {
    ($t:ty, $enc:ident, $buf:ident) => {
        impl EncodeInto for $t {
            fn encode_into(&self) -> Vec<u8> {
                let mut buf = encode::$buf();
                encode::$enc(*self, &mut buf).to_vec()
            }
        }
    };
}

impl_encode_into!(u8, u8, u8_buffer);
impl_encode_into!(u16, u16, u16_buffer);
impl_encode_into!(u32, u32, u32_buffer);
impl_encode_into!(u64, u64, u64_buffer);
impl_encode_into!(u128, u128, u128_buffer);
impl_encode_into!(usize, usize, usize_buffer);

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;
    use tracing::{span, Level};

    #[test]
    fn test_single_byte() {
        let _s = span!(Level::INFO, "test_single_byte").entered();
        assert_eq!(vec![0x70], 0x70u64.encode_into());
        assert_eq!(vec![0x7f], 0x7fu8.encode_into());
    }

    #[test]
    fn test_multi_byte() {
        let _s = span!(Level::INFO, "test_multi_byte").entered();
        assert_eq!(vec![0x90, 0x01], 0x90u64.encode_into());
        assert_eq!(vec![0xa0, 0xe4, 0x02], 0xb220u32.encode_into());
    }
}
