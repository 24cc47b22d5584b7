// SPDX-License-Identifier: Apache-2.0
/// Errors generated by the numeric type impls
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Unsigned varint decoding error
    #[error(transparent)]
    UnsignedVarintDecode(#[from] unsigned_varint::decode::Error),
}
