// SPDX-License-Identifier: Apache-2.0
/// Errors generated from the multicodec table lookups
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A multitrait error
    #[error(transparent)]
    Multitrait(#[from] multitrait::Error),

    /// No codec in the table has this name
    #[error("codec `{0}` not found")]
    InvalidName(String),
    /// No codec in the table has this code
    #[error("codec code {0:#x} not found")]
    InvalidCode(u64),
}
