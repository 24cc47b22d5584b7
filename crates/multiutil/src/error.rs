// SPDX-License-Identifier: Apache-2.0
/// Errors generated from the base utilities
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A multibase error
    #[error(transparent)]
    Multibase(#[from] multibase::Error),

    /// The multibase name is not known
    #[error("multibase `{0}` not found")]
    UnknownBaseName(String),
}
