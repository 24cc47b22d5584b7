// SPDX-License-Identifier: Apache-2.0
use crate::Codec;
use ::serde::{Serialize, Serializer};

/// Human readable formats get the name, binary formats get the code
impl Serialize for Codec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(self.name())
        } else {
            serializer.serialize_u64(self.code())
        }
    }
}
