// SPDX-License-Identifier: Apache-2.0
use crate::Cid;
use ::serde::{Serialize, Serializer};

/// Human readable formats get the default string form, binary formats get
/// the binary form
impl Serialize for Cid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_string())
        } else {
            serializer.serialize_bytes(self.bytes())
        }
    }
}
