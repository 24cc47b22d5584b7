// SPDX-License-Identifier: Apache-2.0
//! Serde (de)serialization for [`crate::Codec`]
mod de;
mod ser;
