// SPDX-License-Identifier: Apache-2.0
//! Serde (de)serialization for [`crate::Cid`]
mod de;
mod ser;
