// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod encoding;
pub mod fid;
pub mod id;
pub mod key;

pub use fid::{Fid, FidError};
pub use id::NamespaceId;
pub use key::{EncodableKey, EncodedKey, EncodedKeyRange, KeyError, KeyKind, KeyPrefix, KeyVersion};
