// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Fixed-width, big-endian key encoding.
//!
//! Every field is written at its natural width with the most significant
//! byte first, so the byte order of two encoded keys equals the order of
//! their fields compared left to right. There is no escaping and no length
//! prefixing: the reader must know the layout it is decoding.

mod deserializer;
mod serializer;

pub use deserializer::KeyDeserializer;
pub use serializer::KeySerializer;
