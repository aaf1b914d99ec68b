// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::{EncodableKey, EncodedKey, EncodedKeyRange, KeyError, KeyKind, KeyPrefix, KeyVersion};
use crate::{
	encoding::keycode::{KeyDeserializer, KeySerializer},
	id::NamespaceId,
};

/// Key of the record describing a single namespace.
#[derive(Debug, Clone, PartialEq)]
pub struct NamespaceInfoKey {
	pub namespace: NamespaceId,
}

const VERSION: KeyVersion = KeyVersion::V0;

impl EncodableKey for NamespaceInfoKey {
	const KIND: KeyKind = KeyKind::NamespaceInfo;

	fn encode(&self) -> EncodedKey {
		let mut serializer = KeySerializer::with_capacity(KeyPrefix::SIZE + 4);
		KeyPrefix::new(Self::KIND, VERSION).write(&mut serializer);
		serializer.extend_u32(self.namespace);
		serializer.to_encoded_key()
	}

	fn decode(key: &[u8]) -> Result<Self, KeyError> {
		let mut de = KeyDeserializer::from_bytes(key);
		KeyPrefix::expect(&mut de, Self::KIND)?;
		let namespace = de.read_u32()?;
		de.finish()?;

		Ok(Self {
			namespace: NamespaceId(namespace),
		})
	}
}

impl NamespaceInfoKey {
	pub fn encoded(namespace: impl Into<NamespaceId>) -> EncodedKey {
		Self {
			namespace: namespace.into(),
		}
		.encode()
	}

	/// Range covering every namespace record, ascending by id.
	pub fn full_scan() -> EncodedKeyRange {
		EncodedKeyRange::start_end(Some(Self::scan_start()), Some(Self::scan_end()))
	}

	fn scan_start() -> EncodedKey {
		KeyPrefix::new(Self::KIND, VERSION).encode()
	}

	fn scan_end() -> EncodedKey {
		let mut serializer = KeySerializer::with_capacity(KeyPrefix::SIZE);
		serializer.extend_u8(Self::KIND).extend_u8(VERSION as u8 + 1);
		serializer.to_encoded_key()
	}
}
