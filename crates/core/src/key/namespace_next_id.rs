// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::{EncodableKey, EncodedKey, KeyError, KeyKind, KeyPrefix, KeyVersion};
use crate::encoding::keycode::KeyDeserializer;

/// Key of the counter holding the highest namespace id issued so far.
#[derive(Debug, Clone, PartialEq)]
pub struct NamespaceNextIdKey;

const VERSION: KeyVersion = KeyVersion::V0;

impl EncodableKey for NamespaceNextIdKey {
	const KIND: KeyKind = KeyKind::NamespaceNextId;

	fn encode(&self) -> EncodedKey {
		KeyPrefix::new(Self::KIND, VERSION).encode()
	}

	fn decode(key: &[u8]) -> Result<Self, KeyError> {
		let mut de = KeyDeserializer::from_bytes(key);
		KeyPrefix::expect(&mut de, Self::KIND)?;
		de.finish()?;
		Ok(Self)
	}
}

impl NamespaceNextIdKey {
	pub fn encoded() -> EncodedKey {
		Self.encode()
	}
}

#[cfg(test)]
pub mod tests {
	use super::{EncodableKey, NamespaceNextIdKey};
	use crate::key::{KeyError, NamespaceInfoKey};

	#[test]
	fn test_encode_decode() {
		let encoded = NamespaceNextIdKey::encoded();
		assert_eq!(encoded.as_slice(), &[0x02, 0x00]);
		assert_eq!(NamespaceNextIdKey::decode(&encoded).unwrap(), NamespaceNextIdKey);
	}

	#[test]
	fn test_sorts_after_every_info_key() {
		assert!(NamespaceInfoKey::encoded(u32::MAX) < NamespaceNextIdKey::encoded());
	}

	#[test]
	fn test_decode_rejects_suffix() {
		let err = NamespaceNextIdKey::decode(&[0x02, 0x00, 0x01]).unwrap_err();
		assert_eq!(
			err,
			KeyError::TrailingBytes {
				count: 1
			}
		);
	}
}
