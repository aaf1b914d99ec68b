// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Keys of the global namespace index.
//!
//! Several record kinds share one flat keyspace. Every key starts with a two
//! byte [`KeyPrefix`] (`kind`, then `version`), followed by a kind specific
//! suffix, so a byte-ordered scan groups records by kind, then by schema
//! version, then by suffix.

use std::{
	fmt::{self, Debug, Formatter},
	ops::{Bound, Deref},
};

use crate::encoding::keycode::{KeyDeserializer, KeySerializer};

pub mod namespace_info;
pub mod namespace_next_id;

pub use namespace_info::NamespaceInfoKey;
pub use namespace_next_id::NamespaceNextIdKey;

#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EncodedKey(Vec<u8>);

impl EncodedKey {
	pub fn new(key: impl Into<Vec<u8>>) -> Self {
		Self(key.into())
	}

	pub fn as_slice(&self) -> &[u8] {
		&self.0
	}

	pub fn into_inner(self) -> Vec<u8> {
		self.0
	}
}

impl Deref for EncodedKey {
	type Target = [u8];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl AsRef<[u8]> for EncodedKey {
	fn as_ref(&self) -> &[u8] {
		&self.0
	}
}

impl Debug for EncodedKey {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "EncodedKey(")?;
		for byte in &self.0 {
			write!(f, "{byte:02x}")?;
		}
		write!(f, ")")
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedKeyRange {
	pub start: Bound<EncodedKey>,
	pub end: Bound<EncodedKey>,
}

impl EncodedKeyRange {
	/// Inclusive start, exclusive end. `None` leaves that side unbounded.
	pub fn start_end(start: Option<EncodedKey>, end: Option<EncodedKey>) -> Self {
		Self {
			start: start.map(Bound::Included).unwrap_or(Bound::Unbounded),
			end: end.map(Bound::Excluded).unwrap_or(Bound::Unbounded),
		}
	}

	pub fn as_bounds(&self) -> (Bound<&[u8]>, Bound<&[u8]>) {
		(as_slice_bound(&self.start), as_slice_bound(&self.end))
	}

	pub fn contains(&self, key: &[u8]) -> bool {
		let after_start = match &self.start {
			Bound::Included(start) => key >= start.as_slice(),
			Bound::Excluded(start) => key > start.as_slice(),
			Bound::Unbounded => true,
		};
		let before_end = match &self.end {
			Bound::Included(end) => key <= end.as_slice(),
			Bound::Excluded(end) => key < end.as_slice(),
			Bound::Unbounded => true,
		};
		after_start && before_end
	}
}

fn as_slice_bound(bound: &Bound<EncodedKey>) -> Bound<&[u8]> {
	match bound {
		Bound::Included(key) => Bound::Included(key.as_slice()),
		Bound::Excluded(key) => Bound::Excluded(key.as_slice()),
		Bound::Unbounded => Bound::Unbounded,
	}
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KeyKind {
	NamespaceInfo = 0x01,
	NamespaceNextId = 0x02,
}

impl From<KeyKind> for u8 {
	fn from(kind: KeyKind) -> Self {
		kind as u8
	}
}

impl TryFrom<u8> for KeyKind {
	type Error = KeyError;

	fn try_from(value: u8) -> Result<Self, Self::Error> {
		match value {
			0x01 => Ok(Self::NamespaceInfo),
			0x02 => Ok(Self::NamespaceNextId),
			_ => Err(KeyError::UnknownKind(value)),
		}
	}
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KeyVersion {
	V0 = 0x00,
}

impl From<KeyVersion> for u8 {
	fn from(version: KeyVersion) -> Self {
		version as u8
	}
}

impl TryFrom<u8> for KeyVersion {
	type Error = KeyError;

	fn try_from(value: u8) -> Result<Self, Self::Error> {
		match value {
			0x00 => Ok(Self::V0),
			_ => Err(KeyError::UnknownVersion(value)),
		}
	}
}

/// Header shared by every key of the global namespace index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPrefix {
	pub kind: KeyKind,
	pub version: KeyVersion,
}

impl KeyPrefix {
	pub const SIZE: usize = 2;

	pub const fn new(kind: KeyKind, version: KeyVersion) -> Self {
		Self {
			kind,
			version,
		}
	}

	pub fn write(&self, serializer: &mut KeySerializer) {
		serializer.extend_u8(self.kind).extend_u8(self.version);
	}

	pub fn read(de: &mut KeyDeserializer<'_>) -> Result<Self, KeyError> {
		let kind = KeyKind::try_from(de.read_u8()?)?;
		let version = KeyVersion::try_from(de.read_u8()?)?;
		Ok(Self {
			kind,
			version,
		})
	}

	/// Reads the prefix and checks it names `kind` at the current version.
	pub fn expect(de: &mut KeyDeserializer<'_>, kind: KeyKind) -> Result<Self, KeyError> {
		let prefix = Self::read(de)?;
		if prefix.kind != kind {
			return Err(KeyError::UnexpectedKind {
				expected: kind,
				actual: prefix.kind,
			});
		}
		Ok(prefix)
	}

	pub fn encode(&self) -> EncodedKey {
		let mut serializer = KeySerializer::with_capacity(Self::SIZE);
		self.write(&mut serializer);
		serializer.to_encoded_key()
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
	#[error("unknown key kind {0:#04x}")]
	UnknownKind(u8),

	#[error("unknown key schema version {0:#04x}")]
	UnknownVersion(u8),

	#[error("expected a {expected:?} key, found {actual:?}")]
	UnexpectedKind {
		expected: KeyKind,
		actual: KeyKind,
	},

	#[error("key truncated: needed {expected} more bytes, {remaining} left")]
	Truncated {
		expected: usize,
		remaining: usize,
	},

	#[error("key has {count} unexpected trailing bytes")]
	TrailingBytes {
		count: usize,
	},
}

pub trait EncodableKey {
	const KIND: KeyKind;

	fn encode(&self) -> EncodedKey;

	fn decode(key: &[u8]) -> Result<Self, KeyError>
	where
		Self: Sized;
}

#[cfg(test)]
pub mod tests {
	use std::ops::Bound;

	use super::{EncodedKey, EncodedKeyRange, KeyError, KeyKind, KeyPrefix, KeyVersion};
	use crate::encoding::keycode::KeyDeserializer;

	#[test]
	fn test_prefix_layout() {
		let prefix = KeyPrefix::new(KeyKind::NamespaceNextId, KeyVersion::V0);
		assert_eq!(prefix.encode().as_slice(), &[0x02, 0x00]);
	}

	#[test]
	fn test_prefix_rejects_unknown_kind() {
		let bytes = [0x7f, 0x00];
		let err = KeyPrefix::read(&mut KeyDeserializer::from_bytes(&bytes)).unwrap_err();
		assert_eq!(err, KeyError::UnknownKind(0x7f));
	}

	#[test]
	fn test_prefix_rejects_unknown_version() {
		let bytes = [0x01, 0x09];
		let err = KeyPrefix::read(&mut KeyDeserializer::from_bytes(&bytes)).unwrap_err();
		assert_eq!(err, KeyError::UnknownVersion(0x09));
	}

	#[test]
	fn test_prefix_expect_kind() {
		let bytes = [0x02, 0x00];
		let err = KeyPrefix::expect(&mut KeyDeserializer::from_bytes(&bytes), KeyKind::NamespaceInfo)
			.unwrap_err();
		assert_eq!(
			err,
			KeyError::UnexpectedKind {
				expected: KeyKind::NamespaceInfo,
				actual: KeyKind::NamespaceNextId,
			}
		);
	}

	#[test]
	fn test_range_contains() {
		let range = EncodedKeyRange::start_end(Some(EncodedKey::new([0x01])), Some(EncodedKey::new([0x02])));
		assert!(range.contains(&[0x01]));
		assert!(range.contains(&[0x01, 0xff, 0xff]));
		assert!(!range.contains(&[0x02]));
		assert!(!range.contains(&[0x00, 0xff]));

		assert!(EncodedKeyRange::start_end(None, None).contains(&[]));
		assert_eq!(range.as_bounds(), (Bound::Included(&[0x01u8][..]), Bound::Excluded(&[0x02u8][..])));
	}

	#[test]
	fn test_debug_is_hex() {
		assert_eq!(format!("{:?}", EncodedKey::new([0x01, 0xab])), "EncodedKey(01ab)");
	}
}
