// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use nsmeta_core::{Fid, FidError, KeyError, NamespaceId};
use nsmeta_store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum NamespaceError {
	#[error("invalid namespace name `{name}`: {reason}")]
	InvalidName {
		name: String,
		reason: InvalidNameReason,
	},

	#[error("failed to allocate a namespace id")]
	AllocationFailed {
		#[from]
		source: SequenceError,
	},

	#[error("failed to create object index {fid} for namespace {id}")]
	IndexCreateFailed {
		id: NamespaceId,
		fid: Fid,
		#[source]
		source: StoreError,
	},

	#[error("failed to delete object index {fid} of namespace {id}")]
	IndexDeleteFailed {
		id: NamespaceId,
		fid: Fid,
		#[source]
		source: StoreError,
	},

	#[error("failed to write the info record of namespace {id}")]
	MetadataWriteFailed {
		id: NamespaceId,
		#[source]
		source: StoreError,
	},

	#[error("failed to delete the info record of namespace {id}")]
	MetadataDeleteFailed {
		id: NamespaceId,
		#[source]
		source: StoreError,
	},

	#[error(transparent)]
	Config(#[from] ConfigError),

	#[error("namespace id counter holds {len} bytes, expected 4")]
	CorruptCounter {
		len: usize,
	},

	#[error("namespace {id} not found")]
	NotFound {
		id: NamespaceId,
	},

	#[error("info record stored under namespace {key} describes namespace {record}")]
	RecordMismatch {
		key: NamespaceId,
		record: NamespaceId,
	},

	#[error(transparent)]
	Store(#[from] StoreError),

	#[error(transparent)]
	Key(#[from] KeyError),

	#[error("failed to encode or decode a namespace record: {0}")]
	Serialization(#[from] postcard::Error),
}

impl NamespaceError {
	/// The storage error underneath this one, if any.
	pub fn store_error(&self) -> Option<&StoreError> {
		match self {
			NamespaceError::IndexCreateFailed {
				source,
				..
			}
			| NamespaceError::IndexDeleteFailed {
				source,
				..
			}
			| NamespaceError::MetadataWriteFailed {
				source,
				..
			}
			| NamespaceError::MetadataDeleteFailed {
				source,
				..
			} => Some(source),
			NamespaceError::AllocationFailed {
				source,
			} => source.store_error(),
			NamespaceError::Store(source) => Some(source),
			_ => None,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidNameReason {
	#[error("name is empty")]
	Empty,

	#[error("name is {len} bytes long, at most {max} are allowed")]
	TooLong {
		len: usize,
		max: usize,
	},

	#[error("character {ch:?} is not alphanumeric")]
	NotAlphanumeric {
		ch: char,
	},
}

#[derive(Debug, thiserror::Error)]
pub enum SequenceError {
	#[error("failed to read the namespace id counter")]
	Read(#[source] StoreError),

	#[error("failed to persist the namespace id counter")]
	Write(#[source] StoreError),

	#[error("namespace id counter holds {len} bytes, expected 4")]
	Corrupt {
		len: usize,
	},

	#[error("namespace id sequence is exhausted")]
	Exhausted,
}

impl SequenceError {
	pub fn store_error(&self) -> Option<&StoreError> {
		match self {
			SequenceError::Read(source) | SequenceError::Write(source) => Some(source),
			_ => None,
		}
	}
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("missing `kvstore.ns_fid` setting")]
	MissingNamespaceFid,

	#[error("invalid `kvstore.ns_fid` setting")]
	InvalidNamespaceFid(#[source] FidError),

	#[error("`kvstore.ns_fid` {fid} overlaps the namespace object index fids, its low word must be below {first}")]
	ReservedNamespaceFid {
		fid: Fid,
		first: NamespaceId,
	},

	#[error("failed to parse the catalog configuration")]
	Parse(#[source] serde_json::Error),
}
