// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Ordered key-value storage addressed by index fid.
//!
//! A store holds any number of independent indexes. Each index is an ordered
//! map from byte keys to byte values and is identified by a [`Fid`]. Callers
//! operate on an index through the [`IndexHandle`] returned when it was
//! opened or created.
//!
//! Every operation touches a single key or a single index; there are no
//! multi-key transactions.

#![cfg_attr(not(debug_assertions), deny(warnings))]

use std::ops::Bound;

use nsmeta_core::Fid;

mod error;
pub mod memory;
pub mod sqlite;
mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use sqlite::{DbPath, JournalMode, SqliteConfig, SqliteStore};
pub use store::Store;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Runtime handle of an opened index.
///
/// The handle is not persisted; it is reconstructed by opening the index
/// again. Operations through a handle whose index was deleted fail with
/// [`StoreError::IndexNotFound`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IndexHandle {
	fid: Fid,
}

impl IndexHandle {
	pub fn new(fid: Fid) -> Self {
		Self {
			fid,
		}
	}

	pub fn fid(&self) -> Fid {
		self.fid
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
	pub key: Vec<u8>,
	pub value: Vec<u8>,
}

pub trait KvStore: Send + Sync + Clone + 'static {
	/// Opens the index at `fid`, creating it if it does not exist yet.
	fn index_open(&self, fid: &Fid) -> Result<IndexHandle>;

	/// Opens the index at `fid` without ever creating it. Fails with
	/// [`StoreError::IndexNotFound`] if it does not exist.
	fn index_attach(&self, fid: &Fid) -> Result<IndexHandle> {
		if !self.index_exists(fid)? {
			return Err(StoreError::IndexNotFound {
				fid: *fid,
			});
		}
		Ok(IndexHandle::new(*fid))
	}

	fn index_close(&self, index: &IndexHandle) -> Result<()>;

	/// Creates a new, empty index. Fails with [`StoreError::IndexExists`]
	/// if one is already present at `fid`.
	fn index_create(&self, fid: &Fid) -> Result<IndexHandle>;

	/// Drops the index at `fid` together with all of its entries.
	fn index_delete(&self, fid: &Fid) -> Result<()>;

	/// Fids of all existing indexes, ascending.
	fn index_list(&self) -> Result<Vec<Fid>>;

	fn index_exists(&self, fid: &Fid) -> Result<bool> {
		Ok(self.index_list()?.binary_search(fid).is_ok())
	}

	fn get(&self, index: &IndexHandle, key: &[u8]) -> Result<Option<Vec<u8>>>;

	fn contains(&self, index: &IndexHandle, key: &[u8]) -> Result<bool> {
		Ok(self.get(index, key)?.is_some())
	}

	/// Inserts or overwrites the value stored under `key`.
	fn set(&self, index: &IndexHandle, key: &[u8], value: &[u8]) -> Result<()>;

	/// Removes `key`. Fails with [`StoreError::KeyNotFound`] if it is absent.
	fn delete(&self, index: &IndexHandle, key: &[u8]) -> Result<()>;

	/// Entries with keys inside the given bounds, ascending by key.
	fn range(&self, index: &IndexHandle, start: Bound<&[u8]>, end: Bound<&[u8]>) -> Result<Vec<RawEntry>>;
}
