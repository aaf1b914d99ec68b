// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! In-memory implementation of [`KvStore`].
//!
//! Each index is a lock-free skip list; the set of indexes is guarded by a
//! read-write lock that is only taken exclusively to create or drop one.

use std::{collections::HashMap, ops::Bound, sync::Arc};

use crossbeam_skiplist::SkipMap;
use nsmeta_core::Fid;
use parking_lot::RwLock;
use tracing::instrument;

use crate::{IndexHandle, KvStore, RawEntry, Result, StoreError};

type Index = Arc<SkipMap<Vec<u8>, Vec<u8>>>;

#[derive(Clone, Default)]
pub struct MemoryStore {
	indexes: Arc<RwLock<HashMap<Fid, Index>>>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	fn index(&self, handle: &IndexHandle) -> Result<Index> {
		let fid = handle.fid();
		self.indexes.read().get(&fid).cloned().ok_or(StoreError::IndexNotFound {
			fid,
		})
	}
}

impl KvStore for MemoryStore {
	#[instrument(name = "store::memory::index_open", level = "trace", skip(self))]
	fn index_open(&self, fid: &Fid) -> Result<IndexHandle> {
		self.indexes.write().entry(*fid).or_insert_with(|| Arc::new(SkipMap::new()));
		Ok(IndexHandle::new(*fid))
	}

	fn index_close(&self, _index: &IndexHandle) -> Result<()> {
		Ok(())
	}

	#[instrument(name = "store::memory::index_create", level = "trace", skip(self))]
	fn index_create(&self, fid: &Fid) -> Result<IndexHandle> {
		let mut indexes = self.indexes.write();
		if indexes.contains_key(fid) {
			return Err(StoreError::IndexExists {
				fid: *fid,
			});
		}
		indexes.insert(*fid, Arc::new(SkipMap::new()));
		Ok(IndexHandle::new(*fid))
	}

	#[instrument(name = "store::memory::index_delete", level = "trace", skip(self))]
	fn index_delete(&self, fid: &Fid) -> Result<()> {
		match self.indexes.write().remove(fid) {
			Some(_) => Ok(()),
			None => Err(StoreError::IndexNotFound {
				fid: *fid,
			}),
		}
	}

	fn index_list(&self) -> Result<Vec<Fid>> {
		let mut fids: Vec<Fid> = self.indexes.read().keys().copied().collect();
		fids.sort();
		Ok(fids)
	}

	fn index_exists(&self, fid: &Fid) -> Result<bool> {
		Ok(self.indexes.read().contains_key(fid))
	}

	#[instrument(name = "store::memory::get", level = "trace", skip(self, key), fields(fid = %index.fid(), key_len = key.len()))]
	fn get(&self, index: &IndexHandle, key: &[u8]) -> Result<Option<Vec<u8>>> {
		Ok(self.index(index)?.get(key).map(|entry| entry.value().clone()))
	}

	#[instrument(name = "store::memory::set", level = "trace", skip(self, key, value), fields(fid = %index.fid(), key_len = key.len()))]
	fn set(&self, index: &IndexHandle, key: &[u8], value: &[u8]) -> Result<()> {
		self.index(index)?.insert(key.to_vec(), value.to_vec());
		Ok(())
	}

	#[instrument(name = "store::memory::delete", level = "trace", skip(self, key), fields(fid = %index.fid(), key_len = key.len()))]
	fn delete(&self, index: &IndexHandle, key: &[u8]) -> Result<()> {
		match self.index(index)?.remove(key) {
			Some(_) => Ok(()),
			None => Err(StoreError::KeyNotFound {
				fid: index.fid(),
			}),
		}
	}

	fn range(&self, index: &IndexHandle, start: Bound<&[u8]>, end: Bound<&[u8]>) -> Result<Vec<RawEntry>> {
		Ok(self
			.index(index)?
			.range::<[u8], _>((start, end))
			.map(|entry| RawEntry {
				key: entry.key().clone(),
				value: entry.value().clone(),
			})
			.collect())
	}
}
