// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::Bound;

use nsmeta_core::Fid;

use crate::{IndexHandle, KvStore, MemoryStore, RawEntry, Result, SqliteConfig, SqliteStore};

/// Dispatches to one of the bundled storage engines.
#[derive(Clone)]
#[repr(u8)]
pub enum Store {
	/// In-memory storage (non-persistent)
	Memory(MemoryStore) = 0,
	/// SQLite-based storage, persistent unless opened in memory
	Sqlite(SqliteStore) = 1,
}

impl Store {
	pub fn memory() -> Self {
		Self::Memory(MemoryStore::new())
	}

	pub fn sqlite(config: SqliteConfig) -> Result<Self> {
		Ok(Self::Sqlite(SqliteStore::new(config)?))
	}

	pub fn sqlite_in_memory() -> Result<Self> {
		Ok(Self::Sqlite(SqliteStore::in_memory()?))
	}
}

impl KvStore for Store {
	#[inline]
	fn index_open(&self, fid: &Fid) -> Result<IndexHandle> {
		match self {
			Self::Memory(s) => s.index_open(fid),
			Self::Sqlite(s) => s.index_open(fid),
		}
	}

	#[inline]
	fn index_close(&self, index: &IndexHandle) -> Result<()> {
		match self {
			Self::Memory(s) => s.index_close(index),
			Self::Sqlite(s) => s.index_close(index),
		}
	}

	#[inline]
	fn index_create(&self, fid: &Fid) -> Result<IndexHandle> {
		match self {
			Self::Memory(s) => s.index_create(fid),
			Self::Sqlite(s) => s.index_create(fid),
		}
	}

	#[inline]
	fn index_delete(&self, fid: &Fid) -> Result<()> {
		match self {
			Self::Memory(s) => s.index_delete(fid),
			Self::Sqlite(s) => s.index_delete(fid),
		}
	}

	#[inline]
	fn index_list(&self) -> Result<Vec<Fid>> {
		match self {
			Self::Memory(s) => s.index_list(),
			Self::Sqlite(s) => s.index_list(),
		}
	}

	#[inline]
	fn index_exists(&self, fid: &Fid) -> Result<bool> {
		match self {
			Self::Memory(s) => s.index_exists(fid),
			Self::Sqlite(s) => s.index_exists(fid),
		}
	}

	#[inline]
	fn get(&self, index: &IndexHandle, key: &[u8]) -> Result<Option<Vec<u8>>> {
		match self {
			Self::Memory(s) => s.get(index, key),
			Self::Sqlite(s) => s.get(index, key),
		}
	}

	#[inline]
	fn set(&self, index: &IndexHandle, key: &[u8], value: &[u8]) -> Result<()> {
		match self {
			Self::Memory(s) => s.set(index, key, value),
			Self::Sqlite(s) => s.set(index, key, value),
		}
	}

	#[inline]
	fn delete(&self, index: &IndexHandle, key: &[u8]) -> Result<()> {
		match self {
			Self::Memory(s) => s.delete(index, key),
			Self::Sqlite(s) => s.delete(index, key),
		}
	}

	#[inline]
	fn range(&self, index: &IndexHandle, start: Bound<&[u8]>, end: Bound<&[u8]>) -> Result<Vec<RawEntry>> {
		match self {
			Self::Memory(s) => s.range(index, start, end),
			Self::Sqlite(s) => s.range(index, start, end),
		}
	}
}
