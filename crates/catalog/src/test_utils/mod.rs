// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{collections::HashMap, ops::Bound, sync::Arc};

use nsmeta_core::Fid;
use nsmeta_store::{IndexHandle, KvStore, MemoryStore, RawEntry, StoreError};
use parking_lot::Mutex;

use crate::{Catalog, CatalogConfig, Namespace};

pub const TEST_NAMESPACE_FID: &str = "0x7800000000000001:0x0";

pub fn test_config() -> CatalogConfig {
	CatalogConfig::new(TEST_NAMESPACE_FID)
}

pub fn create_test_catalog() -> Catalog<MemoryStore> {
	Catalog::init(MemoryStore::new(), &test_config()).unwrap()
}

pub fn create_faulty_catalog() -> (Catalog<FaultyStore>, FaultyStore) {
	let store = FaultyStore::new();
	let catalog = Catalog::init(store.clone(), &test_config()).unwrap();
	(catalog, store)
}

pub fn create_namespace<S: KvStore>(catalog: &Catalog<S>, name: &str) -> Namespace {
	catalog.create(name).unwrap()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
	IndexOpen,
	IndexClose,
	IndexCreate,
	IndexDelete,
	IndexList,
	IndexExists,
	Get,
	Set,
	Delete,
	Range,
}

#[derive(Default)]
struct FaultState {
	calls: HashMap<Operation, usize>,
	// operation -> optional key prefix the failure is restricted to
	failures: HashMap<Operation, Option<Vec<u8>>>,
}

/// [`MemoryStore`] wrapper counting calls per operation and failing the
/// operations it was told to fail with [`StoreError::Backend`].
///
/// Clones share counters and failure rules.
#[derive(Clone, Default)]
pub struct FaultyStore {
	inner: MemoryStore,
	state: Arc<Mutex<FaultState>>,
}

impl FaultyStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn inner(&self) -> &MemoryStore {
		&self.inner
	}

	/// Fails every subsequent call of `operation`.
	pub fn fail(&self, operation: Operation) {
		self.state.lock().failures.insert(operation, None);
	}

	/// Fails subsequent calls of `operation` whose key starts with `prefix`.
	/// Index level operations carry no key and are never matched.
	pub fn fail_with_prefix(&self, operation: Operation, prefix: impl Into<Vec<u8>>) {
		self.state.lock().failures.insert(operation, Some(prefix.into()));
	}

	pub fn heal(&self, operation: Operation) {
		self.state.lock().failures.remove(&operation);
	}

	pub fn count(&self, operation: Operation) -> usize {
		self.state.lock().calls.get(&operation).copied().unwrap_or(0)
	}

	pub fn total_calls(&self) -> usize {
		self.state.lock().calls.values().sum()
	}

	pub fn reset_counts(&self) {
		self.state.lock().calls.clear();
	}

	fn enter(&self, operation: Operation, key: Option<&[u8]>) -> nsmeta_store::Result<()> {
		let mut state = self.state.lock();
		*state.calls.entry(operation).or_default() += 1;

		let failing = match state.failures.get(&operation) {
			None => false,
			Some(None) => true,
			Some(Some(prefix)) => key.is_some_and(|key| key.starts_with(prefix)),
		};

		if failing {
			return Err(StoreError::Backend(format!("injected {operation:?} failure")));
		}
		Ok(())
	}
}

impl KvStore for FaultyStore {
	fn index_open(&self, fid: &Fid) -> nsmeta_store::Result<IndexHandle> {
		self.enter(Operation::IndexOpen, None)?;
		self.inner.index_open(fid)
	}

	fn index_close(&self, index: &IndexHandle) -> nsmeta_store::Result<()> {
		self.enter(Operation::IndexClose, None)?;
		self.inner.index_close(index)
	}

	fn index_create(&self, fid: &Fid) -> nsmeta_store::Result<IndexHandle> {
		self.enter(Operation::IndexCreate, None)?;
		self.inner.index_create(fid)
	}

	fn index_delete(&self, fid: &Fid) -> nsmeta_store::Result<()> {
		self.enter(Operation::IndexDelete, None)?;
		self.inner.index_delete(fid)
	}

	fn index_list(&self) -> nsmeta_store::Result<Vec<Fid>> {
		self.enter(Operation::IndexList, None)?;
		self.inner.index_list()
	}

	fn index_exists(&self, fid: &Fid) -> nsmeta_store::Result<bool> {
		self.enter(Operation::IndexExists, None)?;
		self.inner.index_exists(fid)
	}

	fn get(&self, index: &IndexHandle, key: &[u8]) -> nsmeta_store::Result<Option<Vec<u8>>> {
		self.enter(Operation::Get, Some(key))?;
		self.inner.get(index, key)
	}

	fn set(&self, index: &IndexHandle, key: &[u8], value: &[u8]) -> nsmeta_store::Result<()> {
		self.enter(Operation::Set, Some(key))?;
		self.inner.set(index, key, value)
	}

	fn delete(&self, index: &IndexHandle, key: &[u8]) -> nsmeta_store::Result<()> {
		self.enter(Operation::Delete, Some(key))?;
		self.inner.delete(index, key)
	}

	fn range(
		&self,
		index: &IndexHandle,
		start: Bound<&[u8]>,
		end: Bound<&[u8]>,
	) -> nsmeta_store::Result<Vec<RawEntry>> {
		self.enter(Operation::Range, None)?;
		self.inner.range(index, start, end)
	}
}
