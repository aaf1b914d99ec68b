// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use nsmeta_core::{Fid, NamespaceId};
use nsmeta_store::{IndexHandle, KvStore, Store};
use tracing::{debug, error, instrument};

use crate::{CatalogConfig, NamespaceError, SequenceError, sequence::NamespaceSequence};

/// Registry of namespaces kept in the global namespace index of a store.
///
/// The catalog is shared by reference; all operations take `&self` and may
/// run concurrently from several threads.
pub struct Catalog<S: KvStore = Store> {
	store: S,
	index: IndexHandle,
	base_fid: Fid,
	sequence: NamespaceSequence,
}

impl<S: KvStore> Catalog<S> {
	/// Opens the global namespace index named by `kvstore.ns_fid`, creating
	/// it if the store does not have it yet.
	#[instrument(name = "catalog::init", level = "info", skip_all)]
	pub fn init(store: S, config: &CatalogConfig) -> crate::Result<Self> {
		let base_fid = config.namespace_fid()?;
		let index = store.index_open(&base_fid)?;
		let sequence = NamespaceSequence::new(&index);

		debug!(fid = %base_fid, "opened namespace index");

		Ok(Self {
			store,
			index,
			base_fid,
			sequence,
		})
	}

	/// Closes the global namespace index. A failure to close is logged and
	/// otherwise ignored.
	#[instrument(name = "catalog::shutdown", level = "info", skip_all, fields(fid = %self.base_fid))]
	pub fn shutdown(self) {
		if let Err(err) = self.store.index_close(&self.index) {
			error!(error = %err, "failed to close namespace index");
		}
	}

	pub fn store(&self) -> &S {
		&self.store
	}

	pub fn namespace_index(&self) -> &IndexHandle {
		&self.index
	}

	pub fn base_fid(&self) -> Fid {
		self.base_fid
	}

	/// Fid of the object index owned by namespace `id`.
	pub fn object_fid(&self, id: NamespaceId) -> Fid {
		self.base_fid.with_lo(u64::from(id))
	}

	/// Allocates a fresh namespace id without creating a namespace.
	pub fn next_id(&self) -> crate::Result<NamespaceId> {
		Ok(self.sequence.next(&self.store, &self.index)?)
	}

	/// Highest id issued so far, `None` if no id was ever issued.
	pub fn last_id(&self) -> crate::Result<Option<NamespaceId>> {
		let current = NamespaceSequence::current(&self.store, &self.index).map_err(|err| match err {
			SequenceError::Read(source) => NamespaceError::Store(source),
			SequenceError::Corrupt {
				len,
			} => NamespaceError::CorruptCounter {
				len,
			},
			err => NamespaceError::from(err),
		})?;
		Ok((current >= NamespaceId::FIRST.0).then_some(NamespaceId(current)))
	}
}

#[cfg(test)]
pub mod tests {
	use nsmeta_core::{Fid, NamespaceId, key::NamespaceNextIdKey};
	use nsmeta_store::{KvStore, MemoryStore, Store, StoreError};

	use super::Catalog;
	use crate::{
		CatalogConfig, ConfigError, NamespaceError,
		test_utils::{FaultyStore, Operation, TEST_NAMESPACE_FID, create_test_catalog, test_config},
	};

	#[test]
	fn test_init_opens_namespace_index() {
		let store = MemoryStore::new();
		let catalog = Catalog::init(store.clone(), &test_config()).unwrap();

		let fid: Fid = TEST_NAMESPACE_FID.parse().unwrap();
		assert_eq!(catalog.base_fid(), fid);
		assert_eq!(catalog.namespace_index().fid(), fid);
		assert_eq!(store.index_list().unwrap(), vec![fid]);
	}

	#[test]
	fn test_init_with_default_store() {
		let catalog: Catalog = Catalog::init(Store::memory(), &test_config()).unwrap();
		assert_eq!(catalog.next_id().unwrap(), NamespaceId(2));
	}

	#[test]
	fn test_init_without_fid() {
		let err = Catalog::init(MemoryStore::new(), &CatalogConfig::default()).err().unwrap();
		assert!(matches!(err, NamespaceError::Config(ConfigError::MissingNamespaceFid)));
	}

	#[test]
	fn test_init_index_open_failure() {
		let store = FaultyStore::new();
		store.fail(Operation::IndexOpen);

		let err = Catalog::init(store, &test_config()).err().unwrap();
		assert!(matches!(err, NamespaceError::Store(_)));
	}

	#[test]
	fn test_object_fid() {
		let catalog = create_test_catalog();
		let fid = catalog.object_fid(NamespaceId(7));
		assert_eq!(fid.hi, catalog.base_fid().hi);
		assert_eq!(fid.lo, 7);
	}

	#[test]
	fn test_last_id() {
		let catalog = create_test_catalog();
		assert_eq!(catalog.last_id().unwrap(), None);

		catalog.next_id().unwrap();
		catalog.next_id().unwrap();
		assert_eq!(catalog.last_id().unwrap(), Some(NamespaceId(3)));
	}

	#[test]
	fn test_last_id_read_failure_is_a_store_error() {
		let store = FaultyStore::new();
		let catalog = Catalog::init(store.clone(), &test_config()).unwrap();
		store.fail(Operation::Get);

		let err = catalog.last_id().unwrap_err();
		assert!(matches!(err, NamespaceError::Store(StoreError::Backend(_))));
		assert_eq!(store.count(Operation::Set), 0);
	}

	#[test]
	fn test_last_id_corrupt_counter() {
		let catalog = create_test_catalog();
		catalog.store().set(catalog.namespace_index(), &NamespaceNextIdKey::encoded(), &[0x01]).unwrap();

		let err = catalog.last_id().unwrap_err();
		assert!(matches!(
			err,
			NamespaceError::CorruptCounter {
				len: 1
			}
		));
	}

	#[test]
	fn test_next_id_failure() {
		let store = FaultyStore::new();
		let catalog = Catalog::init(store.clone(), &test_config()).unwrap();
		store.fail(Operation::Set);

		let err = catalog.next_id().unwrap_err();
		assert!(matches!(err, NamespaceError::AllocationFailed { .. }));
		assert!(err.store_error().is_some());
	}

	#[test]
	fn test_shutdown_swallows_close_error() {
		let store = FaultyStore::new();
		let catalog = Catalog::init(store.clone(), &test_config()).unwrap();
		store.fail(Operation::IndexClose);

		catalog.shutdown();
		assert_eq!(store.count(Operation::IndexClose), 1);
	}
}
