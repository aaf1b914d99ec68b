// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::BTreeSet;

use nsmeta_core::{Fid, NamespaceId};
use nsmeta_store::KvStore;
use tracing::{info, instrument, warn};

use crate::Catalog;

/// Outcome of [`Catalog::reconcile`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
	/// Object indexes that had no info record and were dropped.
	pub removed_indexes: Vec<Fid>,
	/// Namespaces whose info record exists but whose object index does not.
	pub missing_indexes: Vec<NamespaceId>,
}

impl ReconcileReport {
	pub fn is_clean(&self) -> bool {
		self.removed_indexes.is_empty() && self.missing_indexes.is_empty()
	}
}

impl<S: KvStore> Catalog<S> {
	/// Drops object indexes left behind by a create whose info record was
	/// never written, or by a delete that failed after removing the record.
	///
	/// Only indexes sharing the base high word with a low word inside the
	/// range of ids issued so far are considered. Must not run while other
	/// threads create namespaces: an index whose record is not written yet
	/// looks exactly like an orphan.
	#[instrument(name = "catalog::namespace::reconcile", level = "info", skip(self))]
	pub fn reconcile(&self) -> crate::Result<ReconcileReport> {
		let mut report = ReconcileReport::default();

		let Some(last) = self.last_id()? else {
			return Ok(report);
		};

		let base = self.base_fid();
		let candidates: Vec<Fid> = self
			.store()
			.index_list()?
			.into_iter()
			.filter(|fid| {
				fid.hi == base.hi && fid.lo >= u64::from(NamespaceId::FIRST) && fid.lo <= u64::from(last)
			})
			.collect();

		let defs = self.list()?;
		let recorded: BTreeSet<Fid> = defs.iter().map(|def| def.object_fid).collect();

		for fid in candidates {
			if recorded.contains(&fid) {
				continue;
			}
			warn!(%fid, "dropping orphaned object index");
			self.store().index_delete(&fid)?;
			report.removed_indexes.push(fid);
		}

		for def in &defs {
			if !self.store().index_exists(&def.object_fid)? {
				warn!(id = %def.id, fid = %def.object_fid, "namespace has no object index");
				report.missing_indexes.push(def.id);
			}
		}

		info!(
			removed = report.removed_indexes.len(),
			missing = report.missing_indexes.len(),
			"reconciled namespace indexes"
		);
		Ok(report)
	}
}

#[cfg(test)]
pub mod tests {
	use nsmeta_core::{Fid, KeyKind, KeyPrefix, KeyVersion, NamespaceId};
	use nsmeta_store::KvStore;

	use super::ReconcileReport;
	use crate::{
		NamespaceError,
		test_utils::{Operation, create_faulty_catalog, create_namespace, create_test_catalog},
	};

	#[test]
	fn test_clean_catalog() {
		let catalog = create_test_catalog();
		assert!(catalog.reconcile().unwrap().is_clean());

		create_namespace(&catalog, "a");
		create_namespace(&catalog, "b");
		assert_eq!(catalog.reconcile().unwrap(), ReconcileReport::default());
	}

	#[test]
	fn test_removes_orphan_after_failed_create() {
		let (catalog, store) = create_faulty_catalog();
		create_namespace(&catalog, "kept");

		store.fail_with_prefix(
			Operation::Set,
			KeyPrefix::new(KeyKind::NamespaceInfo, KeyVersion::V0).encode().into_inner(),
		);
		assert!(catalog.create("lost").is_err());
		store.heal(Operation::Set);
		let orphan = catalog.object_fid(NamespaceId(3));
		assert!(store.index_exists(&orphan).unwrap());

		let report = catalog.reconcile().unwrap();
		assert_eq!(report.removed_indexes, vec![orphan]);
		assert!(report.missing_indexes.is_empty());
		assert!(!store.index_exists(&orphan).unwrap());
		assert!(store.index_exists(&catalog.object_fid(NamespaceId(2))).unwrap());

		assert!(catalog.reconcile().unwrap().is_clean());
	}

	#[test]
	fn test_removes_orphan_after_failed_delete() {
		let (catalog, store) = create_faulty_catalog();
		let namespace = create_namespace(&catalog, "tenant");
		let fid = namespace.object_fid();

		store.fail(Operation::IndexDelete);
		assert!(catalog.delete(namespace).is_err());
		store.heal(Operation::IndexDelete);

		let report = catalog.reconcile().unwrap();
		assert_eq!(report.removed_indexes, vec![fid]);
	}

	#[test]
	fn test_reports_missing_index() {
		let catalog = create_test_catalog();
		let namespace = create_namespace(&catalog, "tenant");
		catalog.store().index_delete(&namespace.object_fid()).unwrap();

		let report = catalog.reconcile().unwrap();
		assert_eq!(report.missing_indexes, vec![NamespaceId(2)]);
		assert!(report.removed_indexes.is_empty());
		// never repaired
		assert!(catalog.get(NamespaceId(2)).unwrap().is_some());
	}

	#[test]
	fn test_counter_read_failure() {
		let (catalog, store) = create_faulty_catalog();
		create_namespace(&catalog, "tenant");
		store.fail(Operation::Get);

		let err = catalog.reconcile().unwrap_err();
		assert!(matches!(err, NamespaceError::Store(_)));
		assert_eq!(store.count(Operation::IndexDelete), 0);
	}

	#[test]
	fn test_ignores_foreign_indexes() {
		let catalog = create_test_catalog();
		create_namespace(&catalog, "tenant");

		let base = catalog.base_fid();
		let foreign = [Fid::new(base.hi + 1, 3), base.with_lo(1), base.with_lo(100)];
		for fid in &foreign {
			catalog.store().index_create(fid).unwrap();
		}

		assert!(catalog.reconcile().unwrap().is_clean());
		for fid in &foreign {
			assert!(catalog.store().index_exists(fid).unwrap());
		}
		assert!(catalog.store().index_exists(&base).unwrap());
	}
}
