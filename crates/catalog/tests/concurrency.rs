// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	collections::BTreeSet,
	sync::{Arc, Barrier},
	thread,
};

use nsmeta_catalog::{
	Catalog,
	test_utils::{create_test_catalog, test_config},
};
use nsmeta_core::NamespaceId;
use nsmeta_store::{KvStore, MemoryStore};

#[test]
fn test_concurrent_create() {
	const THREADS: usize = 8;
	const PER_THREAD: usize = 50;

	let catalog = Arc::new(create_test_catalog());

	let handles: Vec<_> = (0..THREADS)
		.map(|t| {
			let catalog = Arc::clone(&catalog);
			thread::spawn(move || {
				(0..PER_THREAD)
					.map(|i| catalog.create(&format!("t{t}n{i}")).unwrap().id())
					.collect::<Vec<NamespaceId>>()
			})
		})
		.collect();

	let mut ids = BTreeSet::new();
	for handle in handles {
		for id in handle.join().unwrap() {
			assert!(ids.insert(id), "id {id} issued twice");
		}
	}

	let total = (THREADS * PER_THREAD) as u32;
	let expected: BTreeSet<NamespaceId> = (2..2 + total).map(NamespaceId).collect();
	assert_eq!(ids, expected);

	assert_eq!(catalog.list().unwrap().len(), THREADS * PER_THREAD);
	for id in ids {
		assert!(catalog.store().index_exists(&catalog.object_fid(id)).unwrap());
	}
}

#[test]
fn test_concurrent_create_and_delete() {
	let catalog = Arc::new(create_test_catalog());

	let handles: Vec<_> = (0..4)
		.map(|t| {
			let catalog = Arc::clone(&catalog);
			thread::spawn(move || {
				let mut kept = Vec::new();
				for i in 0..40 {
					let namespace = catalog.create(&format!("t{t}n{i}")).unwrap();
					if i % 2 == 0 {
						catalog.delete(namespace).unwrap();
					} else {
						kept.push(namespace.id());
					}
				}
				kept
			})
		})
		.collect();

	let mut kept: Vec<NamespaceId> = handles.into_iter().flat_map(|handle| handle.join().unwrap()).collect();
	kept.sort();

	let listed: Vec<NamespaceId> = catalog.list().unwrap().into_iter().map(|def| def.id).collect();
	assert_eq!(listed, kept);
	assert_eq!(catalog.last_id().unwrap(), Some(NamespaceId(161)));
	assert!(catalog.reconcile().unwrap().is_clean());
}

#[test]
fn test_catalogs_sharing_a_store() {
	const CATALOGS: usize = 2;
	const PER_CATALOG: usize = 2000;

	let store = MemoryStore::new();
	let barrier = Arc::new(Barrier::new(CATALOGS));

	let handles: Vec<_> = (0..CATALOGS)
		.map(|_| {
			let catalog = Catalog::init(store.clone(), &test_config()).unwrap();
			let barrier = Arc::clone(&barrier);
			thread::spawn(move || {
				barrier.wait();
				(0..PER_CATALOG).map(|_| catalog.next_id().unwrap()).collect::<Vec<NamespaceId>>()
			})
		})
		.collect();

	let mut ids = BTreeSet::new();
	for handle in handles {
		for id in handle.join().unwrap() {
			assert!(ids.insert(id), "id {id} issued twice");
		}
	}

	assert_eq!(ids.len(), CATALOGS * PER_CATALOG);
	let catalog = Catalog::init(store, &test_config()).unwrap();
	assert_eq!(catalog.last_id().unwrap(), Some(NamespaceId(1 + (CATALOGS * PER_CATALOG) as u32)));
}
