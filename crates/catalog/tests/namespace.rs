// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use nsmeta_catalog::{
	Catalog, CatalogConfig, NamespaceError,
	test_utils::{Operation, create_faulty_catalog, create_test_catalog},
};
use nsmeta_core::{NamespaceId, key::NamespaceNextIdKey};
use nsmeta_store::{KvStore, Store};

#[test]
fn test_tenant_lifecycle() {
	let catalog = create_test_catalog();

	let tenant1 = catalog.create("tenant1").unwrap();
	let tenant2 = catalog.create("tenant2").unwrap();
	assert_eq!(tenant1.id(), NamespaceId(2));
	assert_eq!(tenant2.id(), NamespaceId(3));

	catalog.delete(tenant1).unwrap();

	let tenant3 = catalog.create("tenant3").unwrap();
	assert_eq!(tenant3.id(), NamespaceId(4));

	let names: Vec<String> = catalog.list().unwrap().into_iter().map(|def| def.name).collect();
	assert_eq!(names, vec!["tenant2", "tenant3"]);

	let counter = catalog.store().get(catalog.namespace_index(), &NamespaceNextIdKey::encoded()).unwrap().unwrap();
	assert_eq!(counter, 4u32.to_be_bytes().to_vec());
}

#[test]
fn test_double_delete() {
	let catalog = create_test_catalog();
	let namespace = catalog.create("tenant").unwrap();

	catalog.delete(namespace.clone()).unwrap();
	let err = catalog.delete(namespace).unwrap_err();

	assert!(matches!(err, NamespaceError::MetadataDeleteFailed { .. }));
	assert_eq!(catalog.last_id().unwrap(), Some(NamespaceId(2)));
	assert_eq!(catalog.create("next").unwrap().id(), NamespaceId(3));
}

#[test]
fn test_invalid_names_make_no_store_calls() {
	let (catalog, store) = create_faulty_catalog();
	store.reset_counts();

	let long = "a".repeat(257);
	for name in ["", long.as_str(), "foo!bar", "tenant-1", "t_1"] {
		assert!(matches!(catalog.create(name), Err(NamespaceError::InvalidName { .. })), "{name}");
	}

	assert_eq!(store.total_calls(), 0);
	assert_eq!(store.count(Operation::Get), 0);
}

#[test]
fn test_config_from_json() {
	let config = CatalogConfig::from_json(r#"{"kvstore": {"ns_fid": "0x7800000000000005:0x1"}}"#).unwrap();
	let catalog: Catalog = Catalog::init(Store::memory(), &config).unwrap();

	let namespace = catalog.create("tenant").unwrap();
	assert_eq!(namespace.object_fid().to_string(), "0x7800000000000005:0x2");

	catalog.delete(namespace).unwrap();
	catalog.shutdown();
}

#[test]
fn test_reopen_after_restart() {
	let store = Store::memory();
	let config = CatalogConfig::new("0x78:0x0");

	let created = {
		let catalog = Catalog::init(store.clone(), &config).unwrap();
		let namespace = catalog.create("tenant").unwrap();
		catalog.store().set(namespace.index(), b"object", b"payload").unwrap();
		catalog.shutdown();
		namespace
	};

	let catalog = Catalog::init(store, &config).unwrap();
	let opened = catalog.open(created.id()).unwrap();
	assert_eq!(opened, created);
	assert_eq!(catalog.store().get(opened.index(), b"object").unwrap(), Some(b"payload".to_vec()));

	// the counter survives, ids keep increasing
	assert_eq!(catalog.create("other").unwrap().id(), NamespaceId(3));
}
