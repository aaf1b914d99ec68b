// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use nsmeta_core::{EncodableKey, key::NamespaceInfoKey};
use nsmeta_store::KvStore;
use tracing::instrument;

use super::NamespaceDef;
use crate::{Catalog, NamespaceError};

impl<S: KvStore> Catalog<S> {
	/// All namespaces, ascending by id.
	#[instrument(name = "catalog::namespace::list", level = "trace", skip(self))]
	pub fn list(&self) -> crate::Result<Vec<NamespaceDef>> {
		let range = NamespaceInfoKey::full_scan();
		let (start, end) = range.as_bounds();

		let mut result = Vec::new();
		for entry in self.store().range(self.namespace_index(), start, end)? {
			let key = NamespaceInfoKey::decode(&entry.key)?;
			let def = NamespaceDef::from_bytes(&entry.value)?;
			if def.id != key.namespace {
				return Err(NamespaceError::RecordMismatch {
					key: key.namespace,
					record: def.id,
				});
			}
			result.push(def);
		}

		Ok(result)
	}
}
