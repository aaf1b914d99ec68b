// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use nsmeta_core::key::NamespaceInfoKey;
use nsmeta_store::KvStore;
use tracing::{debug, instrument};

use super::Namespace;
use crate::{Catalog, NamespaceError};

impl<S: KvStore> Catalog<S> {
	/// Removes the info record of `namespace`, then drops its object index.
	///
	/// If the record cannot be removed the object index is left untouched.
	/// The namespace id is never handed out again.
	#[instrument(name = "catalog::namespace::delete", level = "debug", skip_all, fields(id = %namespace.id()))]
	pub fn delete(&self, namespace: Namespace) -> crate::Result<()> {
		let id = namespace.id();
		let fid = namespace.object_fid();

		self.store().delete(self.namespace_index(), &NamespaceInfoKey::encoded(id)).map_err(|source| {
			NamespaceError::MetadataDeleteFailed {
				id,
				source,
			}
		})?;

		self.store().index_delete(&fid).map_err(|source| NamespaceError::IndexDeleteFailed {
			id,
			fid,
			source,
		})?;

		debug!(fid = %fid, "deleted namespace");
		Ok(())
	}
}
