// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use nsmeta_core::key::NamespaceInfoKey;
use nsmeta_store::KvStore;
use tracing::{debug, instrument, warn};

use super::{Namespace, NamespaceDef, validate_name};
use crate::{Catalog, NamespaceError};

impl<S: KvStore> Catalog<S> {
	/// Creates a namespace called `name` together with its object index.
	///
	/// The object index is created before the info record is written. If the
	/// write fails the index is left behind for [`Catalog::reconcile`].
	#[instrument(name = "catalog::namespace::create", level = "debug", skip(self))]
	pub fn create(&self, name: &str) -> crate::Result<Namespace> {
		validate_name(name)?;

		let id = self.next_id()?;
		let object_fid = self.object_fid(id);

		let index = self.store().index_create(&object_fid).map_err(|source| NamespaceError::IndexCreateFailed {
			id,
			fid: object_fid,
			source,
		})?;

		let def = NamespaceDef {
			id,
			name: name.to_string(),
			object_fid,
		};
		let value = def.to_bytes()?;

		if let Err(source) = self.store().set(self.namespace_index(), &NamespaceInfoKey::encoded(id), &value) {
			warn!(%id, fid = %object_fid, "object index left without info record");
			return Err(NamespaceError::MetadataWriteFailed {
				id,
				source,
			});
		}

		debug!(%id, fid = %object_fid, "created namespace");
		Ok(Namespace::new(def, index))
	}
}
