// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use nsmeta_core::{NamespaceId, key::NamespaceInfoKey};
use nsmeta_store::KvStore;
use tracing::instrument;

use super::NamespaceDef;
use crate::{Catalog, NamespaceError};

impl<S: KvStore> Catalog<S> {
	#[instrument(name = "catalog::namespace::get", level = "trace", skip(self))]
	pub fn get(&self, id: NamespaceId) -> crate::Result<Option<NamespaceDef>> {
		let Some(bytes) = self.store().get(self.namespace_index(), &NamespaceInfoKey::encoded(id))? else {
			return Ok(None);
		};

		let def = NamespaceDef::from_bytes(&bytes)?;
		if def.id != id {
			return Err(NamespaceError::RecordMismatch {
				key: id,
				record: def.id,
			});
		}
		Ok(Some(def))
	}

	/// Namespace with the lowest id called `name`. Names are not unique.
	#[instrument(name = "catalog::namespace::find_by_name", level = "trace", skip(self))]
	pub fn find_by_name(&self, name: &str) -> crate::Result<Option<NamespaceDef>> {
		Ok(self.list()?.into_iter().find(|def| def.name == name))
	}
}
