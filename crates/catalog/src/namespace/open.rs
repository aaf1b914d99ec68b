// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use nsmeta_core::NamespaceId;
use nsmeta_store::KvStore;
use tracing::instrument;

use super::Namespace;
use crate::{Catalog, NamespaceError};

impl<S: KvStore> Catalog<S> {
	/// Rebuilds the live [`Namespace`] for `id` from its info record.
	///
	/// Fails with [`NamespaceError::NotFound`] when no record exists. An
	/// existing record whose object index is gone is reported as
	/// [`nsmeta_store::StoreError::IndexNotFound`]; the index is never
	/// recreated here.
	#[instrument(name = "catalog::namespace::open", level = "debug", skip(self))]
	pub fn open(&self, id: NamespaceId) -> crate::Result<Namespace> {
		let def = self.get(id)?.ok_or(NamespaceError::NotFound {
			id,
		})?;

		let index = self.store().index_attach(&def.object_fid)?;
		Ok(Namespace::new(def, index))
	}
}
