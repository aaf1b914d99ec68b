// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use nsmeta_core::{Fid, NamespaceId};
use serde::Deserialize;

use crate::error::ConfigError;

/// Settings read by [`crate::Catalog::init`].
///
/// ```json
/// { "kvstore": { "ns_fid": "0x7800000000000001:0x0" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CatalogConfig {
	#[serde(default)]
	pub kvstore: KvStoreConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct KvStoreConfig {
	/// Fid of the global namespace index. Its high word is also the high
	/// word of every namespace object index.
	pub ns_fid: Option<String>,
}

impl CatalogConfig {
	pub fn new(ns_fid: impl Into<String>) -> Self {
		Self {
			kvstore: KvStoreConfig {
				ns_fid: Some(ns_fid.into()),
			},
		}
	}

	pub fn from_json(json: &str) -> Result<Self, ConfigError> {
		serde_json::from_str(json).map_err(ConfigError::Parse)
	}

	pub fn namespace_fid(&self) -> Result<Fid, ConfigError> {
		let raw = self.kvstore.ns_fid.as_deref().ok_or(ConfigError::MissingNamespaceFid)?;
		let fid: Fid = raw.parse().map_err(ConfigError::InvalidNamespaceFid)?;

		if fid.lo >= u64::from(NamespaceId::FIRST) {
			return Err(ConfigError::ReservedNamespaceFid {
				fid,
				first: NamespaceId::FIRST,
			});
		}

		Ok(fid)
	}
}
