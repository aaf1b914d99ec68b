// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use nsmeta_core::Fid;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
	#[error("key not found in index {fid}")]
	KeyNotFound {
		fid: Fid,
	},

	#[error("index {fid} does not exist")]
	IndexNotFound {
		fid: Fid,
	},

	#[error("index {fid} already exists")]
	IndexExists {
		fid: Fid,
	},

	#[error("sqlite error: {0}")]
	Sqlite(#[from] rusqlite::Error),

	#[error("storage backend error: {0}")]
	Backend(String),
}

impl StoreError {
	pub fn is_key_not_found(&self) -> bool {
		matches!(self, StoreError::KeyNotFound { .. })
	}

	pub fn is_index_not_found(&self) -> bool {
		matches!(self, StoreError::IndexNotFound { .. })
	}
}
