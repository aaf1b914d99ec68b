// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::Bound;

use nsmeta_core::Fid;

pub(super) const REGISTRY_TABLE: &str = "kvs_index";

/// Table holding the entries of the index at `fid`.
pub(super) fn table_name(fid: &Fid) -> String {
	format!("kvs_idx_{:016x}_{:016x}", fid.hi, fid.lo)
}

/// Builds an ascending range select over `table`, returning the query and its
/// positional parameters.
pub(super) fn build_range_query(table: &str, start: Bound<&[u8]>, end: Bound<&[u8]>) -> (String, Vec<Vec<u8>>) {
	let mut conditions = Vec::new();
	let mut params = Vec::new();

	match start {
		Bound::Included(key) => {
			params.push(key.to_vec());
			conditions.push(format!("key >= ?{}", params.len()));
		}
		Bound::Excluded(key) => {
			params.push(key.to_vec());
			conditions.push(format!("key > ?{}", params.len()));
		}
		Bound::Unbounded => {}
	}

	match end {
		Bound::Included(key) => {
			params.push(key.to_vec());
			conditions.push(format!("key <= ?{}", params.len()));
		}
		Bound::Excluded(key) => {
			params.push(key.to_vec());
			conditions.push(format!("key < ?{}", params.len()));
		}
		Bound::Unbounded => {}
	}

	let filter = if conditions.is_empty() {
		String::new()
	} else {
		format!(" WHERE {}", conditions.join(" AND "))
	};

	(format!("SELECT key, value FROM \"{}\"{} ORDER BY key ASC", table, filter), params)
}
