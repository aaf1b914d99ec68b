// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use nsmeta_core::{Fid, NamespaceId};
use nsmeta_store::IndexHandle;
use serde::{Deserialize, Serialize};

use crate::{InvalidNameReason, NamespaceError};

mod create;
mod delete;
mod find;
mod list;
mod open;
pub mod reconcile;

/// Longest accepted namespace name, in bytes.
pub const MAX_NAME_LEN: usize = 256;

/// Persisted description of a namespace, the value of its info record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceDef {
	pub id: NamespaceId,
	pub name: String,
	pub object_fid: Fid,
}

impl NamespaceDef {
	pub(crate) fn to_bytes(&self) -> crate::Result<Vec<u8>> {
		Ok(postcard::to_stdvec(self)?)
	}

	pub(crate) fn from_bytes(bytes: &[u8]) -> crate::Result<Self> {
		Ok(postcard::from_bytes(bytes)?)
	}
}

/// A live namespace: its definition plus the handle of its object index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
	def: NamespaceDef,
	index: IndexHandle,
}

impl Namespace {
	pub(crate) fn new(def: NamespaceDef, index: IndexHandle) -> Self {
		Self {
			def,
			index,
		}
	}

	pub fn id(&self) -> NamespaceId {
		self.def.id
	}

	pub fn name(&self) -> &str {
		&self.def.name
	}

	pub fn object_fid(&self) -> Fid {
		self.def.object_fid
	}

	pub fn index(&self) -> &IndexHandle {
		&self.index
	}

	pub fn def(&self) -> &NamespaceDef {
		&self.def
	}
}

pub(crate) fn validate_name(name: &str) -> crate::Result<()> {
	let reason = if name.is_empty() {
		Some(InvalidNameReason::Empty)
	} else if name.len() > MAX_NAME_LEN {
		Some(InvalidNameReason::TooLong {
			len: name.len(),
			max: MAX_NAME_LEN,
		})
	} else {
		name.chars().find(|ch| !ch.is_ascii_alphanumeric()).map(|ch| InvalidNameReason::NotAlphanumeric {
			ch,
		})
	};

	match reason {
		Some(reason) => Err(NamespaceError::InvalidName {
			name: name.to_string(),
			reason,
		}),
		None => Ok(()),
	}
}
