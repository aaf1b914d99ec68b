// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Display, Formatter},
	ops::Deref,
};

use serde::{Deserialize, Serialize};

#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NamespaceId(pub u32);

impl NamespaceId {
	pub const ROOT: NamespaceId = NamespaceId(0);
	pub const SYSTEM: NamespaceId = NamespaceId(1);
	/// Lowest id the allocator ever hands out; everything below is reserved.
	pub const FIRST: NamespaceId = NamespaceId(2);
}

impl Deref for NamespaceId {
	type Target = u32;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl PartialEq<u32> for NamespaceId {
	fn eq(&self, other: &u32) -> bool {
		self.0.eq(other)
	}
}

impl From<u32> for NamespaceId {
	fn from(value: u32) -> Self {
		Self(value)
	}
}

impl From<NamespaceId> for u32 {
	fn from(value: NamespaceId) -> Self {
		value.0
	}
}

impl From<NamespaceId> for u64 {
	fn from(value: NamespaceId) -> Self {
		value.0 as u64
	}
}

impl Display for NamespaceId {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}
