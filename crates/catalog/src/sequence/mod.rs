// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Allocator of namespace ids.
//!
//! The highest id issued so far lives in a single counter record of the
//! global namespace index. Allocation reads it, increments it and writes it
//! back. The store has no compare-and-swap, so the read-modify-write runs
//! under a lock keyed by the fid of the namespace index. Every sequence in
//! the process that targets the same index shares that lock, no matter
//! which catalog or store clone it was created through.

use std::{collections::HashMap, sync::Arc};

use nsmeta_core::{EncodedKey, Fid, NamespaceId, key::NamespaceNextIdKey};
use nsmeta_store::{IndexHandle, KvStore};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use tracing::{debug, instrument};

use crate::error::SequenceError;

static NEXT_ID_KEY: Lazy<EncodedKey> = Lazy::new(NamespaceNextIdKey::encoded);

type CounterLock = Arc<Mutex<()>>;

static COUNTER_LOCKS: Lazy<Mutex<HashMap<Fid, CounterLock>>> = Lazy::new(|| Mutex::new(HashMap::new()));

/// Counter value assumed when no counter record exists yet.
const INITIAL: u32 = NamespaceId::FIRST.0 - 1;

pub(crate) struct NamespaceSequence {
	lock: CounterLock,
}

impl NamespaceSequence {
	pub(crate) fn new(index: &IndexHandle) -> Self {
		let lock = COUNTER_LOCKS.lock().entry(index.fid()).or_default().clone();
		Self {
			lock,
		}
	}

	#[instrument(name = "catalog::sequence::next", level = "debug", skip(self, store, index))]
	pub(crate) fn next(&self, store: &impl KvStore, index: &IndexHandle) -> Result<NamespaceId, SequenceError> {
		let _guard = self.lock.lock();

		let current = Self::current(store, index)?;
		let next = current.checked_add(1).ok_or(SequenceError::Exhausted)?;

		store.set(index, &NEXT_ID_KEY, &next.to_be_bytes()).map_err(SequenceError::Write)?;

		debug!(id = next, "allocated namespace id");
		Ok(NamespaceId(next))
	}

	/// Highest id issued so far, or the reserved value below
	/// [`NamespaceId::FIRST`] if none was issued yet.
	pub(crate) fn current(store: &impl KvStore, index: &IndexHandle) -> Result<u32, SequenceError> {
		match store.get(index, &NEXT_ID_KEY).map_err(SequenceError::Read)? {
			Some(value) => {
				let bytes: [u8; 4] = value.as_slice().try_into().map_err(|_| SequenceError::Corrupt {
					len: value.len(),
				})?;
				Ok(u32::from_be_bytes(bytes))
			}
			None => Ok(INITIAL),
		}
	}
}
