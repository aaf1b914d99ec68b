// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::key::EncodedKey;

pub struct KeySerializer {
	buffer: Vec<u8>,
}

impl KeySerializer {
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			buffer: Vec::with_capacity(capacity),
		}
	}

	pub fn extend_u8(&mut self, value: impl Into<u8>) -> &mut Self {
		self.buffer.push(value.into());
		self
	}

	pub fn extend_u32(&mut self, value: impl Into<u32>) -> &mut Self {
		self.buffer.extend_from_slice(&value.into().to_be_bytes());
		self
	}

	pub fn to_encoded_key(self) -> EncodedKey {
		EncodedKey::new(self.buffer)
	}
}
