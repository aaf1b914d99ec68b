// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::key::KeyError;

pub struct KeyDeserializer<'a> {
	input: &'a [u8],
}

impl<'a> KeyDeserializer<'a> {
	pub fn from_bytes(input: &'a [u8]) -> Self {
		Self {
			input,
		}
	}

	fn take<const N: usize>(&mut self) -> Result<[u8; N], KeyError> {
		if self.input.len() < N {
			return Err(KeyError::Truncated {
				expected: N,
				remaining: self.input.len(),
			});
		}
		let (head, rest) = self.input.split_at(N);
		self.input = rest;
		let mut out = [0u8; N];
		out.copy_from_slice(head);
		Ok(out)
	}

	pub fn read_u8(&mut self) -> Result<u8, KeyError> {
		Ok(self.take::<1>()?[0])
	}

	pub fn read_u32(&mut self) -> Result<u32, KeyError> {
		Ok(u32::from_be_bytes(self.take()?))
	}

	/// Fails if any bytes are left unread.
	pub fn finish(self) -> Result<(), KeyError> {
		if self.input.is_empty() {
			Ok(())
		} else {
			Err(KeyError::TrailingBytes {
				count: self.input.len(),
			})
		}
	}
}
