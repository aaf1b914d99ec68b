// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! 128-bit file identifiers addressing a KV index.
//!
//! The textual form is `<hi>:<lo>`, both words in hexadecimal with an
//! optional `0x` prefix, e.g. `0x7800000000000001:0x0`.

use std::{
	fmt::{self, Display, Formatter},
	num::ParseIntError,
	str::FromStr,
};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Fid {
	pub hi: u64,
	pub lo: u64,
}

impl Fid {
	pub const fn new(hi: u64, lo: u64) -> Self {
		Self {
			hi,
			lo,
		}
	}

	/// Returns a copy of this fid with the low word replaced by `lo`.
	pub const fn with_lo(self, lo: u64) -> Self {
		Self {
			hi: self.hi,
			lo,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FidError {
	#[error("fid string is empty")]
	Empty,

	#[error("fid `{input}` is missing the `:` separator between hi and lo")]
	MissingSeparator {
		input: String,
	},

	#[error("fid `{input}` has an invalid {part} word: {source}")]
	InvalidWord {
		input: String,
		part: &'static str,
		#[source]
		source: ParseIntError,
	},
}

fn parse_word(input: &str, word: &str, part: &'static str) -> Result<u64, FidError> {
	let digits = word.trim();
	let digits = digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")).unwrap_or(digits);
	u64::from_str_radix(digits, 16).map_err(|source| FidError::InvalidWord {
		input: input.to_string(),
		part,
		source,
	})
}

impl FromStr for Fid {
	type Err = FidError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let input = s.trim();
		if input.is_empty() {
			return Err(FidError::Empty);
		}

		let (hi, lo) = input.split_once(':').ok_or_else(|| FidError::MissingSeparator {
			input: input.to_string(),
		})?;

		Ok(Self {
			hi: parse_word(input, hi, "hi")?,
			lo: parse_word(input, lo, "lo")?,
		})
	}
}

impl Display for Fid {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{:#x}:{:#x}", self.hi, self.lo)
	}
}
