// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbPath {
	Memory,
	File(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JournalMode {
	Delete,
	Wal,
}

impl JournalMode {
	pub fn as_str(&self) -> &'static str {
		match self {
			JournalMode::Delete => "DELETE",
			JournalMode::Wal => "WAL",
		}
	}
}

#[derive(Debug, Clone)]
pub struct SqliteConfig {
	pub path: DbPath,
	/// Ignored for in-memory databases.
	pub journal_mode: JournalMode,
}

impl SqliteConfig {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: DbPath::File(path.into()),
			journal_mode: JournalMode::Wal,
		}
	}

	pub fn in_memory() -> Self {
		Self {
			path: DbPath::Memory,
			journal_mode: JournalMode::Delete,
		}
	}
}
