// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! SQLite implementation of [`KvStore`].
//!
//! Every index is a `WITHOUT ROWID` table keyed by a blob; a registry table
//! records which index fids exist. SQLite compares blobs with `memcmp`, so
//! range scans return keys in the same byte order as the memory store.

mod config;
mod query;

use std::{ops::Bound, sync::Arc};

pub use config::{DbPath, JournalMode, SqliteConfig};
use nsmeta_core::Fid;
use parking_lot::Mutex;
use rusqlite::{Connection, OptionalExtension, params, params_from_iter};
use tracing::{debug, instrument};

use self::query::{REGISTRY_TABLE, build_range_query, table_name};
use crate::{IndexHandle, KvStore, RawEntry, Result, StoreError};

#[derive(Clone)]
pub struct SqliteStore {
	inner: Arc<SqliteStoreInner>,
}

struct SqliteStoreInner {
	conn: Mutex<Connection>,
}

impl SqliteStore {
	#[instrument(name = "store::sqlite::new", level = "info", skip(config), fields(
		db_path = ?config.path,
		journal_mode = %config.journal_mode.as_str()
	))]
	pub fn new(config: SqliteConfig) -> Result<Self> {
		let conn = match &config.path {
			DbPath::Memory => Connection::open_in_memory()?,
			DbPath::File(path) => {
				let conn = Connection::open(path)?;
				conn.pragma_update(None, "journal_mode", config.journal_mode.as_str())?;
				conn
			}
		};

		conn.execute_batch(&format!(
			"CREATE TABLE IF NOT EXISTS \"{REGISTRY_TABLE}\" (
				hi INTEGER NOT NULL,
				lo INTEGER NOT NULL,
				PRIMARY KEY (hi, lo)
			) WITHOUT ROWID;"
		))?;

		debug!("sqlite store ready");

		Ok(Self {
			inner: Arc::new(SqliteStoreInner {
				conn: Mutex::new(conn),
			}),
		})
	}

	pub fn in_memory() -> Result<Self> {
		Self::new(SqliteConfig::in_memory())
	}
}

// SQLite integers are signed; fid words are stored bit for bit.
fn to_sql(word: u64) -> i64 {
	word as i64
}

fn from_sql(word: i64) -> u64 {
	word as u64
}

fn index_exists(conn: &Connection, fid: &Fid) -> Result<bool> {
	let found = conn
		.query_row(
			&format!("SELECT 1 FROM \"{REGISTRY_TABLE}\" WHERE hi = ?1 AND lo = ?2"),
			params![to_sql(fid.hi), to_sql(fid.lo)],
			|_| Ok(()),
		)
		.optional()?;
	Ok(found.is_some())
}

fn register_index(conn: &mut Connection, fid: &Fid) -> Result<()> {
	let tx = conn.transaction()?;
	tx.execute(
		&format!("INSERT OR IGNORE INTO \"{REGISTRY_TABLE}\" (hi, lo) VALUES (?1, ?2)"),
		params![to_sql(fid.hi), to_sql(fid.lo)],
	)?;
	tx.execute_batch(&format!(
		"CREATE TABLE IF NOT EXISTS \"{}\" (key BLOB NOT NULL PRIMARY KEY, value BLOB NOT NULL) WITHOUT ROWID;",
		table_name(fid)
	))?;
	tx.commit()?;
	Ok(())
}

/// Resolves `index` to its table name, failing if the index was dropped.
fn resolve(conn: &Connection, index: &IndexHandle) -> Result<String> {
	let fid = index.fid();
	if !index_exists(conn, &fid)? {
		return Err(StoreError::IndexNotFound {
			fid,
		});
	}
	Ok(table_name(&fid))
}

impl KvStore for SqliteStore {
	#[instrument(name = "store::sqlite::index_open", level = "trace", skip(self))]
	fn index_open(&self, fid: &Fid) -> Result<IndexHandle> {
		let mut conn = self.inner.conn.lock();
		register_index(&mut conn, fid)?;
		Ok(IndexHandle::new(*fid))
	}

	fn index_close(&self, _index: &IndexHandle) -> Result<()> {
		Ok(())
	}

	#[instrument(name = "store::sqlite::index_create", level = "trace", skip(self))]
	fn index_create(&self, fid: &Fid) -> Result<IndexHandle> {
		let mut conn = self.inner.conn.lock();
		if index_exists(&conn, fid)? {
			return Err(StoreError::IndexExists {
				fid: *fid,
			});
		}
		register_index(&mut conn, fid)?;
		Ok(IndexHandle::new(*fid))
	}

	#[instrument(name = "store::sqlite::index_delete", level = "trace", skip(self))]
	fn index_delete(&self, fid: &Fid) -> Result<()> {
		let mut conn = self.inner.conn.lock();
		if !index_exists(&conn, fid)? {
			return Err(StoreError::IndexNotFound {
				fid: *fid,
			});
		}

		let tx = conn.transaction()?;
		tx.execute(
			&format!("DELETE FROM \"{REGISTRY_TABLE}\" WHERE hi = ?1 AND lo = ?2"),
			params![to_sql(fid.hi), to_sql(fid.lo)],
		)?;
		tx.execute_batch(&format!("DROP TABLE IF EXISTS \"{}\";", table_name(fid)))?;
		tx.commit()?;
		Ok(())
	}

	fn index_list(&self) -> Result<Vec<Fid>> {
		let conn = self.inner.conn.lock();
		let mut stmt = conn.prepare(&format!("SELECT hi, lo FROM \"{REGISTRY_TABLE}\""))?;
		let mut fids = stmt
			.query_map([], |row| Ok(Fid::new(from_sql(row.get(0)?), from_sql(row.get(1)?))))?
			.collect::<rusqlite::Result<Vec<_>>>()?;
		// registry order is by signed words, callers expect unsigned fid order
		fids.sort();
		Ok(fids)
	}

	fn index_exists(&self, fid: &Fid) -> Result<bool> {
		let conn = self.inner.conn.lock();
		index_exists(&conn, fid)
	}

	#[instrument(name = "store::sqlite::get", level = "trace", skip(self, key), fields(fid = %index.fid(), key_len = key.len()))]
	fn get(&self, index: &IndexHandle, key: &[u8]) -> Result<Option<Vec<u8>>> {
		let conn = self.inner.conn.lock();
		let table = resolve(&conn, index)?;
		let value = conn
			.query_row(&format!("SELECT value FROM \"{table}\" WHERE key = ?1"), params![key], |row| {
				row.get::<_, Vec<u8>>(0)
			})
			.optional()?;
		Ok(value)
	}

	#[instrument(name = "store::sqlite::set", level = "trace", skip(self, key, value), fields(fid = %index.fid(), key_len = key.len()))]
	fn set(&self, index: &IndexHandle, key: &[u8], value: &[u8]) -> Result<()> {
		let conn = self.inner.conn.lock();
		let table = resolve(&conn, index)?;
		conn.execute(
			&format!(
				"INSERT INTO \"{table}\" (key, value) VALUES (?1, ?2)
				 ON CONFLICT(key) DO UPDATE SET value = excluded.value"
			),
			params![key, value],
		)?;
		Ok(())
	}

	#[instrument(name = "store::sqlite::delete", level = "trace", skip(self, key), fields(fid = %index.fid(), key_len = key.len()))]
	fn delete(&self, index: &IndexHandle, key: &[u8]) -> Result<()> {
		let conn = self.inner.conn.lock();
		let table = resolve(&conn, index)?;
		let removed = conn.execute(&format!("DELETE FROM \"{table}\" WHERE key = ?1"), params![key])?;
		if removed == 0 {
			return Err(StoreError::KeyNotFound {
				fid: index.fid(),
			});
		}
		Ok(())
	}

	fn range(&self, index: &IndexHandle, start: Bound<&[u8]>, end: Bound<&[u8]>) -> Result<Vec<RawEntry>> {
		let conn = self.inner.conn.lock();
		let table = resolve(&conn, index)?;
		let (query, params) = build_range_query(&table, start, end);
		let mut stmt = conn.prepare(&query)?;
		let entries = stmt
			.query_map(params_from_iter(params.iter()), |row| {
				Ok(RawEntry {
					key: row.get(0)?,
					value: row.get(1)?,
				})
			})?
			.collect::<rusqlite::Result<Vec<_>>>()?;
		Ok(entries)
	}
}
