// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Namespace registry of the metadata service.
//!
//! Namespaces are recorded in one global index. Each namespace also owns a
//! dedicated object index whose fid is derived from the configured base fid
//! and the namespace id. The store offers no multi-key transactions, so
//! create and delete order their steps such that an info record always
//! implies its object index exists; the opposite leak is repaired by
//! [`Catalog::reconcile`].

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod catalog;
pub mod config;
mod error;
pub mod namespace;
mod sequence;
pub mod test_utils;

pub use catalog::Catalog;
pub use config::{CatalogConfig, KvStoreConfig};
pub use error::{ConfigError, InvalidNameReason, NamespaceError, SequenceError};
pub use namespace::{MAX_NAME_LEN, Namespace, NamespaceDef, reconcile::ReconcileReport};

pub type Result<T> = std::result::Result<T, NamespaceError>;
