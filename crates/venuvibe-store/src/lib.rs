//! # venuvibe-store
//!
//! Local persistence for VenuVibe.
//!
//! Every collection lives as one JSON array under a fixed key in a
//! [`KeyValueStore`]. The [`Database`] handle wraps a store backend and
//! provides typed CRUD helpers for every domain model plus the sign-up /
//! sign-in session operations. Each write reads the whole collection,
//! modifies it in memory and writes it back.

pub mod backup;
pub mod budget;
pub mod collection;
pub mod database;
pub mod events;
pub mod guests;
pub mod kv;
pub mod models;
pub mod tasks;
pub mod users;
pub mod vendors;

#[cfg(feature = "sqlite")]
pub mod migrations;
#[cfg(feature = "sqlite")]
pub mod sqlite;

mod error;

pub use database::Database;
pub use error::{Result, StoreError};
pub use kv::{KeyValueStore, MemoryStore};
pub use models::*;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;
