//! Attic Storage
//!
//! SQLite persistence for the Attic media server: the synced media catalog
//! read by the resolver, radio stations with their cached playlist blobs,
//! and per-user saved playlist documents.
//!
//! The schema is embedded and applied on open; there is no external
//! migration tooling. [`Database`] implements the `attic_core::Catalog`
//! trait so the resolver stays free of SQL.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod database;
mod playlists;

pub use database::Database;
