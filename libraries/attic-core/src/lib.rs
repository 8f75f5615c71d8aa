//! Attic Core
//!
//! Shared types, traits, and error handling for the Attic media server.
//!
//! This crate provides the foundational building blocks used across the
//! workspace:
//!
//! - **Domain Types**: `Artist`, `Release`, `Track`, `Movie`, `Series`,
//!   `Episode`, `Station`, `User`
//! - **Boundary Traits**: `Catalog` (lookup and query over synced media
//!   metadata) and `Locator` (serving-layer URL construction)
//! - **Settings**: typed configuration for search and radio limits
//! - **Error Handling**: unified `Error` and `Result` types

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod settings;
pub mod types;

// Re-export commonly used items
pub use catalog::{Catalog, Locator};
pub use error::{Error, Result};
pub use settings::{MusicSettings, RadioQuery, StreamSettings};

// Export all types
pub use types::{
    Artist, Episode, Movie, Release, Series, Station, StationType, Track, User, SYSTEM_USER,
};
