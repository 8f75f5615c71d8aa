//! Playlist resolution and the radio-station engine
//!
//! This crate expands abstract, reference-based playlist documents into
//! concrete, ordered lists of playable entries:
//!
//! - [`reference`] parses symbolic reference strings into a closed set of
//!   typed variants
//! - [`selection`] implements the track selection modes (singles, popular,
//!   deep cuts, shuffle, similar-artist radio)
//! - [`resolve`] walks a playlist's entries in order and splices expanded
//!   entries in place of each reference
//! - [`station`] owns refresh-on-read semantics and built-in station seeding
//!
//! Resolution is fail-fast: the first hard error (malformed id, dangling
//! lookup, station cycle) aborts the whole call. Unmatched reference
//! patterns and stations that are not visible to the requester are silently
//! skipped and contribute no entries.

pub mod reference;
pub mod resolve;
pub mod selection;
pub mod station;

pub use reference::{RefKind, SelectionMode};
pub use resolve::Resolver;
pub use station::create_stations;
