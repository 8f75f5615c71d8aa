//! Spiff playlist documents
//!
//! The JSON playlist format exchanged with clients and persisted for
//! stations and saved playlists, loosely following the JSPF rendering of
//! XSPF (<https://www.xspf.org/jspf/>). A document wraps descriptive
//! metadata, an ordered `track` array whose entries are either concrete
//! media or symbolic references, and client cursor state that is opaque to
//! the resolver.

pub mod patch;
pub mod playlist;

pub use patch::{compare, patch, CONTENT_TYPE};
pub use playlist::{
    unmarshal, Entry, Playlist, Spiff, TYPE_MUSIC, TYPE_PODCAST, TYPE_STREAM, TYPE_VIDEO,
};
