//! Domain types for the Attic media catalog

mod music;
mod podcast;
mod station;
mod user;
mod video;

pub use music::{Artist, Release, Track};
pub use podcast::{Episode, Series};
pub use station::{Station, StationType};
pub use user::{User, SYSTEM_USER};
pub use video::Movie;
