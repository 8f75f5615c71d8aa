//! User domain type

use serde::{Deserialize, Serialize};

/// Name of the reserved system user that owns seeded stations
pub const SYSTEM_USER: &str = "attic";

/// An authenticated requester. Session and token handling live in the
/// serving layer; the core only needs the name for visibility checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User name
    pub name: String,
}

impl User {
    /// Create a user
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The reserved system user
    pub fn system() -> Self {
        Self::new(SYSTEM_USER)
    }
}
