//! Video catalog types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Feature film
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Unique movie identifier
    pub id: i64,

    /// Movie title
    pub title: String,

    /// Stable content-addressable identifier (bucket ETag)
    pub etag: String,

    /// Byte length of the underlying object
    pub size: i64,

    /// Theatrical release date
    pub date: Option<NaiveDate>,
}
