//! Podcast catalog types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Podcast series (an RSS feed)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    /// Unique series identifier
    pub id: i64,

    /// Series title
    pub title: String,

    /// Series author
    pub author: String,

    /// Series artwork URL
    pub image: String,

    /// Date of the most recent episode
    pub date: Option<NaiveDate>,
}

/// Podcast episode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// Unique episode identifier
    pub id: i64,

    /// Owning series identifier
    pub series_id: i64,

    /// Episode title
    pub title: String,

    /// Episode author; empty means "inherit from the series"
    pub author: String,

    /// Stable identifier derived from the feed GUID
    pub eid: String,

    /// Byte length of the enclosure, if known
    pub size: i64,

    /// Publication date
    pub date: Option<NaiveDate>,
}

impl Episode {
    /// The author credited on playlist entries: the episode author when
    /// present, otherwise the series author.
    pub fn credited_author<'a>(&'a self, series: &'a Series) -> &'a str {
        if self.author.is_empty() {
            &series.author
        } else {
            &self.author
        }
    }
}
