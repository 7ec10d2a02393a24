use std::fmt;
use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};

use crate::text_utils::PostDate;

/// Post identifier as found in the record store, e.g. `goldenblue.my-post`.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct PostId(pub String);

impl PostId {
    /// The segment following the namespace separator. `None` when the id has
    /// no separator or the segment is empty.
    pub fn slug(&self) -> Option<&str> {
        self.0.split('.').nth(1).filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub date: PostDate,
    pub display_date: String,
    pub content: String,
}

impl Post {
    /// Sort key. Posts without a parsed date are the oldest.
    pub fn sort_key(&self) -> DateTime<Utc> {
        self.date.instant().unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    pub fn file_name(&self) -> String {
        format!("{}.html", self.slug)
    }
}

impl Display for Post {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "slug={}, date={}, title={}", self.slug, self.display_date, self.title)
    }
}
