use serde::{Deserialize, Serialize};

pub type MovieId = u64;

/// One library entry as the service reports it.
///
/// Field names on the wire are PascalCase with an upper-case `ID`. The
/// timestamps are passed through untouched; nothing in the client interprets
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MovieRecord {
    #[serde(rename = "ID")]
    pub id: MovieId,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub deleted_at: Option<String>,
    pub title: String,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub cover: Option<String>,
}

impl MovieRecord {
    /// Year for display; `0` means the service does not know it.
    pub fn known_year(&self) -> Option<i32> {
        (self.year != 0).then_some(self.year)
    }

    /// Cover URL for display; an empty string is the same as no cover.
    pub fn cover_url(&self) -> Option<&str> {
        self.cover.as_deref().filter(|cover| !cover.trim().is_empty())
    }
}
