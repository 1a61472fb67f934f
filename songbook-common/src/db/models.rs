//! Database models
//!
//! JSON field names follow the public API (camelCase).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored song record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: Uuid,
    pub group: String,
    pub song: String,
    /// Free-form, as returned by the detail source
    pub release_date: String,
    /// Lyrics, verses separated by literal `\n\n` markers
    pub text: String,
    pub link: String,
}

/// Release date, lyrics and link describing one song
///
/// Missing JSON fields decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SongDetail {
    pub release_date: String,
    pub text: String,
    pub link: String,
}

/// Song record ready for insertion (no identifier yet)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSong {
    pub group: String,
    pub song: String,
    pub release_date: String,
    pub text: String,
    pub link: String,
}

impl NewSong {
    /// Combine the caller-supplied names with a fetched detail record
    pub fn from_detail(group: String, song: String, detail: SongDetail) -> Self {
        Self {
            group,
            song,
            release_date: detail.release_date,
            text: detail.text,
            link: detail.link,
        }
    }
}

/// Optional filters for listing songs
///
/// `id` and `release_date` match exactly; `group`, `song`, `text` and
/// `link` match case-insensitive substrings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SongFilter {
    pub id: Option<Uuid>,
    pub group: Option<String>,
    pub song: Option<String>,
    pub release_date: Option<String>,
    pub text: Option<String>,
    pub link: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// Partial update; only supplied fields change
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SongPatch {
    pub group: Option<String>,
    pub song: Option<String>,
    pub release_date: Option<String>,
    pub text: Option<String>,
    pub link: Option<String>,
}

impl SongPatch {
    /// True when no field was supplied
    pub fn is_empty(&self) -> bool {
        self.group.is_none()
            && self.song.is_none()
            && self.release_date.is_none()
            && self.text.is_none()
            && self.link.is_none()
    }
}
