//! SQL builders for song listing and partial updates
//!
//! Only the fixed column names below are ever written into SQL text. Every
//! user-supplied value, including limit and offset, goes through a bound
//! parameter.
//!
//! Substring filters run against the `*_folded` columns, which hold
//! [`fold_case`] copies of the searchable fields. SQLite's `LIKE` only folds
//! ASCII, so both sides are lowercased here instead.

use songbook_common::db::{SongFilter, SongPatch};
use songbook_common::{Error, Result};
use sqlx::{QueryBuilder, Sqlite};
use uuid::Uuid;

/// Columns returned for every song query, in [`Song`](songbook_common::db::Song) field order
pub const SONG_COLUMNS: &str = r#"id, "group", song, release_date, text, link"#;

/// Song columns a listing can filter on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Id,
    Group,
    Song,
    ReleaseDate,
    Text,
    Link,
}

/// How a filter value is compared against its column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matching {
    /// `column = value`
    Exact,
    /// Case-insensitive substring (`LIKE %value%` on the folded column)
    Contains,
}

impl FilterField {
    /// Column the filter value is compared against
    pub fn column(self) -> &'static str {
        match self {
            FilterField::Id => "id",
            FilterField::Group => "group_folded",
            FilterField::Song => "song_folded",
            FilterField::ReleaseDate => "release_date",
            FilterField::Text => "text_folded",
            FilterField::Link => "link_folded",
        }
    }

    pub fn matching(self) -> Matching {
        match self {
            FilterField::Id | FilterField::ReleaseDate => Matching::Exact,
            _ => Matching::Contains,
        }
    }
}

/// Song columns a partial update can set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateField {
    Group,
    Song,
    ReleaseDate,
    Text,
    Link,
}

impl UpdateField {
    pub fn column(self) -> &'static str {
        match self {
            UpdateField::Group => r#""group""#,
            UpdateField::Song => "song",
            UpdateField::ReleaseDate => "release_date",
            UpdateField::Text => "text",
            UpdateField::Link => "link",
        }
    }

    /// Lowercased shadow column kept in step with [`column`](Self::column)
    pub fn folded_column(self) -> Option<&'static str> {
        match self {
            UpdateField::Group => Some("group_folded"),
            UpdateField::Song => Some("song_folded"),
            UpdateField::ReleaseDate => None,
            UpdateField::Text => Some("text_folded"),
            UpdateField::Link => Some("link_folded"),
        }
    }
}

/// Case folding shared by stored shadow columns and substring filters
pub fn fold_case(value: &str) -> String {
    value.to_lowercase()
}

/// Supplied filter values, in column order
pub fn filter_values(filter: &SongFilter) -> Vec<(FilterField, String)> {
    [
        (FilterField::Id, filter.id.map(|id| id.to_string())),
        (FilterField::Group, filter.group.clone()),
        (FilterField::Song, filter.song.clone()),
        (FilterField::ReleaseDate, filter.release_date.clone()),
        (FilterField::Text, filter.text.clone()),
        (FilterField::Link, filter.link.clone()),
    ]
    .into_iter()
    .filter_map(|(field, value)| value.map(|v| (field, v)))
    .collect()
}

/// Supplied update values, in column order
pub fn update_values(patch: &SongPatch) -> Vec<(UpdateField, String)> {
    [
        (UpdateField::Group, patch.group.clone()),
        (UpdateField::Song, patch.song.clone()),
        (UpdateField::ReleaseDate, patch.release_date.clone()),
        (UpdateField::Text, patch.text.clone()),
        (UpdateField::Link, patch.link.clone()),
    ]
    .into_iter()
    .filter_map(|(field, value)| value.map(|v| (field, v)))
    .collect()
}

/// Build `SELECT ... FROM songs` for a filter
///
/// Rows come back in insertion order so limit/offset pages are stable.
pub fn select_songs(filter: &SongFilter) -> QueryBuilder<'static, Sqlite> {
    let mut builder = QueryBuilder::new(format!("SELECT {SONG_COLUMNS} FROM songs WHERE 1=1"));

    for (field, value) in filter_values(filter) {
        builder.push(" AND ");
        builder.push(field.column());
        match field.matching() {
            Matching::Exact => {
                builder.push(" = ");
                builder.push_bind(value);
            }
            Matching::Contains => {
                builder.push(" LIKE ");
                builder.push_bind(contains_pattern(&fold_case(&value)));
                builder.push(r" ESCAPE '\'");
            }
        }
    }

    builder.push(" ORDER BY rowid");

    // SQLite only accepts OFFSET after LIMIT; -1 means no limit
    if filter.limit.is_some() || filter.offset.is_some() {
        builder.push(" LIMIT ");
        builder.push_bind(filter.limit.map_or(-1, i64::from));
        builder.push(" OFFSET ");
        builder.push_bind(i64::from(filter.offset.unwrap_or(0)));
    }

    builder
}

/// Build `UPDATE songs SET ... WHERE id = ? RETURNING ...`
///
/// Fails with [`Error::NoFieldsToUpdate`] when the patch is empty.
pub fn update_song(id: Uuid, patch: &SongPatch) -> Result<QueryBuilder<'static, Sqlite>> {
    if patch.is_empty() {
        return Err(Error::NoFieldsToUpdate);
    }

    let mut builder = QueryBuilder::new("UPDATE songs SET ");
    {
        let mut assignments = builder.separated(", ");
        for (field, value) in update_values(patch) {
            if let Some(folded) = field.folded_column() {
                assignments.push(folded);
                assignments.push_unseparated(" = ");
                assignments.push_bind_unseparated(fold_case(&value));
            }
            assignments.push(field.column());
            assignments.push_unseparated(" = ");
            assignments.push_bind_unseparated(value);
        }
        assignments.push("updated_at = CURRENT_TIMESTAMP");
    }

    builder.push(" WHERE id = ");
    builder.push_bind(id.to_string());
    builder.push(format!(" RETURNING {SONG_COLUMNS}"));

    Ok(builder)
}

/// Wrap a value for a substring `LIKE`, escaping its own wildcards
fn contains_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
