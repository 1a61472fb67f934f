//! Song repository: SQL access for songs and song details
//!
//! Every function fails with [`songbook_common::Error::Database`] when the
//! underlying query fails. No retries, no transactions.

pub mod details;
pub mod query;
pub mod songs;

pub use details::get_song_detail;
pub use songs::{create_song, delete_song, get_song_text, list_songs, update_song};
