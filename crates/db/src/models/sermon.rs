use highfields_core::types::{RecordId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `sermons` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Sermon {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub speaker: String,
    pub youtube_url: String,
    pub thumbnail_url: String,
    pub date: Timestamp,
    pub series: Option<String>,
}

/// A sermon definition used when seeding defaults.
#[derive(Debug, Clone, Copy)]
pub struct NewSermon<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub speaker: &'a str,
    pub youtube_url: &'a str,
    pub thumbnail_url: &'a str,
    /// RFC 3339; cast to `TIMESTAMPTZ` by the insert.
    pub date: &'a str,
    pub series: Option<&'a str>,
}
