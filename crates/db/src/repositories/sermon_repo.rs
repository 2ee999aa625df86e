//! Repository for the `sermons` table.

use highfields_core::types::{new_record_id, RecordId};
use sqlx::PgExecutor;

use crate::models::sermon::{NewSermon, Sermon};
use crate::repositories::resource::Resource;

const COLUMNS: &str = "id, title, description, speaker, youtube_url, thumbnail_url, date, series";

impl Resource for Sermon {
    const ENTITY: &'static str = "Sermon";
    const TABLE: &'static str = "sermons";
    const COLUMNS: &'static str = COLUMNS;
    const ORDER_BY: &'static str = "date DESC";

    fn id(&self) -> RecordId {
        self.id
    }
}

pub struct SermonRepo;

impl SermonRepo {
    /// Insert a sermon unless one with the same title exists.
    ///
    /// Returns `true` when a row was inserted.
    pub async fn insert_if_absent(
        executor: impl PgExecutor<'_>,
        sermon: &NewSermon<'_>,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO sermons \
                (id, title, description, speaker, youtube_url, thumbnail_url, date, series) \
             VALUES ($1, $2, $3, $4, $5, $6, $7::timestamptz, $8) \
             ON CONFLICT (title) DO NOTHING",
        )
        .bind(new_record_id())
        .bind(sermon.title)
        .bind(sermon.description)
        .bind(sermon.speaker)
        .bind(sermon.youtube_url)
        .bind(sermon.thumbnail_url)
        .bind(sermon.date)
        .bind(sermon.series)
        .execute(executor)
        .await?;
        Ok(result.rows_affected() == 1)
    }
}
