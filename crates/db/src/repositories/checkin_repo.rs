//! Repository for the `checkins` table.

use async_trait::async_trait;
use chrono::Utc;
use highfields_core::forms::{
    validate_optional, validate_required, MAX_LONG_TEXT_LENGTH, MAX_SHORT_TEXT_LENGTH,
};
use highfields_core::types::{new_record_id, RecordId, Timestamp};
use sqlx::PgPool;

use crate::models::checkin::{CheckIn, CreateCheckIn};
use crate::repositories::resource::{Resource, Submission};

/// Column list for `checkins` queries.
const COLUMNS: &str = "id, name, phone, is_first_time, notes, created_at";

impl Resource for CheckIn {
    const ENTITY: &'static str = "Check-in";
    const TABLE: &'static str = "checkins";
    const COLUMNS: &'static str = COLUMNS;
    const ORDER_BY: &'static str = "created_at DESC";

    fn id(&self) -> RecordId {
        self.id
    }
}

#[async_trait]
impl Submission for CreateCheckIn {
    type Record = CheckIn;

    fn validate(&self) -> Result<(), String> {
        validate_required("name", &self.name, MAX_SHORT_TEXT_LENGTH)?;
        validate_optional("phone", self.phone.as_deref(), MAX_SHORT_TEXT_LENGTH)?;
        validate_optional("notes", self.notes.as_deref(), MAX_LONG_TEXT_LENGTH)
    }

    async fn insert(&self, pool: &PgPool) -> Result<CheckIn, sqlx::Error> {
        let query = format!(
            "INSERT INTO checkins (id, name, phone, is_first_time, notes, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CheckIn>(&query)
            .bind(new_record_id())
            .bind(&self.name)
            .bind(&self.phone)
            .bind(self.is_first_time)
            .bind(&self.notes)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }
}

/// Check-in queries beyond the generic list.
pub struct CheckInRepo;

impl CheckInRepo {
    /// Check-ins at or after `since`, newest first.
    pub async fn list_since(
        pool: &PgPool,
        since: Timestamp,
        limit: i64,
    ) -> Result<Vec<CheckIn>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM checkins \
             WHERE created_at >= $1 \
             ORDER BY created_at DESC \
             LIMIT $2"
        );
        sqlx::query_as::<_, CheckIn>(&query)
            .bind(since)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
