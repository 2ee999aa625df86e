//! Repository for the `prayer_requests` table.

use async_trait::async_trait;
use chrono::Utc;
use highfields_core::forms::{
    validate_optional, validate_required, MAX_LONG_TEXT_LENGTH, MAX_SHORT_TEXT_LENGTH,
};
use highfields_core::types::{new_record_id, RecordId};
use sqlx::PgPool;

use crate::models::prayer_request::{CreatePrayerRequest, PrayerRequest};
use crate::repositories::resource::{Resource, Submission};

const COLUMNS: &str = "id, name, request, is_anonymous, created_at";

impl Resource for PrayerRequest {
    const ENTITY: &'static str = "Prayer request";
    const TABLE: &'static str = "prayer_requests";
    const COLUMNS: &'static str = COLUMNS;
    const ORDER_BY: &'static str = "created_at DESC";

    fn id(&self) -> RecordId {
        self.id
    }
}

#[async_trait]
impl Submission for CreatePrayerRequest {
    type Record = PrayerRequest;

    fn validate(&self) -> Result<(), String> {
        validate_optional("name", self.name.as_deref(), MAX_SHORT_TEXT_LENGTH)?;
        validate_required("request", &self.request, MAX_LONG_TEXT_LENGTH)
    }

    async fn insert(&self, pool: &PgPool) -> Result<PrayerRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO prayer_requests (id, name, request, is_anonymous, created_at) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PrayerRequest>(&query)
            .bind(new_record_id())
            .bind(&self.name)
            .bind(&self.request)
            .bind(self.is_anonymous)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }
}
