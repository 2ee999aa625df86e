//! Repository for the `connect_requests` table.

use async_trait::async_trait;
use chrono::Utc;
use highfields_core::forms::{validate_email, validate_required, MAX_SHORT_TEXT_LENGTH};
use highfields_core::types::{new_record_id, RecordId};
use sqlx::PgPool;

use crate::models::connect_request::{ConnectRequest, CreateConnectRequest};
use crate::repositories::resource::{Resource, Submission};

const COLUMNS: &str = "id, name, email, phone, interest, created_at";

impl Resource for ConnectRequest {
    const ENTITY: &'static str = "Connect request";
    const TABLE: &'static str = "connect_requests";
    const COLUMNS: &'static str = COLUMNS;
    const ORDER_BY: &'static str = "created_at DESC";

    fn id(&self) -> RecordId {
        self.id
    }
}

#[async_trait]
impl Submission for CreateConnectRequest {
    type Record = ConnectRequest;

    fn validate(&self) -> Result<(), String> {
        validate_required("name", &self.name, MAX_SHORT_TEXT_LENGTH)?;
        validate_email("email", &self.email)?;
        validate_required("phone", &self.phone, MAX_SHORT_TEXT_LENGTH)?;
        validate_required("interest", &self.interest, MAX_SHORT_TEXT_LENGTH)
    }

    async fn insert(&self, pool: &PgPool) -> Result<ConnectRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO connect_requests (id, name, email, phone, interest, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ConnectRequest>(&query)
            .bind(new_record_id())
            .bind(&self.name)
            .bind(&self.email)
            .bind(&self.phone)
            .bind(&self.interest)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }
}
