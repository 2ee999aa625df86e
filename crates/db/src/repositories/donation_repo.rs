//! Repository for the `donations` table.

use async_trait::async_trait;
use chrono::Utc;
use highfields_core::donations::{validate_amount, validate_donation_type};
use highfields_core::forms::{
    validate_email, validate_optional, validate_required, MAX_LONG_TEXT_LENGTH,
    MAX_SHORT_TEXT_LENGTH,
};
use highfields_core::types::{new_record_id, RecordId};
use sqlx::PgPool;

use crate::models::donation::{CreateDonation, Donation};
use crate::repositories::resource::{Resource, Submission};

const COLUMNS: &str = "id, name, email, amount, donation_type, message, created_at";

impl Resource for Donation {
    const ENTITY: &'static str = "Donation";
    const TABLE: &'static str = "donations";
    const COLUMNS: &'static str = COLUMNS;
    const ORDER_BY: &'static str = "created_at DESC";

    fn id(&self) -> RecordId {
        self.id
    }
}

#[async_trait]
impl Submission for CreateDonation {
    type Record = Donation;

    fn validate(&self) -> Result<(), String> {
        validate_required("name", &self.name, MAX_SHORT_TEXT_LENGTH)?;
        validate_email("email", &self.email)?;
        validate_amount(self.amount)?;
        validate_donation_type(&self.donation_type)?;
        validate_optional("message", self.message.as_deref(), MAX_LONG_TEXT_LENGTH)
    }

    async fn insert(&self, pool: &PgPool) -> Result<Donation, sqlx::Error> {
        let query = format!(
            "INSERT INTO donations \
                (id, name, email, amount, donation_type, message, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Donation>(&query)
            .bind(new_record_id())
            .bind(&self.name)
            .bind(&self.email)
            .bind(self.amount)
            .bind(&self.donation_type)
            .bind(&self.message)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }
}
