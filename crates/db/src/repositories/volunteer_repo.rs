//! Repository for the `volunteers` table.

use async_trait::async_trait;
use chrono::Utc;
use highfields_core::forms::{
    validate_email, validate_non_empty_list, validate_optional, validate_required,
    MAX_LONG_TEXT_LENGTH, MAX_SHORT_TEXT_LENGTH,
};
use highfields_core::types::{new_record_id, RecordId};
use sqlx::PgPool;

use crate::models::volunteer::{CreateVolunteer, Volunteer};
use crate::repositories::resource::{Resource, Submission};

const COLUMNS: &str = "id, name, email, phone, ministry_areas, availability, notes, created_at";

impl Resource for Volunteer {
    const ENTITY: &'static str = "Volunteer";
    const TABLE: &'static str = "volunteers";
    const COLUMNS: &'static str = COLUMNS;
    const ORDER_BY: &'static str = "created_at DESC";

    fn id(&self) -> RecordId {
        self.id
    }
}

#[async_trait]
impl Submission for CreateVolunteer {
    type Record = Volunteer;

    fn validate(&self) -> Result<(), String> {
        validate_required("name", &self.name, MAX_SHORT_TEXT_LENGTH)?;
        validate_email("email", &self.email)?;
        validate_required("phone", &self.phone, MAX_SHORT_TEXT_LENGTH)?;
        validate_non_empty_list("ministry_areas", &self.ministry_areas)?;
        validate_required("availability", &self.availability, MAX_SHORT_TEXT_LENGTH)?;
        validate_optional("notes", self.notes.as_deref(), MAX_LONG_TEXT_LENGTH)
    }

    async fn insert(&self, pool: &PgPool) -> Result<Volunteer, sqlx::Error> {
        let query = format!(
            "INSERT INTO volunteers \
                (id, name, email, phone, ministry_areas, availability, notes, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Volunteer>(&query)
            .bind(new_record_id())
            .bind(&self.name)
            .bind(&self.email)
            .bind(&self.phone)
            .bind(&self.ministry_areas)
            .bind(&self.availability)
            .bind(&self.notes)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }
}
