//! Repository for the `questions` table.

use async_trait::async_trait;
use chrono::Utc;
use highfields_core::forms::{
    validate_optional, validate_optional_email, validate_required, MAX_LONG_TEXT_LENGTH,
    MAX_SHORT_TEXT_LENGTH,
};
use highfields_core::types::{new_record_id, RecordId};
use sqlx::PgPool;

use crate::models::question::{CreateQuestion, Question};
use crate::repositories::resource::{Resource, Submission};

const COLUMNS: &str = "id, name, email, question, is_anonymous, created_at";

impl Resource for Question {
    const ENTITY: &'static str = "Question";
    const TABLE: &'static str = "questions";
    const COLUMNS: &'static str = COLUMNS;
    const ORDER_BY: &'static str = "created_at DESC";

    fn id(&self) -> RecordId {
        self.id
    }
}

#[async_trait]
impl Submission for CreateQuestion {
    type Record = Question;

    fn validate(&self) -> Result<(), String> {
        validate_optional("name", self.name.as_deref(), MAX_SHORT_TEXT_LENGTH)?;
        validate_optional_email("email", self.email.as_deref())?;
        validate_required("question", &self.question, MAX_LONG_TEXT_LENGTH)
    }

    async fn insert(&self, pool: &PgPool) -> Result<Question, sqlx::Error> {
        let query = format!(
            "INSERT INTO questions (id, name, email, question, is_anonymous, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(new_record_id())
            .bind(&self.name)
            .bind(&self.email)
            .bind(&self.question)
            .bind(self.is_anonymous)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }
}
