use highfields_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `questions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Question {
    pub id: RecordId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub question: String,
    pub is_anonymous: bool,
    #[sqlx(rename = "created_at")]
    pub timestamp: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuestion {
    pub name: Option<String>,
    pub email: Option<String>,
    pub question: String,
    #[serde(default)]
    pub is_anonymous: bool,
}
