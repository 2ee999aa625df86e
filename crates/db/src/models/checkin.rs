use highfields_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `checkins` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CheckIn {
    pub id: RecordId,
    pub name: String,
    pub phone: Option<String>,
    pub is_first_time: bool,
    pub notes: Option<String>,
    #[sqlx(rename = "created_at")]
    pub timestamp: Timestamp,
}

/// DTO for `POST /checkins`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCheckIn {
    pub name: String,
    pub phone: Option<String>,
    #[serde(default)]
    pub is_first_time: bool,
    pub notes: Option<String>,
}
