use highfields_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `prayer_requests` table.
///
/// `name` is stored as submitted even when `is_anonymous` is set; hiding it
/// is left to whoever reads the list.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PrayerRequest {
    pub id: RecordId,
    pub name: Option<String>,
    pub request: String,
    pub is_anonymous: bool,
    #[sqlx(rename = "created_at")]
    pub timestamp: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePrayerRequest {
    pub name: Option<String>,
    pub request: String,
    #[serde(default)]
    pub is_anonymous: bool,
}
