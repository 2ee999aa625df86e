use highfields_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `volunteers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Volunteer {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Ministry areas in the order the volunteer picked them.
    pub ministry_areas: Vec<String>,
    pub availability: String,
    pub notes: Option<String>,
    #[sqlx(rename = "created_at")]
    pub timestamp: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateVolunteer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub ministry_areas: Vec<String>,
    pub availability: String,
    pub notes: Option<String>,
}
