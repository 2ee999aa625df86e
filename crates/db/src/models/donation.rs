use highfields_core::donations::default_donation_type;
use highfields_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `donations` table. Records intent only; no payment is taken.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Donation {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub amount: f64,
    /// `one-time` or `recurring`.
    pub donation_type: String,
    pub message: Option<String>,
    #[sqlx(rename = "created_at")]
    pub timestamp: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateDonation {
    pub name: String,
    pub email: String,
    pub amount: f64,
    #[serde(default = "default_donation_type")]
    pub donation_type: String,
    pub message: Option<String>,
}
