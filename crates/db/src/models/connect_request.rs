use highfields_core::life_groups::default_connect_interest;
use highfields_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `connect_requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ConnectRequest {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub interest: String,
    #[sqlx(rename = "created_at")]
    pub timestamp: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateConnectRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default = "default_connect_interest")]
    pub interest: String,
}
