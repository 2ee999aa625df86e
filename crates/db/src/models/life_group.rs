//! Life group and life group signup models.

use highfields_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `life_groups` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LifeGroup {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub leader: String,
    pub schedule: String,
    pub location: String,
    pub max_members: i32,
    /// Denormalized; bumped by one per signup and never recomputed.
    pub current_members: i32,
    pub image_url: Option<String>,
}

/// A row from the `life_group_signups` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LifeGroupSignup {
    pub id: RecordId,
    pub group_id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[sqlx(rename = "created_at")]
    pub timestamp: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// DTO for `POST /life-groups/signup`.
///
/// `group_id` stays a raw string so an unparseable id reports the same
/// "Life group not found" as an unknown one.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLifeGroupSignup {
    pub group_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// A life group definition used when seeding defaults.
#[derive(Debug, Clone, Copy)]
pub struct NewLifeGroup<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub leader: &'a str,
    pub schedule: &'a str,
    pub location: &'a str,
    pub max_members: i32,
    pub current_members: i32,
    pub image_url: Option<&'a str>,
}

/// Result of a signup attempt.
#[derive(Debug)]
pub enum SignupOutcome {
    /// Signup stored and the group's counter incremented.
    Created(LifeGroupSignup),
    /// No group with the requested id.
    GroupNotFound,
    /// Capacity enforcement is on and the group has no room.
    GroupFull,
}
