//! Repository for the `life_groups` and `life_group_signups` tables.
//!
//! A signup and the matching `current_members` bump are written in one
//! transaction, so a group's counter never misses a stored signup.

use chrono::Utc;
use highfields_core::life_groups::has_capacity;
use highfields_core::types::{new_record_id, RecordId};
use sqlx::{PgExecutor, PgPool};

use crate::models::life_group::{
    CreateLifeGroupSignup, LifeGroup, LifeGroupSignup, NewLifeGroup, SignupOutcome,
};
use crate::repositories::resource::Resource;

/// Column list for `life_groups` queries.
const COLUMNS: &str = "id, name, description, leader, schedule, location, \
    max_members, current_members, image_url";

/// Column list for `life_group_signups` queries.
const SIGNUP_COLUMNS: &str = "id, group_id, name, email, phone, created_at";

impl Resource for LifeGroup {
    const ENTITY: &'static str = "Life group";
    const TABLE: &'static str = "life_groups";
    const COLUMNS: &'static str = COLUMNS;
    const ORDER_BY: &'static str = "position ASC, name ASC";

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Resource for LifeGroupSignup {
    const ENTITY: &'static str = "Life group signup";
    const TABLE: &'static str = "life_group_signups";
    const COLUMNS: &'static str = SIGNUP_COLUMNS;
    const ORDER_BY: &'static str = "created_at DESC";

    fn id(&self) -> RecordId {
        self.id
    }
}

/// Provides signup and seeding operations for life groups.
pub struct LifeGroupRepo;

impl LifeGroupRepo {
    /// Sign someone up for a group and bump its member counter.
    ///
    /// The group row is locked with `FOR UPDATE` before the capacity check,
    /// so concurrent signups for one group are serialized and each sees the
    /// counter left by the previous one. With `enforce_capacity` a group
    /// without room is refused. Nothing is written unless the outcome is
    /// [`SignupOutcome::Created`].
    pub async fn signup(
        pool: &PgPool,
        group_id: RecordId,
        input: &CreateLifeGroupSignup,
        enforce_capacity: bool,
    ) -> Result<SignupOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let counts: Option<(i32, i32)> = sqlx::query_as(
            "SELECT current_members, max_members FROM life_groups WHERE id = $1 FOR UPDATE",
        )
        .bind(group_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some((current_members, max_members)) = counts else {
            tx.rollback().await?;
            return Ok(SignupOutcome::GroupNotFound);
        };
        if enforce_capacity && !has_capacity(current_members, max_members) {
            tx.rollback().await?;
            return Ok(SignupOutcome::GroupFull);
        }

        sqlx::query("UPDATE life_groups SET current_members = current_members + 1 WHERE id = $1")
            .bind(group_id)
            .execute(&mut *tx)
            .await?;

        let query = format!(
            "INSERT INTO life_group_signups (id, group_id, name, email, phone, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {SIGNUP_COLUMNS}"
        );
        let signup = sqlx::query_as::<_, LifeGroupSignup>(&query)
            .bind(new_record_id())
            .bind(group_id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(Utc::now())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(SignupOutcome::Created(signup))
    }

    /// Number of signups stored for a group.
    pub async fn count_signups(pool: &PgPool, group_id: RecordId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM life_group_signups WHERE group_id = $1")
                .bind(group_id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }

    /// Insert a group at list `position` unless one with the same name exists.
    ///
    /// Returns `true` when a row was inserted.
    pub async fn insert_if_absent(
        executor: impl PgExecutor<'_>,
        group: &NewLifeGroup<'_>,
        position: i32,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO life_groups \
                (id, name, description, leader, schedule, location, \
                 max_members, current_members, image_url, position) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             ON CONFLICT (name) DO NOTHING",
        )
        .bind(new_record_id())
        .bind(group.name)
        .bind(group.description)
        .bind(group.leader)
        .bind(group.schedule)
        .bind(group.location)
        .bind(group.max_members)
        .bind(group.current_members)
        .bind(group.image_url)
        .bind(position)
        .execute(executor)
        .await?;
        Ok(result.rows_affected() == 1)
    }
}
