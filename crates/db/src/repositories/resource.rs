//! Generic create/list/get pattern shared by every record kind.
//!
//! A [`Resource`] describes where a kind lives and how it is ordered; a
//! [`Submission`] is a create DTO that knows how to validate and insert
//! itself. [`ResourceRepo`] provides the queries that only depend on the
//! former.

use async_trait::async_trait;
use highfields_core::types::RecordId;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};

/// Default cap on list queries.
pub const DEFAULT_LIST_LIMIT: i64 = 100;

/// A record kind stored in its own table.
pub trait Resource: for<'r> FromRow<'r, PgRow> + Serialize + Send + Sync + Unpin + 'static {
    /// Human-readable label used in not-found messages ("Sermon").
    const ENTITY: &'static str;
    const TABLE: &'static str;
    /// Column list selected for this kind, in `FromRow` order.
    const COLUMNS: &'static str;
    /// `ORDER BY` clause for list queries.
    const ORDER_BY: &'static str;
    const LIST_LIMIT: i64 = DEFAULT_LIST_LIMIT;

    fn id(&self) -> RecordId;
}

/// A create DTO for a [`Resource`].
#[async_trait]
pub trait Submission: DeserializeOwned + Send + Sync + 'static {
    type Record: Resource;

    /// Field-level checks beyond what deserialization enforces.
    fn validate(&self) -> Result<(), String>;

    /// Insert with a fresh id and server-side timestamp; returns the stored row.
    async fn insert(&self, pool: &PgPool) -> Result<Self::Record, sqlx::Error>;
}

/// Queries shared by every [`Resource`].
pub struct ResourceRepo;

impl ResourceRepo {
    /// List records in the kind's order, capped at `R::LIST_LIMIT`.
    pub async fn list<R: Resource>(pool: &PgPool) -> Result<Vec<R>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM {} ORDER BY {} LIMIT $1",
            R::COLUMNS,
            R::TABLE,
            R::ORDER_BY
        );
        sqlx::query_as::<_, R>(&query)
            .bind(R::LIST_LIMIT)
            .fetch_all(pool)
            .await
    }

    /// Find a record by id.
    pub async fn find_by_id<R: Resource>(
        pool: &PgPool,
        id: RecordId,
    ) -> Result<Option<R>, sqlx::Error> {
        let query = format!("SELECT {} FROM {} WHERE id = $1", R::COLUMNS, R::TABLE);
        sqlx::query_as::<_, R>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Total number of stored records of this kind.
    pub async fn count<R: Resource>(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM {}", R::TABLE);
        let (count,): (i64,) = sqlx::query_as(&query).fetch_one(pool).await?;
        Ok(count)
    }
}
