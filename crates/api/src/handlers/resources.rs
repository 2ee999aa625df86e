//! Generic handlers for the create/list/get pattern every record kind shares.
//!
//! Routes instantiate them per kind, e.g. `get(resources::list::<Volunteer>)`.

use axum::extract::{Path, State};
use axum::Json;
use highfields_core::types::parse_record_id;
use highfields_db::repositories::{Resource, ResourceRepo, Submission};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

/// GET /api/{kind}
///
/// List records in the kind's order, capped at its list limit.
pub async fn list<R: Resource>(State(state): State<AppState>) -> AppResult<Json<Vec<R>>> {
    let records = ResourceRepo::list::<R>(&state.pool).await?;

    Ok(Json(records))
}

/// GET /api/{kind}/{id}
///
/// Ids that are not UUIDs cannot match a record and report not-found.
pub async fn get<R: Resource>(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<R>> {
    let id = parse_record_id(&raw_id).ok_or_else(|| AppError::not_found(R::ENTITY, &raw_id))?;

    let record = ResourceRepo::find_by_id::<R>(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(R::ENTITY, raw_id))?;

    Ok(Json(record))
}

/// POST /api/{kind}
///
/// Validate the submission, store it with a fresh id and timestamp, and
/// return the stored record.
pub async fn create<S: Submission>(
    State(state): State<AppState>,
    AppJson(input): AppJson<S>,
) -> AppResult<Json<S::Record>> {
    input.validate().map_err(AppError::validation)?;

    let record = input.insert(&state.pool).await?;

    tracing::info!(
        entity = <S::Record as Resource>::ENTITY,
        id = %record.id(),
        "Submission recorded",
    );

    Ok(Json(record))
}
