use axum::extract::State;
use axum::Json;
use chrono::Utc;
use highfields_core::checkins::{start_of_utc_day, TODAY_LIST_LIMIT};
use highfields_db::models::checkin::CheckIn;
use highfields_db::repositories::CheckInRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/checkins/today
///
/// Check-ins since midnight UTC on the server clock, newest first.
pub async fn list_today(State(state): State<AppState>) -> AppResult<Json<Vec<CheckIn>>> {
    let since = start_of_utc_day(Utc::now());
    let checkins = CheckInRepo::list_since(&state.pool, since, TODAY_LIST_LIMIT).await?;

    Ok(Json(checkins))
}
