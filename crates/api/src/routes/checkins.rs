use axum::routing::get;
use axum::Router;
use highfields_db::models::checkin::{CheckIn, CreateCheckIn};

use crate::handlers::{checkins, resources};
use crate::state::AppState;

/// Check-in routes mounted at `/checkins`.
///
/// ```text
/// GET    /          -> list (newest first, cap 100)
/// POST   /          -> create
/// GET    /today     -> list_today (since UTC midnight, cap 1000)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(resources::list::<CheckIn>).post(resources::create::<CreateCheckIn>),
        )
        .route("/today", get(checkins::list_today))
}
