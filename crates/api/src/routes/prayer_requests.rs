use axum::routing::get;
use axum::Router;
use highfields_db::models::prayer_request::{CreatePrayerRequest, PrayerRequest};

use crate::handlers::resources;
use crate::state::AppState;

/// Prayer request routes mounted at `/prayer-requests`.
///
/// ```text
/// GET    /          -> list (newest first, cap 100)
/// POST   /          -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(resources::list::<PrayerRequest>).post(resources::create::<CreatePrayerRequest>),
    )
}
