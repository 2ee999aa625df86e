use axum::routing::get;
use axum::Router;
use highfields_db::models::volunteer::{CreateVolunteer, Volunteer};

use crate::handlers::resources;
use crate::state::AppState;

/// Volunteer routes mounted at `/volunteers`.
///
/// ```text
/// GET    /          -> list (newest first, cap 100)
/// POST   /          -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(resources::list::<Volunteer>).post(resources::create::<CreateVolunteer>),
    )
}
