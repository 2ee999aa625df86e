use axum::routing::get;
use axum::Router;
use highfields_db::models::donation::{CreateDonation, Donation};

use crate::handlers::resources;
use crate::state::AppState;

/// Donation intent routes mounted at `/donations`.
///
/// ```text
/// GET    /          -> list (newest first, cap 100)
/// POST   /          -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(resources::list::<Donation>).post(resources::create::<CreateDonation>),
    )
}
