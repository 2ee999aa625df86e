use axum::routing::get;
use axum::Router;
use highfields_db::models::sermon::Sermon;

use crate::handlers::resources;
use crate::state::AppState;

/// Sermon routes mounted at `/sermons`. Read-only; the archive is seeded at
/// startup.
///
/// ```text
/// GET    /          -> list (date descending)
/// GET    /{id}      -> get
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(resources::list::<Sermon>))
        .route("/{id}", get(resources::get::<Sermon>))
}
