use axum::routing::get;
use axum::Router;
use highfields_db::models::question::{CreateQuestion, Question};

use crate::handlers::resources;
use crate::state::AppState;

/// Question routes mounted at `/questions`.
///
/// ```text
/// GET    /          -> list (newest first, cap 100)
/// POST   /          -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(resources::list::<Question>).post(resources::create::<CreateQuestion>),
    )
}
