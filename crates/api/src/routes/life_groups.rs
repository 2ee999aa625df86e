use axum::routing::{get, post};
use axum::Router;
use highfields_db::models::connect_request::{ConnectRequest, CreateConnectRequest};
use highfields_db::models::life_group::LifeGroup;

use crate::handlers::{life_groups, resources};
use crate::state::AppState;

/// Life group routes mounted at `/life-groups`.
///
/// ```text
/// GET    /          -> list groups (definition order)
/// POST   /signup    -> signup (404 for unknown group)
/// GET    /connect   -> list connect requests (newest first, cap 100)
/// POST   /connect   -> create connect request
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(resources::list::<LifeGroup>))
        .route("/signup", post(life_groups::signup))
        .route(
            "/connect",
            get(resources::list::<ConnectRequest>).post(resources::create::<CreateConnectRequest>),
        )
}
