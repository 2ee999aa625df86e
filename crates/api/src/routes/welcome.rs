use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Banner served at the API root.
pub const WELCOME_MESSAGE: &str = "Highfields Community Church API - #RISE26";

#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

/// GET /api
async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(welcome))
}
