pub mod checkins;
pub mod donations;
pub mod health;
pub mod life_groups;
pub mod prayer_requests;
pub mod questions;
pub mod sermons;
pub mod volunteers;
pub mod welcome;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                  welcome message
///
/// /checkins                          list, create
/// /checkins/today                    since UTC midnight
///
/// /prayer-requests                   list, create
/// /questions                         list, create
/// /volunteers                        list, create
/// /donations                         list, create
///
/// /life-groups                       list
/// /life-groups/signup                create signup (POST)
/// /life-groups/connect               list, create connect requests
///
/// /sermons                           list
/// /sermons/{id}                      get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(welcome::router())
        .nest("/checkins", checkins::router())
        .nest("/prayer-requests", prayer_requests::router())
        .nest("/questions", questions::router())
        .nest("/volunteers", volunteers::router())
        .nest("/donations", donations::router())
        .nest("/life-groups", life_groups::router())
        .nest("/sermons", sermons::router())
}
