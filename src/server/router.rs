use axum::{Router, middleware::from_fn_with_state, routing::get};

use super::handlers::{get_live_players, get_live_series, get_live_teams};
use super::middleware::{rate_limit, track_in_flight};
use super::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/series/live", get(get_live_series))
        .route("/players/live", get(get_live_players))
        .route("/teams/live", get(get_live_teams))
        .layer(from_fn_with_state(state.clone(), rate_limit))
        .layer(from_fn_with_state(state.clone(), track_in_flight))
        .with_state(state)
}
