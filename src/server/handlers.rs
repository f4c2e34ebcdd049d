use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use super::state::AppState;
use crate::error::AppError;

pub const NO_LIVE_SERIES: &str = "No live series found";
pub const NO_LIVE_PLAYERS: &str = "No live players found";
pub const NO_LIVE_TEAMS: &str = "No live teams found";

pub async fn get_live_series(State(state): State<AppState>) -> Result<Response, AppError> {
    let ctx = state.request_context();
    let series = state.live_service.get_live_series_details(&ctx).await?;
    Ok(json_or_not_found(series, NO_LIVE_SERIES))
}

pub async fn get_live_players(State(state): State<AppState>) -> Result<Response, AppError> {
    let ctx = state.request_context();
    let players = state.live_service.get_live_players(&ctx).await?;
    Ok(json_or_not_found(players, NO_LIVE_PLAYERS))
}

pub async fn get_live_teams(State(state): State<AppState>) -> Result<Response, AppError> {
    let ctx = state.request_context();
    let teams = state.live_service.get_live_teams(&ctx).await?;
    Ok(json_or_not_found(teams, NO_LIVE_TEAMS))
}

/// 200 with the items as JSON, or a plain 404 when there are none.
fn json_or_not_found<T: Serialize>(items: Vec<T>, not_found: &str) -> Response {
    if items.is_empty() {
        (StatusCode::NOT_FOUND, format!("{not_found}\n")).into_response()
    } else {
        Json(items).into_response()
    }
}
