use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::state::AppState;

/// Health check endpoint
///
/// # Returns
///
/// JSON response with status and the number of stored games
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let games = state.games.read().await.len();

    (
        StatusCode::OK,
        Json(serde_json::json!({"status": "ok", "games": games})),
    )
}
