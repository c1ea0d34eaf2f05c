use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::AppState;

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - Readiness probe
/// Ready once both the menu and the weekly plan are loaded
pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    let menu = state.menu.lock().await.is_loaded();
    let weekly = state.weekly.lock().await.is_loaded();

    if menu && weekly {
        return (StatusCode::OK, Json(json!({"status": "ready"})));
    }

    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(json!({
            "status": "not_ready",
            "menu": menu,
            "weekly": weekly,
        })),
    )
}
