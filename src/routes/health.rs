use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::{database::pool::ping, dto::common_dto::MessageResponse, error::Result, AppState};

pub const WELCOME_MESSAGE: &str = "Welcome to the STEM App Backend!";

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is alive", body = MessageResponse)
    )
)]
#[axum::debug_handler]
pub async fn root() -> impl IntoResponse {
    Json(MessageResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Store is reachable"),
        (status = 500, description = "Store is unreachable", body = crate::dto::common_dto::ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> Result<impl IntoResponse> {
    ping(&state.pool).await?;
    let body = json!({
        "status": "ok",
    });
    Ok((StatusCode::OK, Json(body)))
}
