use axum::{extract::State, response::IntoResponse, Json};

use crate::AppState;

#[utoipa::path(
    get,
    path = "/labs",
    responses(
        (status = 200, description = "List of available labs", body = [crate::models::lab::Lab])
    )
)]
#[axum::debug_handler]
pub async fn list_labs(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.labs.as_ref().clone())
}
