use axum::{extract::State, response::IntoResponse};

use crate::{
    dto::quiz_dto::{QuizResultInput, QuizResultOutput},
    error::Result,
    utils::extract::AppJson,
    AppState,
};

#[utoipa::path(
    post,
    path = "/quiz",
    request_body = QuizResultInput,
    responses(
        (status = 200, description = "Quiz result stored", body = QuizResultOutput),
        (status = 400, description = "Malformed body", body = crate::dto::common_dto::ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn submit_quiz(
    State(state): State<AppState>,
    AppJson(payload): AppJson<QuizResultInput>,
) -> Result<impl IntoResponse> {
    tracing::info!(lab_id = payload.lab_id, score = payload.score, "Received quiz result");
    let saved = state.quiz_service.insert_quiz_result(payload).await?;
    Ok(AppJson(QuizResultOutput::from(saved)))
}
