pub mod health;
pub mod image;
pub mod labs;
pub mod quiz;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Json, Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::{
    dto::{
        common_dto::{ErrorResponse, MessageResponse},
        image_dto::{ExplanationResponse, ImageUpload},
        quiz_dto::{QuizResultInput, QuizResultOutput},
    },
    middleware::cors::permissive_cors,
    models::lab::Lab,
    AppState,
};

/// Ceiling on request bodies; phone photos exceed axum's 2 MiB default.
pub const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::root,
        health::health,
        labs::list_labs,
        quiz::submit_quiz,
        image::explain_image,
    ),
    components(schemas(
        Lab,
        QuizResultInput,
        QuizResultOutput,
        ExplanationResponse,
        ImageUpload,
        MessageResponse,
        ErrorResponse,
    ))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/labs", get(labs::list_labs))
        .route("/quiz", post(quiz::submit_quiz))
        .route("/image", post(image::explain_image))
        .route("/api-docs/openapi.json", get(openapi_json))
        .with_state(state)
        .layer(permissive_cors())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}
