use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::image_dto::ExplanationResponse,
    error::{Error, Result},
    utils::image::{validate_image, NO_FILE_MESSAGE},
    AppState,
};

pub const FILE_FIELD: &str = "file";

#[utoipa::path(
    post,
    path = "/image",
    request_body(content = crate::dto::image_dto::ImageUpload, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Explanation of the image", body = ExplanationResponse),
        (status = 400, description = "Missing, empty or undecodable image", body = crate::dto::common_dto::ErrorResponse),
        (status = 500, description = "AI not configured, generation blocked or AI failure", body = crate::dto::common_dto::ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn explain_image(
    State(state): State<AppState>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse> {
    state.explanation_service.ensure_configured()?;
    let mut multipart = multipart?;

    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        tracing::info!(
            filename = field.file_name().unwrap_or(""),
            content_type = field.content_type().unwrap_or(""),
            "Received image"
        );
        upload = Some(field.bytes().await?);
        break;
    }

    let data = upload.ok_or_else(|| Error::InvalidImage(NO_FILE_MESSAGE.to_string()))?;
    let image = validate_image(data)?;
    tracing::debug!(width = image.width, height = image.height, mime = image.mime_type, "Image decoded");

    let explanation = state.explanation_service.explain(image).await?;
    Ok(Json(ExplanationResponse { explanation }))
}
