use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    pub success: bool,
    #[serde(rename = "fileId")]
    pub file_id: String,
}

/// Forward an uploaded file to the assistant service's file store.
#[utoipa::path(
    post,
    path = "/api/upload",
    responses(
        (status = 200, description = "File registered", body = UploadResponse),
        (status = 400, description = "No file field in the form")
    ),
    tag = "upload"
)]
pub async fn upload(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::BadRequest("Invalid multipart payload".to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload.bin").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|_| ApiError::BadRequest("Invalid multipart payload".to_string()))?;

        let file = state
            .assistant
            .upload_file(&file_name, bytes.to_vec())
            .await
            .map_err(|e| ApiError::upstream("Failed to upload file to OpenAI", e))?;

        return Ok(Json(UploadResponse {
            success: true,
            file_id: file.id,
        }));
    }

    Err(ApiError::BadRequest("File is required".to_string()))
}
