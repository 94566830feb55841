use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::form::SubmittedForm;
use axum::{extract::State, Json};
use filemeta_core::UploadMetadata;
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/upload",
    tag = "uploads",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Metadata of the uploaded file", body = UploadMetadata),
        (status = 400, description = "No file uploaded", body = ErrorResponse),
        (status = 500, description = "Failed to process file upload", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    SubmittedForm(fields): SubmittedForm,
) -> Result<Json<UploadMetadata>, HttpAppError> {
    let metadata = state.ingestor.ingest(&fields)?;

    tracing::info!(
        filename = %metadata.filename,
        extension = %metadata.extension,
        mime_type = %metadata.mime_type,
        "Upload described"
    );

    Ok(Json(metadata))
}
