//! Request body decoding into [`FormFields`].

use crate::error::HttpAppError;
use axum::{
    extract::{FromRequest, Multipart, Request},
    http::header,
    Form,
};
use filemeta_core::{AppError, FieldValue, FormFields, UploadedFile};

/// Extractor yielding the submitted form fields of a request.
///
/// `multipart/form-data` parts that carry a filename become files, every
/// other part is text. `application/x-www-form-urlencoded` bodies only
/// produce text fields. Any other content type yields an empty form.
/// Failing to read or decode the body rejects with an upload processing error.
#[derive(Debug, Clone)]
pub struct SubmittedForm(pub FormFields);

enum BodyKind {
    Multipart,
    UrlEncoded,
    Other,
}

fn body_kind(req: &Request) -> BodyKind {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.trim().to_ascii_lowercase())
        .unwrap_or_default();

    if content_type.starts_with("multipart/form-data") {
        BodyKind::Multipart
    } else if content_type.starts_with("application/x-www-form-urlencoded") {
        BodyKind::UrlEncoded
    } else {
        BodyKind::Other
    }
}

impl<S> FromRequest<S> for SubmittedForm
where
    S: Send + Sync,
{
    type Rejection = HttpAppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let fields = match body_kind(&req) {
            BodyKind::Multipart => {
                let multipart = Multipart::from_request(req, state).await.map_err(|e| {
                    AppError::UploadProcessing(format!(
                        "Invalid multipart request: {}",
                        e.body_text()
                    ))
                })?;
                read_multipart(multipart).await?
            }
            BodyKind::UrlEncoded => {
                let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                    .await
                    .map_err(|e| {
                        AppError::UploadProcessing(format!(
                            "Invalid urlencoded form: {}",
                            e.body_text()
                        ))
                    })?;
                pairs
                    .into_iter()
                    .map(|(name, value)| (name, FieldValue::Text(value)))
                    .collect()
            }
            BodyKind::Other => FormFields::new(),
        };

        if fields.is_empty() {
            tracing::debug!("Request carried no form fields");
        }

        Ok(SubmittedForm(fields))
    }
}

/// Read every part of a multipart stream.
async fn read_multipart(mut multipart: Multipart) -> Result<FormFields, AppError> {
    let mut fields = FormFields::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::UploadProcessing(format!("Failed to read multipart: {}", e)))?
    {
        // Parts without a name cannot be addressed; multer skips their data on the next read.
        let Some(name) = field.name().map(|s| s.to_string()) else {
            continue;
        };

        let value = match field.file_name().map(|s| s.to_string()) {
            Some(file_name) => {
                // Raw header value: the parsed mime would be lowercased.
                let media_type = field
                    .headers()
                    .get(header::CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string)
                    .unwrap_or_default();
                let data = field.bytes().await.map_err(|e| {
                    AppError::UploadProcessing(format!("Failed to read file data: {}", e))
                })?;
                let file = UploadedFile::new(file_name, media_type, data.len());
                tracing::debug!(
                    field = %name,
                    file_name = %file.name(),
                    size = file.size(),
                    "Read file part"
                );
                FieldValue::File(file)
            }
            None => FieldValue::Text(field.text().await.map_err(|e| {
                AppError::UploadProcessing(format!("Failed to read form field: {}", e))
            })?),
        };

        tracing::debug!(field = %name, kind = value.kind(), "Read form field");
        fields.insert(name, value);
    }

    tracing::debug!(fields = fields.len(), "Multipart body read");
    Ok(fields)
}
