//! Upload ingestion: decides whether a form carries a file and derives its metadata.

use crate::models::{FieldValue, FormFields, UploadMetadata, UploadedFile};

/// Form field expected to hold the uploaded file.
pub const FILE_FIELD: &str = "file";

/// Rejections produced while ingesting a submitted form
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The `file` field is missing or holds plain text.
    #[error("No file uploaded")]
    NoFileUploaded,
}

/// Turns a parsed form into [`UploadMetadata`].
///
/// Stateless; one value can serve any number of concurrent requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct UploadIngestor;

impl UploadIngestor {
    pub fn new() -> Self {
        Self
    }

    pub fn ingest(&self, fields: &FormFields) -> Result<UploadMetadata, ValidationError> {
        // A text value under the file key counts as no file at all.
        let file = fields
            .get(FILE_FIELD)
            .and_then(FieldValue::as_file)
            .ok_or(ValidationError::NoFileUploaded)?;

        Ok(describe(file))
    }
}

fn describe(file: &UploadedFile) -> UploadMetadata {
    UploadMetadata {
        filename: file.name().to_string(),
        extension: derive_extension(file.name()).to_string(),
        mime_type: file.media_type().to_string(),
    }
}

/// Last `.`-separated segment of `filename`.
///
/// A name without any dot is its own extension (`README` -> `README`). Empty
/// segments are kept as-is, so `archive.` yields an empty extension.
pub fn derive_extension(filename: &str) -> &str {
    filename.rsplit('.').next().unwrap_or(filename)
}
