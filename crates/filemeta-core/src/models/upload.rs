use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Metadata reported for an accepted upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadMetadata {
    /// Filename as sent by the client
    #[schema(example = "document.backup.pdf")]
    pub filename: String,
    /// Last dot-separated segment of the filename, or the whole filename when it has no dot
    #[schema(example = "pdf")]
    pub extension: String,
    /// Media type declared by the client, unmodified
    #[schema(example = "application/pdf")]
    pub mime_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_exactly_three_camel_case_keys() {
        let metadata = UploadMetadata {
            filename: "photo.jpg".to_string(),
            extension: "jpg".to_string(),
            mime_type: "image/jpeg".to_string(),
        };

        let json = serde_json::to_value(&metadata).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "filename": "photo.jpg",
                "extension": "jpg",
                "mimeType": "image/jpeg",
            })
        );
        assert_eq!(json.as_object().map(|o| o.len()), Some(3));
    }
}
