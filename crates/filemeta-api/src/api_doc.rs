//! OpenAPI documentation, served at `/api/openapi.json` and rendered at `/docs`.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use filemeta_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Filemeta API",
        version = "0.1.0",
        description = "Accepts a single file through a multipart form and reports its name, extension and declared media type. Uploaded content is never stored."
    ),
    paths(
        handlers::root::greeting,
        handlers::upload::upload_file,
    ),
    components(
        schemas(
            models::UploadMetadata,
            error::ErrorResponse,
        )
    ),
    tags(
        (name = "general", description = "Service greeting"),
        (name = "uploads", description = "File metadata extraction")
    )
)]
pub struct ApiDoc;
