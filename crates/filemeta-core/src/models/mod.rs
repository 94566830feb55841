pub mod form;
pub mod upload;

pub use form::{FieldValue, FormFields, UploadedFile};
pub use upload::UploadMetadata;
