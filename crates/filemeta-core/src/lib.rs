//! Filemeta Core Library
//!
//! This crate provides the form model, the upload ingestor, error types and
//! configuration shared by the filemeta components.

pub mod config;
pub mod error;
pub mod ingest;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use ingest::{derive_extension, UploadIngestor, ValidationError, FILE_FIELD};
pub use models::{FieldValue, FormFields, UploadMetadata, UploadedFile};
