//! Test helpers: build the real router and wrap it in an `axum_test::TestServer`.
//!
//! Run from workspace root: `cargo test -p filemeta-api`.

#![allow(dead_code)]

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use filemeta_api::setup::routes::setup_routes;
use filemeta_api::AppState;
use filemeta_core::Config;
use std::sync::Arc;

/// Configuration used by tests: defaults with a small upload limit.
pub fn test_config() -> Config {
    Config {
        max_upload_size_bytes: 1024 * 1024,
        ..Config::default()
    }
}

pub fn setup_test_server() -> TestServer {
    setup_test_server_with(test_config())
}

pub fn setup_test_server_with(config: Config) -> TestServer {
    let state = Arc::new(AppState::new(config.clone()));
    let router = setup_routes(&config, state).expect("Failed to build router");
    TestServer::new(router).expect("Failed to start test server")
}

/// Multipart form with a single `file` part.
pub fn file_form(filename: &str, mime_type: &str, content: &'static [u8]) -> MultipartForm {
    let part = Part::bytes(bytes::Bytes::from_static(content))
        .file_name(filename)
        .mime_type(mime_type);
    MultipartForm::new().add_part("file", part)
}

/// Boundary used by hand-built multipart bodies.
pub const BOUNDARY: &str = "XBOUNDARY";

/// A well-formed multipart body with no parts at all.
pub const EMPTY_MULTIPART_BODY: &[u8] = b"--XBOUNDARY--\r\n";

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}

/// Multipart body with a single `file` part whose headers are written verbatim.
pub fn raw_file_body(part_headers: &str, content: &str) -> bytes::Bytes {
    bytes::Bytes::from(format!(
        "--{BOUNDARY}\r\n{part_headers}\r\n\r\n{content}\r\n--{BOUNDARY}--\r\n"
    ))
}
