//! Full application bootstrap: config validation, tracing init, router.
//!
//! Kept in its own test binary because the global subscriber can only be
//! installed once per process.

use axum::http::StatusCode;
use axum_test::TestServer;
use filemeta_api::setup::initialize_app;
use filemeta_core::Config;

#[tokio::test]
async fn test_initialize_app_serves_router() {
    let config = Config {
        greeting: "bootstrapped".to_string(),
        ..Config::default()
    };

    let (state, router) = initialize_app(config).expect("app should initialize");
    assert_eq!(state.config.greeting, "bootstrapped");

    let server = TestServer::new(router).expect("Failed to start test server");
    let response = server.get("/").await;
    response.assert_status(StatusCode::OK);
    response.assert_text("bootstrapped");
}

#[test]
fn test_initialize_app_rejects_invalid_config() {
    let config = Config {
        server_port: 0,
        ..Config::default()
    };

    let err = initialize_app(config).expect_err("zero port must be rejected");
    assert!(err.to_string().contains("Configuration validation failed"));
}
