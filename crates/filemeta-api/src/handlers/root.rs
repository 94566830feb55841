use crate::state::AppState;
use axum::extract::State;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/",
    tag = "general",
    responses(
        (status = 200, description = "Plain-text greeting", body = String, content_type = "text/plain")
    )
)]
pub async fn greeting(State(state): State<Arc<AppState>>) -> String {
    state.config.greeting.clone()
}
