//! Page-level endpoints

use super::notifications::Notification;
use super::state::SharedState;
use crate::view::PageView;
use axum::{extract::State, routing::get, Json, Router};

pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(page))
        .route("/notifications", get(notifications))
}

/// Endpoint: GET /
/// Hero banner, filtered menu and cart in one payload.
async fn page(State(state): State<SharedState>) -> Json<PageView> {
    Json(state.coordinator.lock().page_view())
}

/// Endpoint: GET /notifications
async fn notifications(State(state): State<SharedState>) -> Json<Vec<Notification>> {
    Json(state.coordinator.lock().notifications())
}
