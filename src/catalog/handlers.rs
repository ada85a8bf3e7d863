//! REST API handlers for the menu
//!
//! Browsing, filtering and the per-card quantity steppers.

use super::models::{CategoryOption, CATEGORY_OPTIONS};
use crate::coordinator::{Notification, SharedState};
use crate::error::AppError;
use crate::view::{CartView, MenuView};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

/// Creates routes for menu-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/menu", get(menu))
        .route("/menu/categories", get(categories))
        .route("/menu/filters", put(set_filters))
        .route("/menu/:id/increment", post(increment))
        .route("/menu/:id/decrement", post(decrement))
        .route("/menu/:id/add", post(add_to_cart))
}

/// Input for the search box and category buttons; absent fields are kept
#[derive(Debug, Deserialize)]
pub struct FiltersInput {
    pub search: Option<String>,
    pub category: Option<String>,
}

#[derive(Serialize)]
pub struct CardAddedResponse {
    pub menu: MenuView,
    pub cart: CartView,
    pub notification: Notification,
}

/// Endpoint: GET /menu
async fn menu(State(state): State<SharedState>) -> Json<MenuView> {
    Json(state.coordinator.lock().menu_view())
}

/// Endpoint: GET /menu/categories
async fn categories() -> Json<Vec<CategoryOption>> {
    Json(CATEGORY_OPTIONS.to_vec())
}

/// Endpoint: PUT /menu/filters
async fn set_filters(
    State(state): State<SharedState>,
    payload: Result<Json<FiltersInput>, JsonRejection>,
) -> Result<Json<MenuView>, AppError> {
    let Json(input) = payload?;
    let mut coordinator = state.coordinator.lock();

    if let Some(search) = input.search {
        coordinator.set_search_term(search);
    }
    if let Some(category) = input.category {
        coordinator.set_category(category);
    }

    Ok(Json(coordinator.menu_view()))
}

/// Endpoint: POST /menu/:id/increment
async fn increment(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<MenuView>, AppError> {
    let mut coordinator = state.coordinator.lock();
    coordinator.increment_card(&id)?;
    Ok(Json(coordinator.menu_view()))
}

/// Endpoint: POST /menu/:id/decrement
async fn decrement(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<MenuView>, AppError> {
    let mut coordinator = state.coordinator.lock();
    coordinator.decrement_card(&id)?;
    Ok(Json(coordinator.menu_view()))
}

/// Endpoint: POST /menu/:id/add
/// Adds the card's stepper quantity to the cart.
async fn add_to_cart(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<CardAddedResponse>, AppError> {
    let mut coordinator = state.coordinator.lock();
    let notification = coordinator.add_from_card(&id)?;

    Ok(Json(CardAddedResponse {
        menu: coordinator.menu_view(),
        cart: coordinator.cart_view(),
        notification,
    }))
}
