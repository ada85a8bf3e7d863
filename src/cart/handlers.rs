//! REST API handlers for shopping cart operations
//!
//! This module implements HTTP endpoints for cart mutations, the delivery
//! selector and checkout.

use super::models::*;
use crate::coordinator::{Notification, SharedState};
use crate::error::AppError;
use crate::view::CartView;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, patch, post, put},
    Json, Router,
};
use serde::Serialize;

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/cart", get(cart))
        .route("/cart/items", post(add_item))
        .route("/cart/items/:id", patch(update_quantity).delete(remove_item))
        .route("/cart/delivery", put(set_delivery))
        .route("/checkout", post(checkout))
}

/// Cart state after a mutation, plus the toast it raised if any
#[derive(Serialize)]
pub struct CartResponse {
    pub cart: CartView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
}

/// Endpoint: GET /cart
async fn cart(State(state): State<SharedState>) -> Json<CartView> {
    Json(state.coordinator.lock().cart_view())
}

/// Endpoint: POST /cart/items
async fn add_item(
    State(state): State<SharedState>,
    payload: Result<Json<AddItemInput>, JsonRejection>,
) -> Result<Json<CartResponse>, AppError> {
    let Json(input) = payload?;
    let mut coordinator = state.coordinator.lock();
    let notification = coordinator.add_item(&input.item_id, input.quantity)?;

    Ok(Json(CartResponse {
        cart: coordinator.cart_view(),
        notification: Some(notification),
    }))
}

/// Endpoint: PATCH /cart/items/:id
/// Stores the quantity as given; ids not in the cart are ignored.
async fn update_quantity(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateQuantityInput>, JsonRejection>,
) -> Result<Json<CartResponse>, AppError> {
    let Json(input) = payload?;
    let mut coordinator = state.coordinator.lock();
    coordinator.update_quantity(&id, input.quantity);

    Ok(Json(CartResponse {
        cart: coordinator.cart_view(),
        notification: None,
    }))
}

/// Endpoint: DELETE /cart/items/:id
async fn remove_item(State(state): State<SharedState>, Path(id): Path<String>) -> Json<CartResponse> {
    let mut coordinator = state.coordinator.lock();
    let notification = coordinator.remove_item(&id);

    Json(CartResponse {
        cart: coordinator.cart_view(),
        notification: Some(notification),
    })
}

/// Endpoint: PUT /cart/delivery
async fn set_delivery(
    State(state): State<SharedState>,
    payload: Result<Json<DeliveryInput>, JsonRejection>,
) -> Result<Json<CartView>, AppError> {
    let Json(input) = payload?;
    let mut coordinator = state.coordinator.lock();
    coordinator.set_delivery_option(input.option);

    Ok(Json(coordinator.cart_view()))
}

/// Endpoint: POST /checkout
/// Submits the selected delivery option; the cart itself is unchanged.
async fn checkout(State(state): State<SharedState>) -> Json<CartResponse> {
    let mut coordinator = state.coordinator.lock();
    let option = coordinator.delivery_option();
    let notification = coordinator.checkout(option);

    Json(CartResponse {
        cart: coordinator.cart_view(),
        notification: Some(notification),
    })
}
