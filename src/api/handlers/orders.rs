//! Order endpoints.

use crate::{
    api::{AppState, error::ApiResult},
    core::order::{self, NewOrder, OrderView},
};
use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use tracing::debug;

/// `GET /orders` - every order with its drinks and current total.
///
/// # Errors
/// Answers 500 if the orders cannot be read.
pub async fn list_orders(State(state): State<AppState>) -> ApiResult<Json<Vec<OrderView>>> {
    let orders = order::get_all_orders(&state.database).await?;
    Ok(Json(orders))
}

/// `GET /orders/:id`
///
/// # Errors
/// Answers 404 for an unknown id, 400 for a non-numeric one.
pub async fn get_order(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<OrderView>> {
    let Path(id) = path?;
    let order = order::get_order(&state.database, id).await?;
    Ok(Json(order))
}

/// `POST /orders` - creates an order from `{name, drinks: [id, ...]}`.
///
/// Answers 201 with the created order.
///
/// # Errors
/// Answers 404 naming the first unknown drink id, 422 for a malformed body.
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<NewOrder>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<OrderView>)> {
    let Json(input) = payload?;
    debug!(?input, "create order request");
    let order = order::create_order(&state.database, input).await?;
    Ok((StatusCode::CREATED, Json(order)))
}
