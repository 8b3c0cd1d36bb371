//! Drink catalog endpoints.

use crate::{
    api::{
        AppState,
        error::{ApiResult, MessageBody},
    },
    core::drink::{self, DrinkPatch, NewDrink},
    entities,
};
use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};
use tracing::debug;

/// `GET /drink` - the whole catalog.
///
/// # Errors
/// Answers 500 if the catalog cannot be read.
pub async fn list_drinks(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<entities::drink::Model>>> {
    let drinks = drink::get_all_drinks(&state.database).await?;
    Ok(Json(drinks))
}

/// `GET /drink/:id`
///
/// # Errors
/// Answers 404 for an unknown id, 400 for a non-numeric one.
pub async fn get_drink(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<entities::drink::Model>> {
    let Path(id) = path?;
    let drink = drink::get_drink(&state.database, id).await?;
    Ok(Json(drink))
}

/// `POST /drink` - creates a drink from `{name, price}`; both are required.
///
/// # Errors
/// Answers 400 for a missing or invalid field, 409 for a taken name.
pub async fn create_drink(
    State(state): State<AppState>,
    payload: Result<Json<NewDrink>, JsonRejection>,
) -> ApiResult<Json<entities::drink::Model>> {
    let Json(input) = payload?;
    debug!(?input, "create drink request");
    let drink = drink::create_drink(&state.database, input).await?;
    Ok(Json(drink))
}

/// `PUT /drink/:id` - applies `{name?, price?}` to an existing drink.
///
/// # Errors
/// Answers 404 for an unknown id, 400 for an invalid field, 409 for a taken name.
pub async fn update_drink(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<DrinkPatch>, JsonRejection>,
) -> ApiResult<Json<entities::drink::Model>> {
    let Path(id) = path?;
    let Json(patch) = payload?;
    debug!(id, ?patch, "update drink request");
    let drink = drink::update_drink(&state.database, id, patch).await?;
    Ok(Json(drink))
}

/// `DELETE /drink/:id`
///
/// # Errors
/// Answers 404 for an unknown id, 400 for a non-numeric one.
pub async fn delete_drink(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<MessageBody>> {
    let Path(id) = path?;
    let removed = drink::delete_drink(&state.database, id).await?;
    Ok(Json(MessageBody::new(format!(
        "Drink '{}' deleted",
        removed.name
    ))))
}
