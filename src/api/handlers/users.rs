use crate::{
    api::{AppState, error::ApiResult},
    core::user,
    entities,
};
use axum::{Json, extract::State};

/// `GET /user` - every user as `{id, email}`.
///
/// # Errors
/// Answers 500 if the users cannot be read.
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<entities::user::Model>>> {
    let users = user::get_all_users(&state.database).await?;
    Ok(Json(users))
}
