use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;

use crate::auth::token::AuthUser;
use crate::errors::AppError;
use crate::state::AppState;
use crate::users::model::User;

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/user", get(get_user))
}

#[instrument(skip(state))]
async fn get_user(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<User>, AppError> {
    let user = state.users.get_user(user_id).await?;
    Ok(Json(user))
}
