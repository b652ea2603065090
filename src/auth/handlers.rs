use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{info, instrument};

use crate::auth::dto::{LoginRequest, LoginResponse, SigninRequest};
use crate::auth::token::TokenKeys;
use crate::errors::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/signin", post(signin))
        .route("/login", post(login))
}

#[instrument(skip(state, payload))]
async fn signin(
    State(state): State<AppState>,
    Json(mut payload): Json<SigninRequest>,
) -> Result<StatusCode, AppError> {
    payload.email = payload.email.trim().to_lowercase();
    payload.validate()?;

    let email = payload.email.clone();
    state.auth.signin(payload.into_user()).await?;

    info!(%email, "user registered");
    Ok(StatusCode::CREATED)
}

#[instrument(skip(state, payload))]
async fn login(
    State(state): State<AppState>,
    Json(mut payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    payload.email = payload.email.trim().to_lowercase();
    payload.validate()?;

    let user_id = state.auth.login(&payload.email, &payload.password).await?;
    let token = TokenKeys::from_ref(&state).sign(user_id)?;

    info!(%user_id, "user logged in");
    Ok(Json(LoginResponse { token }))
}
