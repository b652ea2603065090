use axum::Router;

use crate::state::AppState;

mod dto;
pub mod handlers;
pub mod password;
pub mod service;
pub mod token;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
