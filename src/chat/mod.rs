mod dto;
pub mod handlers;
mod repo;
pub mod repo_types;

use crate::state::AppState;
use axum::Router;

pub use repo::{ChatRepository, APOLOGY};

pub fn router() -> Router<AppState> {
    handlers::chat_routes()
}
