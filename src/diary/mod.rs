mod dto;
pub mod handlers;
mod repo;
pub mod repo_types;

use crate::state::AppState;
use axum::Router;

pub use repo::DiaryRepository;

pub fn router() -> Router<AppState> {
    handlers::diary_routes()
}
