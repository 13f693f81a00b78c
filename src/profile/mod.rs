mod dto;
pub mod handlers;
mod repo;
pub mod repo_types;

use crate::state::AppState;
use axum::Router;

pub use repo::ProfileRepository;

pub fn router() -> Router<AppState> {
    handlers::profile_routes()
}
