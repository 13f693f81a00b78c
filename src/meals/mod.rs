mod dto;
pub mod handlers;
mod repo;
pub mod repo_types;

use crate::state::AppState;
use axum::Router;

pub use repo::MealRepository;

pub fn router() -> Router<AppState> {
    handlers::meal_routes()
}
