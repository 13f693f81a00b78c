mod catalog;
mod dto;
pub mod handlers;
mod repo;
pub mod repo_types;

use crate::state::AppState;
use axum::Router;

pub use repo::FoodRepository;

pub fn router() -> Router<AppState> {
    handlers::food_routes()
}
