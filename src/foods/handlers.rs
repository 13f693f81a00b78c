use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use super::dto::{FoodQuery, NewFoodRequest};
use super::repo_types::Food;
use crate::state::AppState;

pub fn food_routes() -> Router<AppState> {
    Router::new()
        .route("/foods", get(search_foods).post(add_food))
        .route("/foods/:id", get(get_food))
}

#[instrument(skip(state))]
pub async fn search_foods(
    State(state): State<AppState>,
    Query(q): Query<FoodQuery>,
) -> Json<Vec<Food>> {
    let foods = match q.food_type {
        None => state.foods.search(&q.q),
        Some(t) => {
            let needle = q.q.to_lowercase();
            state
                .foods
                .by_type(t)
                .into_iter()
                .filter(|f| f.name_matches(&needle))
                .collect()
        }
    };
    Json(foods)
}

#[instrument(skip(state, payload))]
pub async fn add_food(
    State(state): State<AppState>,
    Json(payload): Json<NewFoodRequest>,
) -> (StatusCode, Json<Food>) {
    let food = Food::new(payload.name, payload.food_type, payload.macros);
    state.foods.add(food.clone());
    info!(food_id = %food.id, "food created");
    (StatusCode::CREATED, Json(food))
}

#[instrument(skip(state))]
pub async fn get_food(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Food>, (StatusCode, String)> {
    state
        .foods
        .get(id)
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "Food not found".into()))
}
