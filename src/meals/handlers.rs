use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use super::dto::{DayQuery, MealDay, MealQuery, NewMealRequest};
use super::repo_types::Meal;
use crate::clock::today;
use crate::nutrition::Macros;
use crate::state::AppState;

pub fn meal_routes() -> Router<AppState> {
    Router::new()
        .route("/meals", get(list_meals).post(add_meal))
        .route("/meals/by-day", get(meals_by_day))
        .route("/meals/totals", get(day_totals))
}

#[instrument(skip(state))]
pub async fn list_meals(
    State(state): State<AppState>,
    Query(q): Query<MealQuery>,
) -> Json<Vec<Meal>> {
    let meals = match (q.date, q.meal_type) {
        (None, None) => state.meals.all(),
        (Some(date), None) => state.meals.by_date(date),
        (None, Some(t)) => state.meals.by_meal_type(t),
        (date, meal_type) => state.meals.query(date, meal_type),
    };
    Json(meals)
}

#[instrument(skip(state, payload))]
pub async fn add_meal(
    State(state): State<AppState>,
    Json(payload): Json<NewMealRequest>,
) -> (StatusCode, Json<Meal>) {
    let meal = Meal {
        id: Uuid::new_v4(),
        name: payload.name,
        food_type: payload.food_type,
        meal_type: payload.meal_type,
        date: payload.date.unwrap_or_else(today),
        macros: payload.macros,
    };
    state.meals.add(meal.clone());
    info!(meal_id = %meal.id, "meal logged");
    (StatusCode::CREATED, Json(meal))
}

#[instrument(skip(state))]
pub async fn meals_by_day(State(state): State<AppState>) -> Json<Vec<MealDay>> {
    let days = state
        .meals
        .grouped_by_day()
        .into_iter()
        .map(|(date, meals)| MealDay {
            date,
            totals: meals.iter().map(|m| m.macros).sum(),
            meals,
        })
        .collect();
    Json(days)
}

#[instrument(skip(state))]
pub async fn day_totals(
    State(state): State<AppState>,
    Query(q): Query<DayQuery>,
) -> Json<Macros> {
    Json(state.meals.day_totals(q.date))
}
