use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use tracing::{instrument, warn};
use uuid::Uuid;

use super::dto::{AddFoodRequest, ProfileSummary, SafeModeRequest};
use super::repo_types::{DietaryPreferences, MealSlot, PersonalData, UserGoals, UserProfile};
use crate::foods::repo_types::Food;
use crate::nutrition::Macros;
use crate::state::AppState;

pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(get_profile))
        .route("/profile/summary", get(get_summary))
        .route("/profile/personal-data", put(put_personal_data))
        .route("/profile/dietary-preferences", put(put_dietary_preferences))
        .route("/profile/goals", put(put_goals))
        .route("/profile/nutrition-goals", put(put_nutrition_goals))
        .route("/profile/safe-mode", put(put_safe_mode))
        .route("/profile/meals/:slot", post(add_food).delete(clear_slot))
        .route("/profile/meals/:slot/:food_id", delete(remove_food))
}

#[instrument(skip(state))]
pub async fn get_profile(State(state): State<AppState>) -> Json<UserProfile> {
    Json(state.profile.get())
}

#[instrument(skip(state))]
pub async fn get_summary(State(state): State<AppState>) -> Json<ProfileSummary> {
    Json(summarize(&state.profile.get()))
}

fn summarize(p: &UserProfile) -> ProfileSummary {
    let shown = |m: Macros| (!p.safe_mode).then_some(m);
    ProfileSummary {
        safe_mode: p.safe_mode,
        goals: shown(p.nutrition_goals),
        totals: shown(p.current_totals()),
        remaining: shown(p.remaining()),
        breakfast: shown(p.slot_totals(MealSlot::Breakfast)),
        lunch: shown(p.slot_totals(MealSlot::Lunch)),
        dinner: shown(p.slot_totals(MealSlot::Dinner)),
    }
}

#[instrument(skip(state, payload))]
pub async fn put_personal_data(
    State(state): State<AppState>,
    Json(payload): Json<PersonalData>,
) -> Json<UserProfile> {
    state.profile.update_personal_data(payload);
    Json(state.profile.get())
}

#[instrument(skip(state, payload))]
pub async fn put_dietary_preferences(
    State(state): State<AppState>,
    Json(payload): Json<DietaryPreferences>,
) -> Json<UserProfile> {
    state.profile.update_dietary_preferences(payload);
    Json(state.profile.get())
}

#[instrument(skip(state, payload))]
pub async fn put_goals(
    State(state): State<AppState>,
    Json(payload): Json<UserGoals>,
) -> Json<UserProfile> {
    state.profile.update_goals(payload);
    Json(state.profile.get())
}

#[instrument(skip(state))]
pub async fn put_nutrition_goals(
    State(state): State<AppState>,
    Json(payload): Json<Macros>,
) -> Json<UserProfile> {
    state.profile.update_nutrition_goals(payload);
    Json(state.profile.get())
}

#[instrument(skip(state))]
pub async fn put_safe_mode(
    State(state): State<AppState>,
    Json(payload): Json<SafeModeRequest>,
) -> Json<ProfileSummary> {
    state.profile.set_safe_mode(payload.enabled);
    Json(summarize(&state.profile.get()))
}

#[instrument(skip(state, payload))]
pub async fn add_food(
    State(state): State<AppState>,
    Path(slot): Path<MealSlot>,
    Json(payload): Json<AddFoodRequest>,
) -> Result<(StatusCode, Json<Food>), (StatusCode, String)> {
    let food = match payload {
        AddFoodRequest::Catalog { food_id } => state.foods.get(food_id).ok_or_else(|| {
            warn!(%food_id, "unknown food");
            (StatusCode::NOT_FOUND, "Food not found".to_string())
        })?,
        AddFoodRequest::Custom {
            name,
            food_type,
            macros,
        } => Food::new(name, food_type, macros),
    };
    state.profile.add_food(slot, food.clone());
    Ok((StatusCode::CREATED, Json(food)))
}

#[instrument(skip(state))]
pub async fn clear_slot(State(state): State<AppState>, Path(slot): Path<MealSlot>) -> StatusCode {
    state.profile.clear_slot(slot);
    StatusCode::NO_CONTENT
}

#[instrument(skip(state))]
pub async fn remove_food(
    State(state): State<AppState>,
    Path((slot, food_id)): Path<(MealSlot, Uuid)>,
) -> Result<StatusCode, (StatusCode, String)> {
    if state.profile.remove_food(slot, food_id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((StatusCode::NOT_FOUND, "Food not in this meal".into()))
    }
}
