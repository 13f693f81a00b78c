use serde::{Deserialize, Serialize};
use time::Date;

use super::repo_types::{Meal, MealType};
use crate::nutrition::{FoodType, Macros};

#[derive(Debug, Deserialize)]
pub struct NewMealRequest {
    pub name: String,
    pub food_type: FoodType,
    pub meal_type: MealType,
    /// Defaults to today.
    pub date: Option<Date>,
    pub macros: Macros,
}

#[derive(Debug, Default, Deserialize)]
pub struct MealQuery {
    pub date: Option<Date>,
    pub meal_type: Option<MealType>,
}

#[derive(Debug, Deserialize)]
pub struct DayQuery {
    pub date: Date,
}

#[derive(Debug, Serialize)]
pub struct MealDay {
    pub date: Date,
    pub meals: Vec<Meal>,
    pub totals: Macros,
}
