use serde::Deserialize;

use crate::nutrition::{FoodType, Macros};

#[derive(Debug, Deserialize)]
pub struct NewFoodRequest {
    pub name: String,
    pub food_type: FoodType,
    pub macros: Macros,
}

#[derive(Debug, Default, Deserialize)]
pub struct FoodQuery {
    #[serde(default)]
    pub q: String,
    pub food_type: Option<FoodType>,
}
