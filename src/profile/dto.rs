use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::nutrition::{FoodType, Macros};

#[derive(Debug, Deserialize)]
pub struct SafeModeRequest {
    pub enabled: bool,
}

/// Either a food from the catalog or one typed in by hand.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AddFoodRequest {
    Catalog {
        food_id: Uuid,
    },
    Custom {
        name: String,
        food_type: FoodType,
        macros: Macros,
    },
}

/// Daily numbers for the home screen. With safe mode on every numeric
/// field is `None`.
#[derive(Debug, Serialize)]
pub struct ProfileSummary {
    pub safe_mode: bool,
    pub goals: Option<Macros>,
    pub totals: Option<Macros>,
    pub remaining: Option<Macros>,
    pub breakfast: Option<Macros>,
    pub lunch: Option<Macros>,
    pub dinner: Option<Macros>,
}
