use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::nutrition::{FoodType, Macros};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Food {
    pub id: Uuid,
    pub name: String,
    pub food_type: FoodType,
    pub macros: Macros,
}

impl Food {
    pub fn new(name: impl Into<String>, food_type: FoodType, macros: Macros) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            food_type,
            macros,
        }
    }

    /// Case-insensitive substring match; `needle` must already be lowercase.
    pub fn name_matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}
