use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use super::catalog::sample_foods;
use super::repo_types::Food;
use crate::nutrition::FoodType;
use crate::store::Store;

#[derive(Clone)]
pub struct FoodRepository {
    foods: Arc<Store<Vec<Food>>>,
}

impl FoodRepository {
    /// Repository pre-filled with the sample catalog.
    pub fn with_catalog() -> Self {
        Self::from_foods(sample_foods())
    }

    pub fn from_foods(foods: Vec<Food>) -> Self {
        Self {
            foods: Arc::new(Store::new(foods)),
        }
    }

    pub fn all(&self) -> Vec<Food> {
        self.foods.get()
    }

    pub fn add(&self, food: Food) {
        debug!(food_id = %food.id, name = %food.name, "food added");
        self.foods.update(|cur| {
            let mut next = cur.clone();
            next.push(food);
            (next, ())
        });
    }

    pub fn get(&self, id: Uuid) -> Option<Food> {
        self.foods.with(|v| v.iter().find(|f| f.id == id).cloned())
    }

    /// Case-insensitive substring match on the name. An empty query matches
    /// everything.
    pub fn search(&self, query: &str) -> Vec<Food> {
        let needle = query.to_lowercase();
        self.foods.with(|v| {
            v.iter()
                .filter(|f| f.name_matches(&needle))
                .cloned()
                .collect()
        })
    }

    pub fn by_type(&self, food_type: FoodType) -> Vec<Food> {
        self.foods.with(|v| {
            v.iter()
                .filter(|f| f.food_type == food_type)
                .cloned()
                .collect()
        })
    }
}
