use serde::{Deserialize, Serialize};

use crate::foods::repo_types::Food;
use crate::nutrition::{FoodType, Macros};

// Free text straight from the onboarding form; never parsed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PersonalData {
    pub name: String,
    pub age: String,
    pub height: String,
    pub weight: String,
    pub gender: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DietaryPreferences {
    pub diet: Option<FoodType>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub dislikes: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserGoals {
    pub goal: String,
    pub activity_level: String,
    pub target_weight: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub personal_data: PersonalData,
    pub dietary_preferences: DietaryPreferences,
    pub goals: UserGoals,
    pub breakfast: Vec<Food>,
    pub lunch: Vec<Food>,
    pub dinner: Vec<Food>,
    pub nutrition_goals: Macros,
    /// Hide numeric nutrition data from summaries.
    pub safe_mode: bool,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            personal_data: PersonalData::default(),
            dietary_preferences: DietaryPreferences::default(),
            goals: UserGoals::default(),
            breakfast: Vec::new(),
            lunch: Vec::new(),
            dinner: Vec::new(),
            nutrition_goals: Macros::DAILY_REFERENCE,
            safe_mode: false,
        }
    }
}

impl UserProfile {
    pub fn slot(&self, slot: MealSlot) -> &[Food] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }

    pub fn slot_mut(&mut self, slot: MealSlot) -> &mut Vec<Food> {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
        }
    }

    pub fn slot_totals(&self, slot: MealSlot) -> Macros {
        self.slot(slot).iter().map(|f| f.macros).sum()
    }

    /// Everything eaten across breakfast, lunch and dinner.
    pub fn current_totals(&self) -> Macros {
        MealSlot::ALL.iter().map(|&s| self.slot_totals(s)).sum()
    }

    pub fn remaining(&self) -> Macros {
        self.nutrition_goals.saturating_sub(self.current_totals())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(kcal: f64, carbs: f64, protein: f64, fat: f64) -> Food {
        Food::new("f", FoodType::Vegan, Macros::new(kcal, carbs, protein, fat).unwrap())
    }

    #[test]
    fn empty_profile_totals_are_zero() {
        let p = UserProfile::default();
        assert_eq!(p.current_totals(), Macros::ZERO);
        assert_eq!(p.remaining(), Macros::DAILY_REFERENCE);
    }

    #[test]
    fn totals_sum_every_slot() {
        let mut p = UserProfile::default();
        p.breakfast = vec![food(100.0, 10.0, 1.0, 1.0), food(50.0, 5.0, 0.0, 0.5)];
        p.lunch = vec![food(400.0, 40.0, 20.0, 10.0)];
        p.dinner = vec![food(600.0, 60.0, 30.0, 20.0)];

        let t = p.current_totals();
        assert_eq!(t.calories(), 1150.0);
        assert_eq!(t.carbs(), 115.0);
        assert_eq!(t.protein(), 51.0);
        assert_eq!(t.fat(), 31.5);

        let per_slot: Macros = MealSlot::ALL.iter().map(|&s| p.slot_totals(s)).sum();
        assert_eq!(per_slot, t);
        assert_eq!(p.remaining().calories(), 850.0);
    }
}
