use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;
use uuid::Uuid;

use super::repo_types::{DietaryPreferences, MealSlot, PersonalData, UserGoals, UserProfile};
use crate::foods::repo_types::Food;
use crate::nutrition::Macros;
use crate::store::Store;

#[derive(Clone, Default)]
pub struct ProfileRepository {
    profile: Arc<Store<UserProfile>>,
}

impl ProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> UserProfile {
        self.profile.get()
    }

    /// Wakes on every profile change; the receiver starts at the current value.
    pub fn watch(&self) -> watch::Receiver<UserProfile> {
        self.profile.subscribe()
    }

    fn edit<R>(&self, f: impl FnOnce(&mut UserProfile) -> R) -> R {
        self.profile.update(|cur| {
            let mut next = cur.clone();
            let r = f(&mut next);
            (next, r)
        })
    }

    pub fn update_personal_data(&self, data: PersonalData) {
        self.edit(|p| p.personal_data = data);
        debug!("personal data updated");
    }

    pub fn update_dietary_preferences(&self, prefs: DietaryPreferences) {
        self.edit(|p| p.dietary_preferences = prefs);
        debug!("dietary preferences updated");
    }

    pub fn update_goals(&self, goals: UserGoals) {
        self.edit(|p| p.goals = goals);
        debug!("goals updated");
    }

    pub fn update_nutrition_goals(&self, goals: Macros) {
        self.edit(|p| p.nutrition_goals = goals);
        debug!(calories = goals.calories(), "nutrition goals updated");
    }

    pub fn set_safe_mode(&self, enabled: bool) {
        self.edit(|p| p.safe_mode = enabled);
        debug!(enabled, "safe mode toggled");
    }

    pub fn add_food(&self, slot: MealSlot, food: Food) {
        debug!(?slot, food_id = %food.id, "food added to slot");
        self.edit(|p| p.slot_mut(slot).push(food));
    }

    /// Removes the first food with `food_id` from the slot.
    pub fn remove_food(&self, slot: MealSlot, food_id: Uuid) -> bool {
        self.edit(|p| {
            let foods = p.slot_mut(slot);
            match foods.iter().position(|f| f.id == food_id) {
                Some(i) => {
                    foods.remove(i);
                    true
                }
                None => false,
            }
        })
    }

    pub fn clear_slot(&self, slot: MealSlot) {
        self.edit(|p| p.slot_mut(slot).clear());
    }
}
