use std::collections::BTreeMap;
use std::sync::Arc;

use time::Date;
use tracing::debug;

use super::repo_types::{Meal, MealType};
use crate::nutrition::Macros;
use crate::store::Store;

#[derive(Clone, Default)]
pub struct MealRepository {
    meals: Arc<Store<Vec<Meal>>>,
}

impl MealRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> Vec<Meal> {
        self.meals.get()
    }

    pub fn add(&self, meal: Meal) {
        debug!(meal_id = %meal.id, date = %meal.date, meal_type = ?meal.meal_type, "meal logged");
        self.meals.update(|cur| {
            let mut next = cur.clone();
            next.push(meal);
            (next, ())
        });
    }

    /// Meals matching every filter that is set, in logging order.
    pub fn query(&self, date: Option<Date>, meal_type: Option<MealType>) -> Vec<Meal> {
        self.meals.with(|v| {
            v.iter()
                .filter(|m| date.map_or(true, |d| m.date == d))
                .filter(|m| meal_type.map_or(true, |t| m.meal_type == t))
                .cloned()
                .collect()
        })
    }

    pub fn by_date(&self, date: Date) -> Vec<Meal> {
        self.query(Some(date), None)
    }

    pub fn by_meal_type(&self, meal_type: MealType) -> Vec<Meal> {
        self.query(None, Some(meal_type))
    }

    /// Days in ascending order; meals within a day keep logging order.
    pub fn grouped_by_day(&self) -> BTreeMap<Date, Vec<Meal>> {
        self.meals.with(|v| {
            let mut days: BTreeMap<Date, Vec<Meal>> = BTreeMap::new();
            for m in v {
                days.entry(m.date).or_default().push(m.clone());
            }
            days
        })
    }

    pub fn day_totals(&self, date: Date) -> Macros {
        self.meals.with(|v| {
            v.iter()
                .filter(|m| m.date == date)
                .map(|m| m.macros)
                .sum()
        })
    }
}
