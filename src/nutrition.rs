use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Diet a food or meal fits into.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FoodType {
    Omnivore,
    Vegetarian,
    Vegan,
}

/// Calories (kcal) and macronutrient grams. Always non-negative and finite.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "RawMacros")]
pub struct Macros {
    calories: f64,
    carbs: f64,
    protein: f64,
    fat: f64,
}

#[derive(Deserialize)]
struct RawMacros {
    calories: f64,
    carbs: f64,
    protein: f64,
    fat: f64,
}

impl TryFrom<RawMacros> for Macros {
    type Error = ModelError;

    fn try_from(r: RawMacros) -> Result<Self, Self::Error> {
        Macros::new(r.calories, r.carbs, r.protein, r.fat)
    }
}

fn check(field: &'static str, value: f64) -> Result<f64, ModelError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ModelError::InvalidMacro { field, value })
    }
}

impl Macros {
    pub const ZERO: Macros = Macros {
        calories: 0.0,
        carbs: 0.0,
        protein: 0.0,
        fat: 0.0,
    };

    /// Generic 2000 kcal adult reference intake.
    pub const DAILY_REFERENCE: Macros = Macros {
        calories: 2000.0,
        carbs: 250.0,
        protein: 100.0,
        fat: 70.0,
    };

    pub fn new(calories: f64, carbs: f64, protein: f64, fat: f64) -> Result<Self, ModelError> {
        Ok(Self {
            calories: check("calories", calories)?,
            carbs: check("carbs", carbs)?,
            protein: check("protein", protein)?,
            fat: check("fat", fat)?,
        })
    }

    pub fn calories(&self) -> f64 {
        self.calories
    }

    pub fn carbs(&self) -> f64 {
        self.carbs
    }

    pub fn protein(&self) -> f64 {
        self.protein
    }

    pub fn fat(&self) -> f64 {
        self.fat
    }

    /// Field-wise `self - other`, floored at zero.
    pub fn saturating_sub(self, other: Macros) -> Macros {
        Macros {
            calories: (self.calories - other.calories).max(0.0),
            carbs: (self.carbs - other.carbs).max(0.0),
            protein: (self.protein - other.protein).max(0.0),
            fat: (self.fat - other.fat).max(0.0),
        }
    }
}

// Saturates at f64::MAX so a total never turns into inf.
impl Add for Macros {
    type Output = Macros;

    fn add(self, rhs: Macros) -> Macros {
        Macros {
            calories: (self.calories + rhs.calories).min(f64::MAX),
            carbs: (self.carbs + rhs.carbs).min(f64::MAX),
            protein: (self.protein + rhs.protein).min(f64::MAX),
            fat: (self.fat + rhs.fat).min(f64::MAX),
        }
    }
}

impl Sum for Macros {
    fn sum<I: Iterator<Item = Macros>>(iter: I) -> Macros {
        iter.fold(Macros::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Macros> for Macros {
    fn sum<I: Iterator<Item = &'a Macros>>(iter: I) -> Macros {
        iter.copied().sum()
    }
}
