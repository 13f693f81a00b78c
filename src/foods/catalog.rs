use crate::nutrition::{FoodType, Macros};

use super::repo_types::Food;

// name, type, kcal, carbs, protein, fat (per serving)
const SAMPLE_FOODS: &[(&str, FoodType, f64, f64, f64, f64)] = &[
    ("Oatmeal", FoodType::Vegan, 150.0, 27.0, 5.0, 3.0),
    ("Banana", FoodType::Vegan, 105.0, 27.0, 1.3, 0.4),
    ("Apple", FoodType::Vegan, 95.0, 25.0, 0.5, 0.3),
    ("Greek Yogurt", FoodType::Vegetarian, 130.0, 9.0, 17.0, 4.0),
    ("Scrambled Eggs", FoodType::Vegetarian, 200.0, 2.0, 14.0, 15.0),
    ("Avocado Toast", FoodType::Vegan, 290.0, 30.0, 7.0, 17.0),
    ("Chicken Breast", FoodType::Omnivore, 165.0, 0.0, 31.0, 3.6),
    ("Grilled Salmon", FoodType::Omnivore, 280.0, 0.0, 39.0, 13.0),
    ("Beef Burger", FoodType::Omnivore, 354.0, 29.0, 20.0, 17.0),
    ("Brown Rice", FoodType::Vegan, 216.0, 45.0, 5.0, 1.8),
    ("Lentil Soup", FoodType::Vegan, 230.0, 40.0, 18.0, 0.8),
    ("Tofu Stir Fry", FoodType::Vegan, 250.0, 15.0, 18.0, 14.0),
    ("Caesar Salad", FoodType::Omnivore, 190.0, 8.0, 9.0, 14.0),
    ("Cheese Pizza", FoodType::Vegetarian, 285.0, 36.0, 12.0, 10.0),
    ("Pasta Primavera", FoodType::Vegetarian, 320.0, 52.0, 11.0, 8.0),
    ("Almonds", FoodType::Vegan, 164.0, 6.0, 6.0, 14.0),
];

/// Placeholder foods the app starts with. Rows that fail macro validation
/// are skipped.
pub fn sample_foods() -> Vec<Food> {
    SAMPLE_FOODS
        .iter()
        .filter_map(|&(name, food_type, calories, carbs, protein, fat)| {
            let macros = Macros::new(calories, carbs, protein, fat).ok()?;
            Some(Food::new(name, food_type, macros))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_row_is_valid() {
        let foods = sample_foods();
        assert_eq!(foods.len(), SAMPLE_FOODS.len());
        let names: Vec<_> = foods.iter().map(|f| f.name.as_str()).collect();
        let expected: Vec<_> = SAMPLE_FOODS.iter().map(|r| r.0).collect();
        assert_eq!(names, expected);
    }
}
