//! Food catalog, values per 100g

use crate::models::FoodItem;

const fn food(name: &'static str, calories: f64, protein: f64, carbs: f64, fats: f64) -> FoodItem {
    FoodItem { name, calories, protein, carbs, fats }
}

pub const FOOD_DATABASE: &[FoodItem] = &[
    food("Chicken Breast", 165.0, 31.0, 0.0, 3.6),
    food("Turkey Breast", 135.0, 30.0, 0.0, 1.0),
    food("Lean Beef", 250.0, 26.0, 0.0, 15.0),
    food("Salmon", 208.0, 20.0, 0.0, 13.0),
    food("Tuna", 132.0, 28.0, 0.0, 1.3),
    food("Egg", 155.0, 13.0, 1.1, 11.0),
    food("Greek Yogurt", 59.0, 10.0, 3.6, 0.4),
    food("Cottage Cheese", 98.0, 11.1, 3.4, 4.3),
    food("Whey Protein", 400.0, 80.0, 8.0, 6.0),
    food("Oatmeal", 389.0, 16.9, 66.3, 6.9),
    food("Brown Rice", 111.0, 2.6, 23.0, 0.9),
    food("White Rice", 130.0, 2.7, 28.0, 0.3),
    food("Quinoa", 120.0, 4.4, 21.3, 1.9),
    food("Sweet Potato", 86.0, 1.6, 20.1, 0.1),
    food("Banana", 89.0, 1.1, 22.8, 0.3),
    food("Blueberries", 57.0, 0.7, 14.5, 0.3),
    food("Broccoli", 34.0, 2.8, 6.6, 0.4),
    food("Spinach", 23.0, 2.9, 3.6, 0.4),
    food("Avocado", 160.0, 2.0, 8.5, 14.7),
    food("Almonds", 579.0, 21.2, 21.6, 49.9),
    food("Peanut Butter", 588.0, 25.0, 20.0, 50.0),
    food("Olive Oil", 884.0, 0.0, 0.0, 100.0),
];

/// Exact-name lookup
pub fn find_food(name: &str) -> Option<&'static FoodItem> {
    FOOD_DATABASE.iter().find(|f| f.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_food() {
        let chicken = find_food("Chicken Breast").unwrap();
        assert_eq!(chicken.protein, 31.0);
        assert!(find_food("Pizza").is_none());
    }
}
