mod entry;
mod food;
mod nutrients;

pub use entry::{DetailRecord, MealType, NutrientTotals, SelectedEntry};
pub use food::{DEFAULT_REFERENCE_MASS, FoodRecord};
pub use nutrients::{Nutrient, Nutrients};
