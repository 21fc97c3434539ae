pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod session;
pub mod table;
pub mod tracker;

pub use config::Config;
pub use error::{PlateError, Result};
pub use models::{DetailRecord, FoodRecord, MealType, Nutrient, NutrientTotals, Nutrients, SelectedEntry};
pub use session::Session;
pub use table::FoodTable;
pub use tracker::{MealReport, NoMatchPolicy, ParseOptions, compute_totals, parse_free_text, search};
