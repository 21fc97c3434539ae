use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

use crate::models::Nutrients;

/// A (food name, grams) pair awaiting aggregation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedEntry {
    /// Exact `FoodRecord::name` this entry resolves to.
    pub name: String,

    /// Mass eaten, in grams.
    pub grams: f64,
}

impl SelectedEntry {
    pub fn new(name: impl Into<String>, grams: f64) -> Self {
        Self {
            name: name.into(),
            grams,
        }
    }
}

/// Scaled nutrient breakdown for one entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailRecord {
    pub name: String,
    pub grams: f64,
    #[serde(flatten)]
    pub nutrients: Nutrients,
}

/// Summed nutrients across entries.
pub type NutrientTotals = Nutrients;

/// Which meal a session is recording. Only a label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    #[default]
    Dinner,
    Snack,
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        };
        f.write_str(label)
    }
}
