use serde::Serialize;
use tracing::debug;

use crate::error::{PlateError, Result};
use crate::models::{DetailRecord, MealType, NutrientTotals, SelectedEntry};
use crate::table::FoodTable;

/// Scale every entry against its reference record and sum the results.
///
/// Entries resolve by exact name (first row wins). Totals start at zero and
/// are accumulated in input order without rounding. An entry whose name is
/// not in the table fails the whole computation with `FoodNotFound`.
pub fn compute_totals(
    entries: &[SelectedEntry],
    table: &FoodTable,
) -> Result<(NutrientTotals, Vec<DetailRecord>)> {
    let mut totals = NutrientTotals::zero();
    let mut details = Vec::with_capacity(entries.len());

    for entry in entries {
        let record = table
            .get(&entry.name)
            .ok_or_else(|| PlateError::FoodNotFound(entry.name.clone()))?;

        let scaled = record.nutrients_for(entry.grams);
        totals += scaled;

        debug!(
            food = %entry.name,
            grams = entry.grams,
            ratio = record.ratio_for(entry.grams),
            kcal = scaled.energy,
            "scaled entry"
        );

        details.push(DetailRecord {
            name: entry.name.clone(),
            grams: entry.grams,
            nutrients: scaled,
        });
    }

    Ok((totals, details))
}

/// Totals and per-item breakdown for one meal, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealReport {
    pub meal: MealType,
    pub totals: NutrientTotals,
    pub details: Vec<DetailRecord>,
}

impl MealReport {
    pub fn build(meal: MealType, entries: &[SelectedEntry], table: &FoodTable) -> Result<Self> {
        let (totals, details) = compute_totals(entries, table)?;
        Ok(Self {
            meal,
            totals,
            details,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FoodRecord, Nutrient, Nutrients};

    fn rice_table() -> FoodTable {
        FoodTable::from_records(vec![FoodRecord::new(
            "rice",
            Nutrients {
                energy: 168.0,
                protein: 2.5,
                ..Nutrients::zero()
            },
        )])
    }

    #[test]
    fn test_single_entry_scaling() {
        let table = rice_table();
        let (totals, details) = compute_totals(&[SelectedEntry::new("rice", 150.0)], &table).unwrap();

        assert_eq!(details.len(), 1);
        assert!((details[0].nutrients.energy - 252.0).abs() < 1e-9);
        assert!((totals.energy - 252.0).abs() < 1e-9);
        assert!((totals.protein - 3.75).abs() < 1e-9);
    }

    #[test]
    fn test_empty_entries_give_zero_totals() {
        let table = rice_table();
        let (totals, details) = compute_totals(&[], &table).unwrap();
        assert!(details.is_empty());
        for nutrient in Nutrient::ALL {
            assert_eq!(totals.get(nutrient), 0.0);
        }
    }

    #[test]
    fn test_unknown_food_fails() {
        let table = rice_table();
        let entries = [SelectedEntry::new("rice", 100.0), SelectedEntry::new("bread", 60.0)];
        let err = compute_totals(&entries, &table).unwrap_err();
        assert!(matches!(err, PlateError::FoodNotFound(ref name) if name == "bread"));
    }

    #[test]
    fn test_report_build() {
        let table = rice_table();
        let report =
            MealReport::build(MealType::Lunch, &[SelectedEntry::new("rice", 200.0)], &table).unwrap();
        assert_eq!(report.meal, MealType::Lunch);
        assert!(!report.is_empty());
        assert!((report.totals.energy - 336.0).abs() < 1e-9);
    }
}
