use crate::error::{PlateError, Result};
use crate::models::{MealType, SelectedEntry};
use crate::table::FoodTable;
use crate::tracker::MealReport;

/// The foods selected during one run.
///
/// Append-only plus clear-all; editing an entry means clearing and adding
/// again. The caller owns the session and dropping it discards it.
#[derive(Debug, Clone, Default)]
pub struct Session {
    meal: MealType,
    entries: Vec<SelectedEntry>,
}

impl Session {
    pub fn new(meal: MealType) -> Self {
        Self {
            meal,
            entries: Vec::new(),
        }
    }

    pub fn meal(&self) -> MealType {
        self.meal
    }

    /// Append one entry.
    ///
    /// The name must be an exact table name and grams must be positive.
    pub fn add(&mut self, table: &FoodTable, name: &str, grams: f64) -> Result<()> {
        if !grams.is_finite() || grams <= 0.0 {
            return Err(PlateError::InvalidInput(format!(
                "grams must be positive, got {}",
                grams
            )));
        }
        if !table.contains(name) {
            return Err(PlateError::FoodNotFound(name.to_string()));
        }

        self.entries.push(SelectedEntry::new(name, grams));
        Ok(())
    }

    /// Append several entries, stopping at the first invalid one.
    ///
    /// Entries before the invalid one stay added. Returns how many were added.
    pub fn extend<'a, I>(&mut self, table: &FoodTable, entries: I) -> Result<usize>
    where
        I: IntoIterator<Item = &'a SelectedEntry>,
    {
        let mut added = 0;
        for entry in entries {
            self.add(table, &entry.name, entry.grams)?;
            added += 1;
        }
        Ok(added)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[SelectedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Aggregate the current selection.
    pub fn totals(&self, table: &FoodTable) -> Result<MealReport> {
        MealReport::build(self.meal, &self.entries, table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FoodRecord, Nutrients};

    fn sample_table() -> FoodTable {
        FoodTable::from_records(vec![
            FoodRecord::new(
                "rice",
                Nutrients {
                    energy: 168.0,
                    ..Nutrients::zero()
                },
            ),
            FoodRecord::new(
                "natto",
                Nutrients {
                    energy: 190.0,
                    ..Nutrients::zero()
                },
            ),
        ])
    }

    #[test]
    fn test_add_and_clear() {
        let table = sample_table();
        let mut session = Session::new(MealType::Breakfast);
        assert!(session.is_empty());

        session.add(&table, "rice", 150.0).unwrap();
        session.add(&table, "natto", 40.0).unwrap();
        assert_eq!(session.len(), 2);
        assert_eq!(session.entries()[1], SelectedEntry::new("natto", 40.0));

        session.clear();
        assert!(session.is_empty());
        assert_eq!(session.meal(), MealType::Breakfast);
    }

    #[test]
    fn test_add_rejects_bad_grams() {
        let table = sample_table();
        let mut session = Session::default();
        assert!(matches!(
            session.add(&table, "rice", 0.0),
            Err(PlateError::InvalidInput(_))
        ));
        assert!(session.add(&table, "rice", -5.0).is_err());
        assert!(session.add(&table, "rice", f64::NAN).is_err());
        assert!(session.is_empty());
    }

    #[test]
    fn test_add_rejects_unknown_name() {
        let table = sample_table();
        let mut session = Session::default();
        assert!(matches!(
            session.add(&table, "Rice", 100.0),
            Err(PlateError::FoodNotFound(_))
        ));
    }

    #[test]
    fn test_extend_and_totals() {
        let table = sample_table();
        let mut session = Session::new(MealType::Dinner);
        let entries = vec![
            SelectedEntry::new("rice", 150.0),
            SelectedEntry::new("natto", 50.0),
        ];
        assert_eq!(session.extend(&table, &entries).unwrap(), 2);

        let report = session.totals(&table).unwrap();
        assert_eq!(report.details.len(), 2);
        assert!((report.totals.energy - (252.0 + 95.0)).abs() < 1e-9);
    }
}
