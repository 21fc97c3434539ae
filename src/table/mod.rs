mod loader;

use std::io::Read;
use std::path::Path;

use crate::error::Result;
use crate::models::FoodRecord;

pub use loader::{coerce_cell, load_foods, read_foods};

/// The read-only reference table, in file order.
///
/// Loaded once per process and only ever borrowed immutably, so it can be
/// shared freely between readers.
#[derive(Debug, Clone, Default)]
pub struct FoodTable {
    records: Vec<FoodRecord>,
}

impl FoodTable {
    pub fn from_records(records: Vec<FoodRecord>) -> Self {
        Self { records }
    }

    /// Load the table from a CSV file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::from_records(load_foods(path)?))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(Self::from_records(read_foods(reader)?))
    }

    /// Exact-name lookup. The first row wins when names repeat.
    pub fn get(&self, name: &str) -> Option<&FoodRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The first `limit` records in table order.
    pub fn head(&self, limit: usize) -> Vec<&FoodRecord> {
        self.records.iter().take(limit).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FoodRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
