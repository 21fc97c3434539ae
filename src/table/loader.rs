use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use tracing::{debug, info};

use crate::error::{PlateError, Result};
use crate::models::{DEFAULT_REFERENCE_MASS, FoodRecord, Nutrient, Nutrients};

/// One CSV row as written by the composition-table converter.
#[derive(Debug, Deserialize)]
struct FoodRow {
    name: String,

    #[serde(default, alias = "alias")]
    kana: Option<String>,

    #[serde(
        default = "default_reference_mass",
        alias = "reference_mass",
        deserialize_with = "reference_mass_cell"
    )]
    per: f64,

    #[serde(default, alias = "kcal", deserialize_with = "nutrient_cell")]
    energy_kcal: f64,
    #[serde(default, alias = "protein", deserialize_with = "nutrient_cell")]
    protein_g: f64,
    #[serde(default, alias = "fat", deserialize_with = "nutrient_cell")]
    fat_g: f64,
    #[serde(default, alias = "carbs", deserialize_with = "nutrient_cell")]
    carbs_g: f64,
    #[serde(default, alias = "fiber", deserialize_with = "nutrient_cell")]
    fiber_g: f64,
    #[serde(default, rename = "vitA_ug", alias = "vitA", deserialize_with = "nutrient_cell")]
    vit_a_ug: f64,
    #[serde(default, rename = "vitB1_mg", alias = "vitB1", deserialize_with = "nutrient_cell")]
    vit_b1_mg: f64,
    #[serde(default, rename = "vitB2_mg", alias = "vitB2", deserialize_with = "nutrient_cell")]
    vit_b2_mg: f64,
    #[serde(default, rename = "vitC_mg", alias = "vitC", deserialize_with = "nutrient_cell")]
    vit_c_mg: f64,
}

/// Non-nutrient columns a table may carry.
const RECORD_COLUMNS: [&str; 5] = ["name", "kana", "alias", "per", "reference_mass"];

/// Whether `header` names a nutrient, by CSV column or by report key.
fn is_nutrient_column(header: &str) -> bool {
    Nutrient::ALL
        .iter()
        .any(|n| header == n.column() || header == n.key())
}

/// Reject headers that would make columns read as zero without notice.
///
/// Every header must be known, `name` must be present, and at least one
/// nutrient column must be present.
fn check_headers(headers: &csv::StringRecord) -> Result<()> {
    if let Some(unknown) = headers
        .iter()
        .find(|h| !RECORD_COLUMNS.contains(h) && !is_nutrient_column(h))
    {
        return Err(PlateError::InvalidInput(format!(
            "unknown column in reference table: '{}'",
            unknown
        )));
    }
    if !headers.iter().any(|h| h == "name") {
        return Err(PlateError::InvalidInput(
            "reference table has no 'name' column".to_string(),
        ));
    }
    if !headers.iter().any(is_nutrient_column) {
        return Err(PlateError::InvalidInput(
            "reference table has no nutrient columns".to_string(),
        ));
    }
    Ok(())
}

impl FoodRow {
    fn into_record(self) -> FoodRecord {
        let name = self.name.trim().to_string();
        let alias = self
            .kana
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .unwrap_or_else(|| name.clone());

        FoodRecord {
            name,
            alias,
            reference_mass: self.per,
            nutrients: Nutrients {
                energy: self.energy_kcal,
                protein: self.protein_g,
                fat: self.fat_g,
                carbohydrate: self.carbs_g,
                fiber: self.fiber_g,
                vitamin_a: self.vit_a_ug,
                vitamin_b1: self.vit_b1_mg,
                vitamin_b2: self.vit_b2_mg,
                vitamin_c: self.vit_c_mg,
            },
        }
    }
}

fn default_reference_mass() -> f64 {
    DEFAULT_REFERENCE_MASS
}

fn nutrient_cell<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<f64, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().map(coerce_cell).unwrap_or(0.0))
}

fn reference_mass_cell<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<f64, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(match raw.as_deref().map(str::trim) {
        None | Some("") => DEFAULT_REFERENCE_MASS,
        Some(cell) => coerce_cell(cell),
    })
}

/// Coerce a composition-table cell to a number.
///
/// Blank and `-` (not measured) read as 0, `Tr` (trace) reads as 0,
/// parenthesized estimates like `(40.5)` read as their value. Anything else
/// that is not part of a number is dropped; if nothing usable remains the
/// cell reads as 0.
pub fn coerce_cell(cell: &str) -> f64 {
    let cell = cell.trim();
    if cell.is_empty() || cell == "-" {
        return 0.0;
    }

    let cell = cell.replace("Tr", "0").replace("tr", "0");
    let digits: String = cell
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    if digits.is_empty() || digits == "." {
        return 0.0;
    }
    digits.parse().unwrap_or(0.0)
}

/// Read reference records from CSV with a header row.
///
/// Nutrient columns may use either the converter's headers (`energy_kcal`,
/// `protein_g`, ...) or the report keys (`kcal`, `protein`, ...). Row order is
/// preserved and duplicate names are kept.
pub fn read_foods<R: Read>(reader: R) -> Result<Vec<FoodRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    check_headers(rdr.headers()?)?;

    let mut records = Vec::new();
    for (i, row) in rdr.deserialize::<FoodRow>().enumerate() {
        let row_number = i + 1;
        let record = row?.into_record();
        record
            .validate()
            .map_err(|reason| PlateError::InvalidRecord {
                row: row_number,
                reason,
            })?;
        debug!(row = row_number, food = %record.debug_string(), "loaded food");
        records.push(record);
    }

    Ok(records)
}

/// Load reference records from a CSV file.
pub fn load_foods<P: AsRef<Path>>(path: P) -> Result<Vec<FoodRecord>> {
    let path = path.as_ref();
    let records = read_foods(File::open(path)?)?;
    info!(path = %path.display(), count = records.len(), "loaded reference table");
    Ok(records)
}
