use serde::Serialize;

use crate::models::Nutrients;

/// Default reference mass (grams) that nutrient values are stated against.
pub const DEFAULT_REFERENCE_MASS: f64 = 100.0;

/// A row of the reference table: nutrient amounts for `reference_mass` grams
/// of one food.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodRecord {
    /// Display name, also the key entries resolve against.
    pub name: String,

    /// Alternate (reading/phonetic) name, searched alongside `name`.
    pub alias: String,

    /// Grams the nutrient values are normalized to.
    pub reference_mass: f64,

    pub nutrients: Nutrients,
}

impl FoodRecord {
    /// Record with `alias == name` and the default 100 g reference mass.
    pub fn new(name: impl Into<String>, nutrients: Nutrients) -> Self {
        let name = name.into();
        Self {
            alias: name.clone(),
            name,
            reference_mass: DEFAULT_REFERENCE_MASS,
            nutrients,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }

    pub fn with_reference_mass(mut self, grams: f64) -> Self {
        self.reference_mass = grams;
        self
    }

    /// Case-insensitive substring match on name or alias.
    ///
    /// `needle_lower` must already be lowercased.
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self.alias.to_lowercase().contains(needle_lower)
    }

    /// Scale factor from the reference mass to `grams`.
    #[inline]
    pub fn ratio_for(&self, grams: f64) -> f64 {
        grams / self.reference_mass
    }

    /// Nutrients contained in `grams` of this food.
    pub fn nutrients_for(&self, grams: f64) -> Nutrients {
        self.nutrients.scaled(self.ratio_for(grams))
    }

    /// Check the loading invariants: non-blank name, positive reference mass,
    /// finite non-negative nutrients.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name is blank".to_string());
        }
        if !self.reference_mass.is_finite() || self.reference_mass <= 0.0 {
            return Err(format!(
                "reference mass must be positive, got {}",
                self.reference_mass
            ));
        }
        for (nutrient, value) in self.nutrients.iter() {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{} must be non-negative, got {}", nutrient, value));
            }
        }
        Ok(())
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} ({}) per {}g: {} kcal, P:{} F:{} C:{}",
            self.name,
            self.alias,
            self.reference_mass,
            self.nutrients.energy,
            self.nutrients.protein,
            self.nutrients.fat,
            self.nutrients.carbohydrate
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sweet_potato() -> FoodRecord {
        FoodRecord::new(
            "Sweet Potato",
            Nutrients {
                energy: 134.0,
                protein: 1.2,
                ..Nutrients::zero()
            },
        )
        .with_alias("satsumaimo")
    }

    #[test]
    fn test_matches_name_and_alias_case_insensitive() {
        let food = sweet_potato();
        assert!(food.matches("sweet"));
        assert!(food.matches("potato"));
        assert!(food.matches("satsu"));
        assert!(!food.matches("rice"));
    }

    #[test]
    fn test_nutrients_for_scales_by_reference_mass() {
        let food = sweet_potato().with_reference_mass(50.0);
        let n = food.nutrients_for(100.0);
        assert!((n.energy - 268.0).abs() < 1e-9);
    }

    #[test]
    fn test_validate() {
        assert!(sweet_potato().validate().is_ok());
        assert!(sweet_potato().with_reference_mass(0.0).validate().is_err());

        let mut negative = sweet_potato();
        negative.nutrients.fat = -1.0;
        assert!(negative.validate().is_err());

        let blank = FoodRecord::new("  ", Nutrients::zero());
        assert!(blank.validate().is_err());
    }
}
