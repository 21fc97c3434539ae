use std::fmt;
use std::ops::AddAssign;

use serde::Serialize;

/// The nutrients tracked for every food.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nutrient {
    Energy,
    Protein,
    Fat,
    Carbohydrate,
    Fiber,
    VitaminA,
    VitaminB1,
    VitaminB2,
    VitaminC,
}

impl Nutrient {
    /// Every nutrient in display order.
    pub const ALL: [Nutrient; 9] = [
        Nutrient::Energy,
        Nutrient::Protein,
        Nutrient::Fat,
        Nutrient::Carbohydrate,
        Nutrient::Fiber,
        Nutrient::VitaminA,
        Nutrient::VitaminB1,
        Nutrient::VitaminB2,
        Nutrient::VitaminC,
    ];

    /// Stable key used in reports and JSON output.
    pub fn key(self) -> &'static str {
        match self {
            Nutrient::Energy => "kcal",
            Nutrient::Protein => "protein",
            Nutrient::Fat => "fat",
            Nutrient::Carbohydrate => "carbs",
            Nutrient::Fiber => "fiber",
            Nutrient::VitaminA => "vitA",
            Nutrient::VitaminB1 => "vitB1",
            Nutrient::VitaminB2 => "vitB2",
            Nutrient::VitaminC => "vitC",
        }
    }

    /// Column header in the reference table CSV.
    pub fn column(self) -> &'static str {
        match self {
            Nutrient::Energy => "energy_kcal",
            Nutrient::Protein => "protein_g",
            Nutrient::Fat => "fat_g",
            Nutrient::Carbohydrate => "carbs_g",
            Nutrient::Fiber => "fiber_g",
            Nutrient::VitaminA => "vitA_ug",
            Nutrient::VitaminB1 => "vitB1_mg",
            Nutrient::VitaminB2 => "vitB2_mg",
            Nutrient::VitaminC => "vitC_mg",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Nutrient::Energy => "kcal",
            Nutrient::Protein | Nutrient::Fat | Nutrient::Carbohydrate | Nutrient::Fiber => "g",
            Nutrient::VitaminA => "µg",
            Nutrient::VitaminB1 | Nutrient::VitaminB2 | Nutrient::VitaminC => "mg",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Nutrient::Energy => "Energy",
            Nutrient::Protein => "Protein",
            Nutrient::Fat => "Fat",
            Nutrient::Carbohydrate => "Carbohydrate",
            Nutrient::Fiber => "Fiber",
            Nutrient::VitaminA => "Vitamin A",
            Nutrient::VitaminB1 => "Vitamin B1",
            Nutrient::VitaminB2 => "Vitamin B2",
            Nutrient::VitaminC => "Vitamin C",
        }
    }

    /// Decimal places used when presenting a value of this nutrient.
    pub fn display_precision(self) -> usize {
        match self {
            Nutrient::Energy | Nutrient::VitaminA | Nutrient::VitaminC => 0,
            Nutrient::VitaminB1 | Nutrient::VitaminB2 => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One amount per tracked nutrient.
///
/// Used for the stored per-reference-mass values of a food, for the scaled
/// values of a single entry, and for running totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Nutrients {
    #[serde(rename = "kcal")]
    pub energy: f64,
    pub protein: f64,
    pub fat: f64,
    #[serde(rename = "carbs")]
    pub carbohydrate: f64,
    pub fiber: f64,
    #[serde(rename = "vitA")]
    pub vitamin_a: f64,
    #[serde(rename = "vitB1")]
    pub vitamin_b1: f64,
    #[serde(rename = "vitB2")]
    pub vitamin_b2: f64,
    #[serde(rename = "vitC")]
    pub vitamin_c: f64,
}

impl Nutrients {
    /// All values zero.
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Energy => self.energy,
            Nutrient::Protein => self.protein,
            Nutrient::Fat => self.fat,
            Nutrient::Carbohydrate => self.carbohydrate,
            Nutrient::Fiber => self.fiber,
            Nutrient::VitaminA => self.vitamin_a,
            Nutrient::VitaminB1 => self.vitamin_b1,
            Nutrient::VitaminB2 => self.vitamin_b2,
            Nutrient::VitaminC => self.vitamin_c,
        }
    }

    pub fn set(&mut self, nutrient: Nutrient, value: f64) {
        let slot = match nutrient {
            Nutrient::Energy => &mut self.energy,
            Nutrient::Protein => &mut self.protein,
            Nutrient::Fat => &mut self.fat,
            Nutrient::Carbohydrate => &mut self.carbohydrate,
            Nutrient::Fiber => &mut self.fiber,
            Nutrient::VitaminA => &mut self.vitamin_a,
            Nutrient::VitaminB1 => &mut self.vitamin_b1,
            Nutrient::VitaminB2 => &mut self.vitamin_b2,
            Nutrient::VitaminC => &mut self.vitamin_c,
        };
        *slot = value;
    }

    /// Iterate `(nutrient, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        Nutrient::ALL.into_iter().map(move |n| (n, self.get(n)))
    }

    /// Every value multiplied by `ratio`.
    pub fn scaled(&self, ratio: f64) -> Self {
        let mut out = Self::zero();
        for (nutrient, value) in self.iter() {
            out.set(nutrient, value * ratio);
        }
        out
    }
}

impl AddAssign for Nutrients {
    fn add_assign(&mut self, rhs: Self) {
        for nutrient in Nutrient::ALL {
            self.set(nutrient, self.get(nutrient) + rhs.get(nutrient));
        }
    }
}

impl AddAssign<&Nutrients> for Nutrients {
    fn add_assign(&mut self, rhs: &Nutrients) {
        *self += *rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Nutrients {
        Nutrients {
            energy: 134.0,
            protein: 1.2,
            fat: 0.2,
            carbohydrate: 30.9,
            fiber: 2.2,
            vitamin_a: 3.0,
            vitamin_b1: 0.11,
            vitamin_b2: 0.04,
            vitamin_c: 29.0,
        }
    }

    #[test]
    fn test_zero_is_all_zero() {
        assert!(Nutrients::zero().iter().all(|(_, v)| v == 0.0));
    }

    #[test]
    fn test_scaled() {
        let half = sample().scaled(0.5);
        assert!((half.energy - 67.0).abs() < 1e-9);
        assert!((half.vitamin_c - 14.5).abs() < 1e-9);
    }

    #[test]
    fn test_add_assign_accumulates_every_field() {
        let mut total = Nutrients::zero();
        total += sample();
        total += &sample();
        for (nutrient, value) in total.iter() {
            assert!((value - 2.0 * sample().get(nutrient)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_set_and_get_cover_every_nutrient() {
        let mut n = Nutrients::zero();
        for (i, nutrient) in Nutrient::ALL.iter().enumerate() {
            n.set(*nutrient, i as f64);
        }
        for (i, nutrient) in Nutrient::ALL.iter().enumerate() {
            assert_eq!(n.get(*nutrient), i as f64);
        }
    }

    #[test]
    fn test_json_keys() {
        let json = serde_json::to_value(sample()).unwrap();
        for nutrient in Nutrient::ALL {
            assert!(json.get(nutrient.key()).is_some(), "missing {}", nutrient);
        }
    }
}
