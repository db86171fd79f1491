//! School meals

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

/// Names of the nutrients that are highlighted when a meal is displayed
pub const IMPORTANT_NUTRIENTS: [&str; 4] = ["열량", "탄수화물", "단백질", "지방"];
/// Name of the nutrient that carries the energy of a meal
pub const CALORIE_NUTRIENT: &str = "열량";

/// A dish of a meal
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    name: String,
    /// Allergy codes, as defined by the Korean food labelling standard (1 = egg, 2 = milk...)
    allergies: Vec<i32>,
}

impl Menu {
    pub fn new(name: String, allergies: Vec<i32>) -> Self {
        Self { name, allergies }
    }

    pub fn name(&self) -> &str          { &self.name      }
    pub fn allergies(&self) -> &[i32]   { &self.allergies }
}

/// Where an ingredient comes from
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Origin {
    ingredient: String,
    origin: String,
}

impl Origin {
    pub fn new(ingredient: String, origin: String) -> Self {
        Self { ingredient, origin }
    }

    pub fn ingredient(&self) -> &str { &self.ingredient }
    pub fn origin(&self) -> &str     { &self.origin     }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Nutrient {
    name: String,
    unit: String,
    amount: f64,
}

impl Nutrient {
    pub fn new(name: String, unit: String, amount: f64) -> Self {
        Self { name, unit, amount }
    }

    pub fn name(&self) -> &str  { &self.name   }
    pub fn unit(&self) -> &str  { &self.unit   }
    pub fn amount(&self) -> f64 { self.amount  }
}

/// The meal served by a school on a given day
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    school_code: i32,
    date: NaiveDate,
    menus: Vec<Menu>,
    origins: Vec<Origin>,
    nutrients: Vec<Nutrient>,
    /// Energy of the meal, in kcal
    calorie: f64,
}

impl Meal {
    /// Create a meal. Its calorie count is read from its nutrients, and is 0 if they do not mention it.
    pub fn new(school_code: i32, date: NaiveDate, menus: Vec<Menu>, origins: Vec<Origin>, nutrients: Vec<Nutrient>) -> Self {
        let calorie = nutrients.iter()
            .find(|n| n.name() == CALORIE_NUTRIENT)
            .map(|n| n.amount())
            .unwrap_or(0.0);
        Self { school_code, date, menus, origins, nutrients, calorie }
    }

    pub fn school_code(&self) -> i32        { self.school_code }
    pub fn date(&self) -> NaiveDate         { self.date        }
    pub fn menus(&self) -> &[Menu]          { &self.menus      }
    pub fn origins(&self) -> &[Origin]      { &self.origins    }
    pub fn nutrients(&self) -> &[Nutrient]  { &self.nutrients  }
    pub fn calorie(&self) -> f64            { self.calorie     }

    /// Splits the nutrients into the [`IMPORTANT_NUTRIENTS`] (first) and the other ones (second).
    ///
    /// Both lists keep the order of [`Self::nutrients`].
    pub fn important_nutrients(&self) -> (Vec<&Nutrient>, Vec<&Nutrient>) {
        self.nutrients.iter()
            .partition(|n| IMPORTANT_NUTRIENTS.iter().any(|name| *name == n.name()))
    }
}
