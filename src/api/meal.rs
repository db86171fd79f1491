use std::error::Error;

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

use super::ApiError;
use crate::meal::{Meal, Menu, Nutrient, Origin};

/// The body returned when asking for the meals of a month
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MealResponse {
    #[serde(default)]
    pub response: Vec<MealModel>,
}

impl MealResponse {
    pub fn from_json(body: &str) -> Result<Self, Box<dyn Error>> {
        Ok(serde_json::from_str(body)?)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MealModel {
    /// Serving date, formatted as `YYYYMMDD`
    pub ymd: String,
    #[serde(default)]
    pub dishes: Vec<MenuModel>,
    #[serde(default)]
    pub origins: Vec<OriginModel>,
    #[serde(default)]
    pub nutrients: Vec<NutrientModel>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuModel {
    pub menu: String,
    #[serde(default)]
    pub allergies: Vec<i32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OriginModel {
    pub ingredient: String,
    pub origin: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NutrientModel {
    pub nutrient: String,
    pub unit: String,
    /// The API sends amounts as strings, e.g. `"765.8"`
    pub amount: String,
}

impl MealModel {
    /// The date this meal is served on
    pub fn date(&self) -> Result<NaiveDate, ApiError> {
        NaiveDate::parse_from_str(&self.ymd, "%Y%m%d")
            .map_err(|_| ApiError::InvalidDate(self.ymd.clone()))
    }

    /// Convert into a [`Meal`] of a given school
    pub fn to_meal(&self, school_code: i32) -> Result<Meal, ApiError> {
        let date = self.date()?;
        let menus = self.dishes.iter().map(MenuModel::to_menu).collect();
        let origins = self.origins.iter().map(OriginModel::to_origin).collect();
        let nutrients = self.nutrients.iter()
            .map(NutrientModel::to_nutrient)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Meal::new(school_code, date, menus, origins, nutrients))
    }
}

impl MenuModel {
    pub fn to_menu(&self) -> Menu {
        Menu::new(self.menu.clone(), self.allergies.clone())
    }
}

impl OriginModel {
    pub fn to_origin(&self) -> Origin {
        Origin::new(self.ingredient.clone(), self.origin.clone())
    }
}

impl NutrientModel {
    pub fn to_nutrient(&self) -> Result<Nutrient, ApiError> {
        let amount = self.amount.trim().parse::<f64>()
            .map_err(|_| ApiError::InvalidAmount { nutrient: self.nutrient.clone(), amount: self.amount.clone() })?;
        Ok(Nutrient::new(self.nutrient.clone(), self.unit.clone(), amount))
    }
}
