use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Dish;
use crate::season::SolarTerm;

/// One generated menu. Regeneration replaces it wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMenu {
    pub date: NaiveDate,
    pub main_dishes: Vec<Dish>,
    pub side_dishes: Vec<Dish>,
    pub soups: Vec<Dish>,
    pub staples: Vec<Dish>,
    pub solar_term: SolarTerm,
    pub solar_term_description: String,
    pub weather_description: String,
    pub total_price: f64,
}

impl DailyMenu {
    /// All selected dishes in category order.
    pub fn all_dishes(&self) -> impl Iterator<Item = &Dish> {
        self.main_dishes
            .iter()
            .chain(&self.side_dishes)
            .chain(&self.soups)
            .chain(&self.staples)
    }

    pub fn dish_count(&self) -> usize {
        self.main_dishes.len() + self.side_dishes.len() + self.soups.len() + self.staples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dish_count() == 0
    }
}

/// Sum of prices over the given lists.
pub fn sum_prices<'a>(dishes: impl IntoIterator<Item = &'a Dish>) -> f64 {
    dishes.into_iter().map(|d| d.price).sum()
}
