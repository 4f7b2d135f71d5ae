pub mod ai;
pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod season;
pub mod state;
pub mod weather;

pub use error::{MenuError, RecommendationError, Result};
pub use models::{DailyMenu, Dish, PartyConfiguration};
pub use season::SolarTerm;
pub use weather::WeatherCondition;
