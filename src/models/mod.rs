pub mod diner;
pub mod dish;
pub mod menu;
pub mod party;

pub use diner::Diner;
pub use dish::{Dish, describe_dishes, tag};
pub use menu::{DailyMenu, sum_prices};
pub use party::PartyConfiguration;
