mod catalog;
mod persistence;
mod seed;

pub use catalog::Catalog;
pub use persistence::{load_diners, load_dishes, save_dishes};
pub use seed::seed_dishes;
