pub mod constants;
pub mod generator;
pub mod pools;
pub mod ranking;
pub mod strategy;

pub use constants::*;
pub use generator::{generate, generate_with_rng};
pub use pools::{DishPools, passes_constraints};
pub use ranking::{Preferences, pick_top};
pub use strategy::{DeterministicStrategy, MenuRecommendationStrategy, generate_deterministic};
