pub mod solar_term;
pub mod suggestion;

pub use solar_term::SolarTerm;
pub use suggestion::{DietarySuggestion, SeasonBucket};
