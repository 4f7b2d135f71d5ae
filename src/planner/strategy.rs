use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::RecommendationError;
use crate::models::{DailyMenu, Dish, PartyConfiguration};
use crate::planner::generator::{generate, generate_with_rng};
use crate::season::SolarTerm;
use crate::weather::WeatherCondition;

/// A way of turning party, catalog, and context into a [`DailyMenu`].
#[async_trait]
pub trait MenuRecommendationStrategy: Send + Sync {
    /// Short identifier for logs.
    fn name(&self) -> &'static str;

    async fn recommend(
        &self,
        config: &PartyConfiguration,
        dishes: &[Dish],
        solar_term: SolarTerm,
        weather: Option<&WeatherCondition>,
    ) -> Result<DailyMenu, RecommendationError>;
}

/// Scoring engine. Always succeeds.
#[derive(Debug, Clone, Default)]
pub struct DeterministicStrategy {
    /// Fixed seed for reproducible menus; `None` uses fresh entropy per call.
    pub seed: Option<u64>,
}

impl DeterministicStrategy {
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    pub fn generate(
        &self,
        config: &PartyConfiguration,
        dishes: &[Dish],
        solar_term: SolarTerm,
        weather: Option<&WeatherCondition>,
    ) -> DailyMenu {
        match self.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                generate_with_rng(config, dishes, solar_term, weather, &mut rng)
            }
            None => generate(config, dishes, solar_term, weather),
        }
    }
}

#[async_trait]
impl MenuRecommendationStrategy for DeterministicStrategy {
    fn name(&self) -> &'static str {
        "deterministic"
    }

    async fn recommend(
        &self,
        config: &PartyConfiguration,
        dishes: &[Dish],
        solar_term: SolarTerm,
        weather: Option<&WeatherCondition>,
    ) -> Result<DailyMenu, RecommendationError> {
        Ok(self.generate(config, dishes, solar_term, weather))
    }
}

/// Run the scoring engine. Never fails.
pub fn generate_deterministic(
    config: &PartyConfiguration,
    dishes: &[Dish],
    solar_term: SolarTerm,
    weather: Option<&WeatherCondition>,
) -> DailyMenu {
    generate(config, dishes, solar_term, weather)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(menu: &DailyMenu) -> Vec<String> {
        menu.all_dishes().map(|d| d.name.clone()).collect()
    }

    #[test]
    fn test_seeded_strategy_is_reproducible() {
        let dishes = crate::state::seed_dishes();
        let config = PartyConfiguration::new(2, 2, 0, 0);
        let strategy = DeterministicStrategy::seeded(2024);

        let a = strategy.generate(&config, &dishes, SolarTerm::Qiufen, None);
        let b = strategy.generate(&config, &dishes, SolarTerm::Qiufen, None);
        assert_eq!(names(&a), names(&b));
    }

    #[tokio::test]
    async fn test_strategy_never_errors_on_empty_catalog() {
        let strategy: Box<dyn MenuRecommendationStrategy> = Box::new(DeterministicStrategy::default());
        let config = PartyConfiguration::default();
        let menu = strategy
            .recommend(&config, &[], SolarTerm::Lichun, None)
            .await
            .unwrap();
        assert!(menu.is_empty());
        assert_eq!(menu.total_price, 0.0);
    }
}
