use std::collections::HashSet;

use chrono::Local;
use rand::Rng;
use tracing::debug;

use crate::models::{DailyMenu, Dish, PartyConfiguration, sum_prices, tag};
use crate::planner::constants::{BONUS_DESSERT_COUNT, MAX_COLD_PICKS, STAPLE_COUNT};
use crate::planner::pools::DishPools;
use crate::planner::ranking::{Preferences, pick_top};
use crate::season::SolarTerm;
use crate::weather::WeatherCondition;

/// Generate a daily menu using thread-local entropy.
///
/// Repeated calls with the same inputs may differ; that is what "regenerate" relies on.
pub fn generate(
    config: &PartyConfiguration,
    dishes: &[Dish],
    solar_term: SolarTerm,
    weather: Option<&WeatherCondition>,
) -> DailyMenu {
    generate_with_rng(config, dishes, solar_term, weather, &mut rand::thread_rng())
}

/// Generate a daily menu drawing random base scores from `rng`.
///
/// Never fails: categories with no eligible dishes come back empty.
pub fn generate_with_rng<R: Rng + ?Sized>(
    config: &PartyConfiguration,
    dishes: &[Dish],
    solar_term: SolarTerm,
    weather: Option<&WeatherCondition>,
    rng: &mut R,
) -> DailyMenu {
    let weather = weather
        .cloned()
        .unwrap_or_else(|| WeatherCondition::from_solar_term(solar_term));
    let season_suggestion = solar_term.dietary_suggestion();
    let weather_suggestion = weather.dietary_preference();
    let prefs = Preferences::combine(&season_suggestion, &weather, config);

    let pools = DishPools::partition(dishes).eligible(config);
    debug!(
        soups = pools.soups.len(),
        staples = pools.staples.len(),
        cold = pools.cold.len(),
        hot = pools.hot.len(),
        desserts = pools.desserts.len(),
        "Eligible pools"
    );

    let dish_count = config.dish_count();
    let main_target = (dish_count / 2).max(1);
    let side_target = dish_count.saturating_sub(main_target).max(1);

    let meat: Vec<&Dish> = pools
        .hot
        .iter()
        .copied()
        .filter(|d| d.is_meat_or_seafood())
        .collect();
    let vegetables: Vec<&Dish> = pools.hot.iter().copied().filter(|d| d.is_vegetable()).collect();

    let mains = pick_top(&meat, main_target, &prefs, rng);
    let mut sides = pick_top(&vegetables, side_target, &prefs, rng);

    if prefs.prefer_cold {
        let cold_count = MAX_COLD_PICKS.min(pools.cold.len());
        let cold_picks = pick_top(&pools.cold, cold_count, &prefs, rng);
        if sides.len() > cold_count {
            sides.truncate(sides.len() - cold_count);
            sides.extend(cold_picks);
        } else {
            sides = cold_picks;
        }

        let cooling: Vec<&Dish> = pools
            .desserts
            .iter()
            .copied()
            .filter(|d| d.has_tag(tag::COOLING))
            .collect();
        sides.extend(pick_top(&cooling, BONUS_DESSERT_COUNT, &prefs, rng));
    }

    let soups = pick_top(&pools.soups, config.soup_count(), &prefs, rng);
    let staples = pick_top(&pools.staples, STAPLE_COUNT, &prefs, rng);

    let mut used = HashSet::new();
    let main_dishes = dedupe(mains, &mut used);
    let side_dishes = dedupe(sides, &mut used);
    let soups = dedupe(soups, &mut used);
    let staples = dedupe(staples, &mut used);

    let total_price = sum_prices(
        main_dishes
            .iter()
            .chain(&side_dishes)
            .chain(&soups)
            .chain(&staples),
    );

    debug!(
        mains = main_dishes.len(),
        sides = side_dishes.len(),
        soups = soups.len(),
        staples = staples.len(),
        total_price,
        "Generated menu for {solar_term}"
    );

    DailyMenu {
        date: Local::now().date_naive(),
        main_dishes,
        side_dishes,
        soups,
        staples,
        solar_term,
        solar_term_description: season_suggestion.description,
        weather_description: weather_suggestion.description,
        total_price,
    }
}

/// Drop dishes whose name was already taken by an earlier list; first occurrence wins.
pub(crate) fn dedupe<'a>(list: Vec<&'a Dish>, used: &mut HashSet<&'a str>) -> Vec<Dish> {
    list.into_iter()
        .filter(|d| used.insert(d.name.as_str()))
        .cloned()
        .collect()
}
