use rand::Rng;

use crate::models::{Dish, PartyConfiguration, tag};
use crate::planner::constants::*;
use crate::season::{DietarySuggestion, SolarTerm};
use crate::weather::WeatherCondition;

/// Combined season and weather signals that drive scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub prefer_cold: bool,
    pub prefer_light: bool,
    pub prefer_soup: bool,
    /// The season alone leans light (disables the 滋补 bonus).
    pub season_prefers_light: bool,
    pub weather_is_hot: bool,
    pub weather_is_cold: bool,
    pub has_elderly: bool,
}

impl Preferences {
    /// Either source can switch a preference on; there is no weighting.
    pub fn combine(
        season: &DietarySuggestion,
        weather: &WeatherCondition,
        config: &PartyConfiguration,
    ) -> Self {
        let weather_pref = weather.dietary_preference();
        Self {
            prefer_cold: season.prefer_cold || weather_pref.prefer_cold,
            prefer_light: season.prefer_light || weather_pref.prefer_light,
            prefer_soup: season.prefer_soup || weather_pref.prefer_soup,
            season_prefers_light: season.prefer_light,
            weather_is_hot: weather.is_hot(),
            weather_is_cold: weather.is_cold(),
            has_elderly: config.has_elderly(),
        }
    }

    pub fn for_term(
        term: SolarTerm,
        weather: &WeatherCondition,
        config: &PartyConfiguration,
    ) -> Self {
        Self::combine(&term.dietary_suggestion(), weather, config)
    }

    /// Fixed bonuses for a dish, without the random base.
    pub fn bonus(&self, dish: &Dish) -> f64 {
        let mut s = 0.0;

        if self.prefer_cold && !dish.is_hot {
            s += COLD_PREFERENCE_BONUS;
        }
        if !self.prefer_cold && dish.is_hot {
            s += HOT_DEFAULT_BONUS;
        }
        if self.prefer_light && dish.has_tag(tag::LIGHT) {
            s += LIGHT_BONUS;
        }
        if self.prefer_soup && dish.has_any_tag(&[tag::SOUP, tag::NOURISHING]) {
            s += SOUP_BONUS;
        }
        if self.weather_is_cold && dish.is_hot {
            s += WARMING_BONUS;
        }
        if self.weather_is_hot && !dish.is_hot {
            s += COOLING_BONUS;
        }
        if !self.season_prefers_light && dish.has_tag(tag::NOURISHING) {
            s += NOURISHING_BONUS;
        }
        if self.has_elderly && dish.spicy_level >= ELDERLY_SPICE_THRESHOLD {
            s -= ELDERLY_SPICE_PENALTY;
        }

        s
    }

    /// Random base in [0, 10) plus bonuses.
    pub fn score<R: Rng + ?Sized>(&self, dish: &Dish, rng: &mut R) -> f64 {
        rng.gen_range(0.0..RANDOM_SCORE_MAX) + self.bonus(dish)
    }
}

/// Candidate dish with its drawn score.
#[derive(Debug)]
struct Candidate<'a> {
    dish: &'a Dish,
    score: f64,
}

/// Score the pool afresh and return the `count` highest.
///
/// Ties are settled by the random component alone.
pub fn pick_top<'a, R: Rng + ?Sized>(
    pool: &[&'a Dish],
    count: usize,
    prefs: &Preferences,
    rng: &mut R,
) -> Vec<&'a Dish> {
    if pool.is_empty() || count == 0 {
        return Vec::new();
    }

    let mut candidates: Vec<Candidate> = pool
        .iter()
        .map(|&dish| Candidate {
            dish,
            score: prefs.score(dish, rng),
        })
        .collect();

    // Higher is better
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

    candidates
        .into_iter()
        .take(count)
        .map(|c| c.dish)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::ConditionType;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn mild_weather() -> WeatherCondition {
        WeatherCondition::new(20.0, ConditionType::Sunny, 0.5)
    }

    fn prefs(prefer_cold: bool) -> Preferences {
        Preferences {
            prefer_cold,
            prefer_light: false,
            prefer_soup: false,
            season_prefers_light: true,
            weather_is_hot: false,
            weather_is_cold: false,
            has_elderly: false,
        }
    }

    #[test]
    fn test_combine_is_or() {
        let config = PartyConfiguration::default();
        let hot = WeatherCondition::new(35.0, ConditionType::Hot, 0.3);
        let p = Preferences::for_term(SolarTerm::Dongzhi, &hot, &config);
        assert!(p.prefer_cold, "weather alone turns on cold preference");
        assert!(p.prefer_light);
        assert!(!p.season_prefers_light);

        let p = Preferences::for_term(SolarTerm::Dashu, &mild_weather(), &config);
        assert!(p.prefer_cold, "season alone turns on cold preference");
    }

    #[test]
    fn test_bonuses_accumulate() {
        let mut p = prefs(false);
        p.prefer_light = true;
        p.prefer_soup = true;
        p.weather_is_cold = true;
        p.season_prefers_light = false;

        let soup = Dish::new("玉米排骨汤", 30.0, &["汤", "清淡", "滋补"]);
        let expected = HOT_DEFAULT_BONUS + LIGHT_BONUS + SOUP_BONUS + WARMING_BONUS + NOURISHING_BONUS;
        assert_eq!(p.bonus(&soup), expected);
    }

    #[test]
    fn test_cold_preference_and_elderly_penalty() {
        let mut cold = Dish::new("拍黄瓜", 10.0, &["凉菜"]);
        cold.is_hot = false;
        assert_eq!(prefs(true).bonus(&cold), COLD_PREFERENCE_BONUS);
        assert_eq!(prefs(false).bonus(&cold), 0.0);

        let mut p = prefs(false);
        p.has_elderly = true;
        let mut spicy = Dish::new("回锅肉", 30.0, &["热菜"]);
        spicy.spicy_level = 2;
        assert_eq!(p.bonus(&spicy), HOT_DEFAULT_BONUS - ELDERLY_SPICE_PENALTY);
    }

    #[test]
    fn test_score_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let p = prefs(false);
        let dish = Dish::new("红烧肉", 35.0, &["热菜"]);
        for _ in 0..100 {
            let s = p.score(&dish, &mut rng);
            assert!((HOT_DEFAULT_BONUS..HOT_DEFAULT_BONUS + RANDOM_SCORE_MAX).contains(&s));
        }
    }

    #[test]
    fn test_pick_top_prefers_large_bonus() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut cold = Dish::new("凉拌木耳", 12.0, &["凉菜", "清淡"]);
        cold.is_hot = false;
        let hot = Dish::new("红烧肉", 35.0, &["热菜"]);

        let mut p = prefs(true);
        p.prefer_light = true;
        p.weather_is_hot = true;
        // cold dish: 5 + 4 + 4 = 13 bonus, hot dish: 0; gap exceeds the random range
        let picked = pick_top(&[&hot, &cold], 1, &p, &mut rng);
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].name, "凉拌木耳");
    }

    #[test]
    fn test_pick_top_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let dish = Dish::new("红烧肉", 35.0, &["热菜"]);
        assert!(pick_top(&[], 3, &prefs(false), &mut rng).is_empty());
        assert_eq!(pick_top(&[&dish], 3, &prefs(false), &mut rng).len(), 1);
        assert!(pick_top(&[&dish], 0, &prefs(false), &mut rng).is_empty());
    }
}
