use strsim::jaro_winkler;

use crate::models::Dish;

/// Minimum Jaro-Winkler similarity for a fuzzy match.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.85;

/// Maps a free-text dish name from model output back to a catalog entry.
pub trait DishResolver: Send + Sync {
    fn resolve<'a>(&self, name: &str, catalog: &'a [Dish]) -> Option<&'a Dish>;

    /// Resolve every name in order, silently dropping misses.
    fn resolve_all<'a>(&self, names: &[String], catalog: &'a [Dish]) -> Vec<&'a Dish> {
        names
            .iter()
            .filter_map(|name| self.resolve(name, catalog))
            .collect()
    }
}

/// Exact name match. With duplicate names the last catalog entry wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactNameResolver;

impl DishResolver for ExactNameResolver {
    fn resolve<'a>(&self, name: &str, catalog: &'a [Dish]) -> Option<&'a Dish> {
        catalog.iter().rev().find(|d| d.name == name)
    }
}

/// Exact match first, then the most similar name above a threshold.
#[derive(Debug, Clone, Copy)]
pub struct FuzzyNameResolver {
    pub threshold: f64,
}

impl Default for FuzzyNameResolver {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_FUZZY_THRESHOLD,
        }
    }
}

impl DishResolver for FuzzyNameResolver {
    fn resolve<'a>(&self, name: &str, catalog: &'a [Dish]) -> Option<&'a Dish> {
        let name = name.trim();
        if let Some(exact) = ExactNameResolver.resolve(name, catalog) {
            return Some(exact);
        }

        catalog
            .iter()
            .map(|d| (d, jaro_winkler(&d.name, name)))
            .filter(|(_, score)| *score >= self.threshold)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(d, _)| d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Dish> {
        vec![
            Dish::new("番茄炒蛋", 12.0, &["热菜"]),
            Dish::new("Kung Pao Chicken", 28.0, &["热菜"]),
            Dish::new("番茄炒蛋", 15.0, &["热菜"]),
        ]
    }

    #[test]
    fn test_exact_drops_unknown_names() {
        let catalog = catalog();
        let names = vec!["番茄炒蛋".to_string(), "佛跳墙".to_string()];
        let resolved = ExactNameResolver.resolve_all(&names, &catalog);
        assert_eq!(resolved.len(), 1);
    }

    #[test]
    fn test_exact_last_duplicate_wins() {
        let catalog = catalog();
        let dish = ExactNameResolver.resolve("番茄炒蛋", &catalog).unwrap();
        assert_eq!(dish.price, 15.0);
    }

    #[test]
    fn test_fuzzy_matches_misspelling() {
        let catalog = catalog();
        assert!(ExactNameResolver.resolve("Kung Pao Chiken", &catalog).is_none());
        let dish = FuzzyNameResolver::default()
            .resolve("Kung Pao Chiken", &catalog)
            .unwrap();
        assert_eq!(dish.name, "Kung Pao Chicken");
    }

    #[test]
    fn test_fuzzy_rejects_distant_names() {
        let catalog = catalog();
        assert!(FuzzyNameResolver::default().resolve("Mapo Tofu", &catalog).is_none());
    }
}
