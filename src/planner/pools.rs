use crate::models::{Dish, PartyConfiguration};

/// Catalog split by dish role.
///
/// Soup, staple, and cold pools exclude each other before hot dishes are
/// matched. Desserts are matched independently and may repeat a dish that
/// also sits in another pool.
#[derive(Debug, Default)]
pub struct DishPools<'a> {
    pub soups: Vec<&'a Dish>,
    pub staples: Vec<&'a Dish>,
    pub cold: Vec<&'a Dish>,
    pub hot: Vec<&'a Dish>,
    pub desserts: Vec<&'a Dish>,
}

impl<'a> DishPools<'a> {
    pub fn partition(dishes: &'a [Dish]) -> Self {
        let mut pools = Self::default();
        for dish in dishes {
            if dish.is_soup() {
                pools.soups.push(dish);
            }
            if dish.is_staple() {
                pools.staples.push(dish);
            }
            if dish.is_cold_dish() {
                pools.cold.push(dish);
            }
            if dish.is_hot_dish() {
                pools.hot.push(dish);
            }
            if dish.is_dessert() {
                pools.desserts.push(dish);
            }
        }
        pools
    }

    /// Keep only dishes every diner can eat.
    pub fn eligible(self, config: &PartyConfiguration) -> Self {
        let keep = |pool: Vec<&'a Dish>| -> Vec<&'a Dish> {
            pool.into_iter()
                .filter(|d| passes_constraints(d, config))
                .collect()
        };

        Self {
            soups: keep(self.soups),
            staples: keep(self.staples),
            cold: keep(self.cold),
            hot: keep(self.hot),
            desserts: keep(self.desserts),
        }
    }
}

/// Hard constraints: spice ceiling and age suitability, all applicable ones AND'd.
pub fn passes_constraints(dish: &Dish, config: &PartyConfiguration) -> bool {
    if dish.spicy_level > config.max_spicy_level() {
        return false;
    }
    if config.has_children() && !dish.suitable_for_children {
        return false;
    }
    if config.has_elderly() && !dish.suitable_for_elderly {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spicy(name: &str, level: u8, tags: &[&str]) -> Dish {
        Dish {
            spicy_level: level,
            ..Dish::new(name, 20.0, tags)
        }
    }

    #[test]
    fn test_partition_roles() {
        let dishes = vec![
            Dish::new("番茄蛋花汤", 12.0, &["汤", "清淡"]),
            Dish::new("蛋炒饭", 12.0, &["主食"]),
            Dish::new("拍黄瓜", 10.0, &["凉菜", "素菜"]),
            Dish::new("红烧肉", 35.0, &["热菜", "肉类"]),
            Dish::new("绿豆汤", 8.0, &["饮品", "消暑"]),
            Dish::new("凉面", 12.0, &["凉菜", "主食"]),
        ];
        let pools = DishPools::partition(&dishes);
        assert_eq!(pools.soups.len(), 1);
        assert_eq!(pools.staples.len(), 2);
        assert_eq!(pools.cold.len(), 1, "cold staple is not a cold plate");
        assert_eq!(pools.hot.len(), 1);
        assert_eq!(pools.desserts.len(), 1);
    }

    #[test]
    fn test_constraints() {
        let adults = PartyConfiguration::new(2, 0, 0, 0);
        let with_child = PartyConfiguration::new(1, 1, 1, 0);
        let with_elder = PartyConfiguration::new(1, 1, 0, 1);

        let hot = spicy("水煮鱼", 3, &["热菜", "海鲜"]);
        assert!(passes_constraints(&hot, &adults));
        assert!(!passes_constraints(&hot, &with_elder));

        let medium = spicy("麻婆豆腐", 2, &["热菜", "素菜"]);
        assert!(passes_constraints(&medium, &with_elder));
        assert!(!passes_constraints(&medium, &with_child));

        let mut mild_unsuitable = spicy("蒜泥白肉", 0, &["凉菜", "肉类"]);
        mild_unsuitable.suitable_for_elderly = false;
        assert!(passes_constraints(&mild_unsuitable, &with_child));
        assert!(!passes_constraints(&mild_unsuitable, &with_elder));
    }
}
