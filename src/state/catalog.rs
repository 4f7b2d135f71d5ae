use std::collections::HashMap;

use crate::error::{MenuError, Result};
use crate::models::{Dish, describe_dishes};

/// Read-only snapshot of the dish catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    dishes: Vec<Dish>,
}

impl Catalog {
    pub fn new(dishes: Vec<Dish>) -> Self {
        Self { dishes }
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    /// Look up a dish by exact name. The last duplicate wins.
    pub fn find(&self, name: &str) -> Result<&Dish> {
        self.dishes
            .iter()
            .rev()
            .find(|d| d.name == name)
            .ok_or_else(|| MenuError::DishNotFound(name.to_string()))
    }

    /// Name to dish map, built front to back so later duplicates overwrite.
    pub fn name_index(&self) -> HashMap<&str, &Dish> {
        self.dishes.iter().map(|d| (d.name.as_str(), d)).collect()
    }

    /// One catalog line per dish, as sent to the recommendation model.
    pub fn describe(&self) -> String {
        describe_dishes(&self.dishes)
    }
}

impl From<Vec<Dish>> for Catalog {
    fn from(dishes: Vec<Dish>) -> Self {
        Self::new(dishes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        let mut cold = Dish::new("拍黄瓜", 10.0, &["凉菜", "素菜", "清淡"]);
        cold.is_hot = false;
        let mut spicy = Dish::new("宫保鸡丁", 28.0, &["热菜", "肉类", "辣"]);
        spicy.spicy_level = 2;
        Catalog::new(vec![
            cold,
            spicy,
            Dish::new("红烧肉", 35.0, &["热菜", "肉类"]),
            Dish::new("红烧肉", 38.0, &["热菜", "肉类"]),
        ])
    }

    #[test]
    fn test_find_prefers_last_duplicate() {
        let catalog = catalog();
        assert_eq!(catalog.find("红烧肉").unwrap().price, 38.0);
        assert_eq!(catalog.name_index()["红烧肉"].price, 38.0);
        assert_eq!(catalog.name_index().len(), 3);
    }

    #[test]
    fn test_find_missing() {
        assert!(matches!(
            catalog().find("佛跳墙"),
            Err(MenuError::DishNotFound(name)) if name == "佛跳墙"
        ));
    }

    #[test]
    fn test_describe_lines() {
        let text = catalog().describe();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "拍黄瓜(¥10,凉菜,不辣,标签:凉菜,素菜,清淡)");
        assert_eq!(lines[1], "宫保鸡丁(¥28,热菜,辣度2,标签:热菜,肉类,辣)");
    }
}
