use serde::{Deserialize, Serialize};

/// Tag labels the engine inspects. Any other label is carried through untouched.
pub mod tag {
    pub const SOUP: &str = "汤";
    pub const PORRIDGE: &str = "粥";
    pub const STAPLE: &str = "主食";
    pub const COLD: &str = "凉菜";
    pub const HOT: &str = "热菜";
    pub const SEAFOOD: &str = "海鲜";
    pub const MEAT: &str = "肉类";
    pub const VEGETABLE: &str = "素菜";
    pub const DESSERT: &str = "甜品";
    pub const DRINK: &str = "饮品";
    pub const LIGHT: &str = "清淡";
    pub const NOURISHING: &str = "滋补";
    pub const COOLING: &str = "消暑";
}

/// A catalog dish.
///
/// `name` is the cross-reference key between the catalog and AI output, but
/// storage does not enforce uniqueness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub name: String,

    pub price: f64,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default = "default_is_hot")]
    pub is_hot: bool,

    /// 0 (not spicy) to 3 (very spicy).
    #[serde(default)]
    pub spicy_level: u8,

    #[serde(default = "default_suitable")]
    pub suitable_for_elderly: bool,

    #[serde(default = "default_suitable")]
    pub suitable_for_children: bool,

    /// Minutes. Informational only.
    #[serde(default)]
    pub cooking_time: u32,
}

fn default_is_hot() -> bool {
    true
}

fn default_suitable() -> bool {
    true
}

impl Dish {
    /// Minimal hot, mild dish suitable for everyone.
    pub fn new(name: impl Into<String>, price: f64, tags: &[&str]) -> Self {
        Self {
            name: name.into(),
            price,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            is_hot: true,
            spicy_level: 0,
            suitable_for_elderly: true,
            suitable_for_children: true,
            cooking_time: 0,
        }
    }

    #[inline]
    pub fn has_tag(&self, label: &str) -> bool {
        self.tags.iter().any(|t| t == label)
    }

    #[inline]
    pub fn has_any_tag(&self, labels: &[&str]) -> bool {
        labels.iter().any(|l| self.has_tag(l))
    }

    /// Soups and porridges.
    pub fn is_soup(&self) -> bool {
        self.has_any_tag(&[tag::SOUP, tag::PORRIDGE])
    }

    pub fn is_staple(&self) -> bool {
        self.has_tag(tag::STAPLE)
    }

    /// Cold plate that is neither soup nor staple.
    pub fn is_cold_dish(&self) -> bool {
        self.has_tag(tag::COLD) && !self.has_tag(tag::SOUP) && !self.has_tag(tag::STAPLE)
    }

    /// Hot plate or seafood that is not already a soup, staple, or cold plate.
    pub fn is_hot_dish(&self) -> bool {
        self.has_any_tag(&[tag::HOT, tag::SEAFOOD])
            && !self.has_tag(tag::SOUP)
            && !self.has_tag(tag::STAPLE)
            && !self.has_tag(tag::COLD)
    }

    /// Desserts and drinks. May overlap with the other roles.
    pub fn is_dessert(&self) -> bool {
        self.has_any_tag(&[tag::DESSERT, tag::DRINK])
    }

    pub fn is_meat_or_seafood(&self) -> bool {
        self.has_any_tag(&[tag::MEAT, tag::SEAFOOD])
    }

    pub fn is_vegetable(&self) -> bool {
        self.has_tag(tag::VEGETABLE)
    }

    /// Short spice label used in prompts and listings.
    pub fn spice_descriptor(&self) -> String {
        if self.spicy_level == 0 {
            "不辣".to_string()
        } else {
            format!("辣度{}", self.spicy_level)
        }
    }

    /// One catalog line as fed to the language model.
    pub fn catalog_line(&self) -> String {
        let temperature = if self.is_hot { "热菜" } else { "凉菜" };
        format!(
            "{}(¥{},{},{},标签:{})",
            self.name,
            self.price as i64,
            temperature,
            self.spice_descriptor(),
            self.tags.join(",")
        )
    }
}

/// Newline-delimited catalog listing, one [`Dish::catalog_line`] per dish.
pub fn describe_dishes(dishes: &[Dish]) -> String {
    dishes
        .iter()
        .map(Dish::catalog_line)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_predicates() {
        let soup = Dish::new("紫菜蛋汤", 10.0, &["汤", "清淡"]);
        assert!(soup.is_soup());
        assert!(!soup.is_hot_dish());

        let cold = Dish::new("拍黄瓜", 10.0, &["凉菜", "素菜"]);
        assert!(cold.is_cold_dish());
        assert!(!cold.is_hot_dish());

        let seafood = Dish::new("清蒸鲈鱼", 48.0, &["海鲜", "清淡"]);
        assert!(seafood.is_hot_dish());
        assert!(seafood.is_meat_or_seafood());
    }

    #[test]
    fn test_dessert_overlaps_hot_dish() {
        let dish = Dish::new("拔丝地瓜", 18.0, &["热菜", "甜品"]);
        assert!(dish.is_hot_dish());
        assert!(dish.is_dessert());
    }

    #[test]
    fn test_catalog_line() {
        let mut dish = Dish::new("口水鸡", 28.5, &["凉菜", "肉类", "辣"]);
        dish.is_hot = false;
        dish.spicy_level = 3;
        assert_eq!(dish.catalog_line(), "口水鸡(¥28,凉菜,辣度3,标签:凉菜,肉类,辣)");
    }

    #[test]
    fn test_deserialize_defaults() {
        let dish: Dish = serde_json::from_str(r#"{"name": "蛋炒饭", "price": 12}"#).unwrap();
        assert!(dish.is_hot);
        assert!(dish.suitable_for_children);
        assert_eq!(dish.spicy_level, 0);
        assert!(dish.tags.is_empty());
    }
}
