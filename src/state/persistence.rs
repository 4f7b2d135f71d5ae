use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Diner, Dish};

const TAG_SEPARATOR: char = ';';

/// Flat CSV row; tags are `;`-separated in a single column.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DishRecord {
    name: String,
    price: f64,
    #[serde(default)]
    tags: String,
    #[serde(default = "default_true")]
    is_hot: bool,
    #[serde(default)]
    spicy_level: u8,
    #[serde(default = "default_true")]
    suitable_for_elderly: bool,
    #[serde(default = "default_true")]
    suitable_for_children: bool,
    #[serde(default)]
    cooking_time: u32,
}

fn default_true() -> bool {
    true
}

impl From<DishRecord> for Dish {
    fn from(record: DishRecord) -> Self {
        Dish {
            name: record.name,
            price: record.price,
            tags: record
                .tags
                .split(TAG_SEPARATOR)
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
            is_hot: record.is_hot,
            spicy_level: record.spicy_level,
            suitable_for_elderly: record.suitable_for_elderly,
            suitable_for_children: record.suitable_for_children,
            cooking_time: record.cooking_time,
        }
    }
}

impl From<&Dish> for DishRecord {
    fn from(dish: &Dish) -> Self {
        DishRecord {
            name: dish.name.clone(),
            price: dish.price,
            tags: dish.tags.join(";"),
            is_hot: dish.is_hot,
            spicy_level: dish.spicy_level,
            suitable_for_elderly: dish.suitable_for_elderly,
            suitable_for_children: dish.suitable_for_children,
            cooking_time: dish.cooking_time,
        }
    }
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Load dishes from JSON, or CSV when the extension is `.csv`.
///
/// Names are not deduplicated; the catalog keeps every row in file order.
pub fn load_dishes<P: AsRef<Path>>(path: P) -> Result<Vec<Dish>> {
    let path = path.as_ref();
    if is_csv(path) {
        let mut rdr = csv::Reader::from_path(path)?;
        let mut dishes = Vec::new();
        for record in rdr.deserialize::<DishRecord>() {
            dishes.push(record?.into());
        }
        Ok(dishes)
    } else {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Save dishes as pretty JSON, or CSV when the extension is `.csv`.
pub fn save_dishes<P: AsRef<Path>>(path: P, dishes: &[Dish]) -> Result<()> {
    let path = path.as_ref();
    if is_csv(path) {
        let mut wtr = csv::Writer::from_path(path)?;
        for dish in dishes {
            wtr.serialize(DishRecord::from(dish))?;
        }
        wtr.flush()?;
    } else {
        let json = serde_json::to_string_pretty(dishes)?;
        fs::write(path, json)?;
    }
    Ok(())
}

/// Load diners from a JSON array.
pub fn load_diners<P: AsRef<Path>>(path: P) -> Result<Vec<Diner>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    #[test]
    fn test_load_json_applies_defaults() {
        let json = r#"[
            {"name": "番茄炒蛋", "price": 12, "tags": ["热菜", "素菜"]},
            {"name": "拍黄瓜", "price": 10, "tags": ["凉菜"], "isHot": false, "spicyLevel": 1}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let dishes = load_dishes(file.path()).unwrap();
        assert_eq!(dishes.len(), 2);
        assert!(dishes[0].is_hot);
        assert!(dishes[0].suitable_for_children);
        assert!(!dishes[1].is_hot);
        assert_eq!(dishes[1].spicy_level, 1);
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let json = r#"[
            {"name": "红烧肉", "price": 35, "tags": ["热菜", "肉类"]},
            {"name": "红烧肉", "price": 38, "tags": ["热菜", "肉类"]}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let dishes = load_dishes(file.path()).unwrap();
        assert_eq!(dishes.len(), 2);
        assert_eq!(dishes[1].price, 38.0);
    }

    #[test]
    fn test_csv_roundtrip() {
        let file = Builder::new().suffix(".csv").tempfile().unwrap();
        let mut dish = Dish::new("口水鸡", 28.0, &["凉菜", "肉类", "辣"]);
        dish.is_hot = false;
        dish.spicy_level = 3;
        dish.suitable_for_children = false;

        save_dishes(file.path(), &[dish.clone()]).unwrap();
        let reloaded = load_dishes(file.path()).unwrap();
        assert_eq!(reloaded, vec![dish]);
    }

    #[test]
    fn test_csv_tags_are_split() {
        let csv = "name,price,tags,isHot,spicyLevel,suitableForElderly,suitableForChildren,cookingTime\n\
                   蛋炒饭,12,主食; 经典,true,0,true,true,10\n";
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        let dishes = load_dishes(file.path()).unwrap();
        assert_eq!(dishes[0].tags, vec!["主食", "经典"]);
        assert!(dishes[0].is_staple());
    }

    #[test]
    fn test_malformed_json_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{not a list").unwrap();
        assert!(load_dishes(file.path()).is_err());
    }

    #[test]
    fn test_load_diners() {
        let json = r#"[{"name": "奶奶", "isElderly": true, "likesLight": true}]"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let diners = load_diners(file.path()).unwrap();
        assert_eq!(diners[0].taste_description(), "爱清淡、老人");
    }
}
