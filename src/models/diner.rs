use serde::{Deserialize, Serialize};

/// A household member and their taste markers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Diner {
    pub name: String,
    pub emoji: String,
    pub likes_spicy: bool,
    pub likes_sour: bool,
    pub likes_sweet: bool,
    pub likes_light: bool,
    pub dislikes_spicy: bool,
    pub dislikes_sour: bool,
    pub dislikes_sweet: bool,
    pub dislikes_oily: bool,
    pub is_child: bool,
    pub is_elderly: bool,
    pub notes: String,
}

impl Diner {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            emoji: "😀".to_string(),
            ..Default::default()
        }
    }

    /// Active markers joined with "、".
    pub fn taste_description(&self) -> String {
        let markers = [
            (self.likes_spicy, "爱辣"),
            (self.likes_sour, "爱酸"),
            (self.likes_sweet, "爱甜"),
            (self.likes_light, "爱清淡"),
            (self.dislikes_spicy, "忌辣"),
            (self.dislikes_sour, "忌酸"),
            (self.dislikes_sweet, "忌甜"),
            (self.dislikes_oily, "忌油腻"),
            (self.is_child, "儿童"),
            (self.is_elderly, "老人"),
        ];

        let parts: Vec<&str> = markers
            .into_iter()
            .filter(|(active, _)| *active)
            .map(|(_, label)| label)
            .collect();

        if parts.is_empty() {
            "无特殊偏好".to_string()
        } else {
            parts.join("、")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taste_description_empty() {
        assert_eq!(Diner::new("小明").taste_description(), "无特殊偏好");
    }

    #[test]
    fn test_taste_description_order() {
        let diner = Diner {
            likes_light: true,
            dislikes_oily: true,
            is_elderly: true,
            likes_spicy: true,
            ..Diner::new("奶奶")
        };
        assert_eq!(diner.taste_description(), "爱辣、爱清淡、忌油腻、老人");
    }
}
