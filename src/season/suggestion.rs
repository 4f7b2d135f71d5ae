use serde::{Deserialize, Serialize};

/// Dietary leanings produced by both the season and the weather classifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietarySuggestion {
    pub prefer_hot: bool,
    pub prefer_soup: bool,
    pub prefer_light: bool,
    pub prefer_cold: bool,
    pub description: String,
}

impl DietarySuggestion {
    pub fn new(
        prefer_hot: bool,
        prefer_soup: bool,
        prefer_light: bool,
        prefer_cold: bool,
        description: &str,
    ) -> Self {
        Self {
            prefer_hot,
            prefer_soup,
            prefer_light,
            prefer_cold,
            description: description.to_string(),
        }
    }
}

/// Nine season characters that share a dietary profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeasonBucket {
    EarlySpring,
    MidSpring,
    EarlySummer,
    PeakSummer,
    EarlyAutumn,
    MidAutumn,
    LateAutumn,
    EarlyWinter,
    DeepWinter,
}

impl SeasonBucket {
    pub fn suggestion(self) -> DietarySuggestion {
        use SeasonBucket::*;
        match self {
            EarlySpring => {
                DietarySuggestion::new(true, true, true, false, "春季养肝，宜清淡温补，多食新鲜蔬菜")
            }
            MidSpring => {
                DietarySuggestion::new(true, true, true, false, "仲春时节，宜平补养肝，饮食清淡")
            }
            EarlySummer => {
                DietarySuggestion::new(false, true, true, true, "初夏养心，宜清淡消暑，多食瓜果")
            }
            PeakSummer => {
                DietarySuggestion::new(false, true, true, true, "盛夏消暑，宜清凉解热，多饮汤水")
            }
            EarlyAutumn => {
                DietarySuggestion::new(true, true, true, false, "秋季润燥，宜滋阴润肺，多食汤羹")
            }
            MidAutumn => {
                DietarySuggestion::new(true, true, false, false, "仲秋养肺，宜温润滋补，适当进补")
            }
            LateAutumn => {
                DietarySuggestion::new(true, true, false, false, "深秋进补，宜温热滋养，增强体质")
            }
            EarlyWinter => {
                DietarySuggestion::new(true, true, false, false, "冬季进补，宜温热滋补，多食炖煮")
            }
            DeepWinter => {
                DietarySuggestion::new(true, true, false, false, "严冬御寒，宜大补温阳，多食肉类炖汤")
            }
        }
    }
}
