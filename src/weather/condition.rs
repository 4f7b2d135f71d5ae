use serde::{Deserialize, Serialize};

use crate::season::{DietarySuggestion, SolarTerm};

/// Above this (°C) the day counts as hot.
pub const HOT_THRESHOLD: f64 = 30.0;

/// Below this (°C) the day counts as cold for dietary purposes.
pub const COLD_THRESHOLD: f64 = 10.0;

/// Below this (°C) a clear or unclassified day is labelled cold.
pub const COLD_LABEL_THRESHOLD: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionType {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
    Hot,
    Cold,
    Normal,
}

impl ConditionType {
    pub fn label(self) -> &'static str {
        match self {
            ConditionType::Sunny => "晴",
            ConditionType::Cloudy => "多云",
            ConditionType::Rainy => "雨",
            ConditionType::Snowy => "雪",
            ConditionType::Hot => "炎热",
            ConditionType::Cold => "寒冷",
            ConditionType::Normal => "适宜",
        }
    }

    /// Map a WMO weather code plus temperature to a condition.
    pub fn from_weather_code(code: i32, temperature: f64) -> Self {
        match code {
            0 => by_temperature(temperature, ConditionType::Sunny),
            1..=3 => by_temperature(temperature, ConditionType::Cloudy),
            45 | 48 => ConditionType::Cloudy,
            51 | 53 | 55 | 61 | 63 | 65 | 80 | 81 | 82 | 95 | 96 | 99 => ConditionType::Rainy,
            71 | 73 | 75 | 77 | 85 | 86 => ConditionType::Snowy,
            _ => by_temperature(temperature, ConditionType::Normal),
        }
    }
}

fn by_temperature(temperature: f64, otherwise: ConditionType) -> ConditionType {
    if temperature > HOT_THRESHOLD {
        ConditionType::Hot
    } else if temperature < COLD_LABEL_THRESHOLD {
        ConditionType::Cold
    } else {
        otherwise
    }
}

impl std::fmt::Display for ConditionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Current weather, classified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherCondition {
    /// °C
    pub temperature: f64,
    pub condition: ConditionType,
    /// 0.0 - 1.0
    pub humidity: f64,
}

impl WeatherCondition {
    pub fn new(temperature: f64, condition: ConditionType, humidity: f64) -> Self {
        Self {
            temperature,
            condition,
            humidity,
        }
    }

    /// Classify raw provider readings. `humidity_percent` is 0-100.
    pub fn from_readings(temperature: f64, humidity_percent: f64, weather_code: i32) -> Self {
        Self::new(
            temperature,
            ConditionType::from_weather_code(weather_code, temperature),
            humidity_percent / 100.0,
        )
    }

    /// Synthesized weather for a term's typical temperature.
    pub fn from_solar_term(term: SolarTerm) -> Self {
        let temperature = term.estimated_temperature();
        let condition = by_temperature(temperature, ConditionType::Normal);
        Self::new(temperature, condition, 0.5)
    }

    #[inline]
    pub fn is_hot(&self) -> bool {
        self.temperature > HOT_THRESHOLD
    }

    #[inline]
    pub fn is_cold(&self) -> bool {
        self.temperature < COLD_THRESHOLD
    }

    #[inline]
    pub fn is_rainy(&self) -> bool {
        self.condition == ConditionType::Rainy
    }

    /// First matching rule wins: hot, cold, rainy, then mild.
    pub fn dietary_preference(&self) -> DietarySuggestion {
        if self.is_hot() {
            DietarySuggestion::new(false, true, true, true, "天气炎热，宜清淡消暑")
        } else if self.is_cold() {
            DietarySuggestion::new(true, true, false, false, "天气寒冷，宜温热进补")
        } else if self.is_rainy() {
            DietarySuggestion::new(true, true, false, false, "雨天湿冷，宜热汤暖身")
        } else {
            DietarySuggestion::new(true, false, false, false, "天气适宜，饮食均衡")
        }
    }

    /// e.g. "雨 18°C"
    pub fn summary(&self) -> String {
        format!("{} {}°C", self.condition.label(), self.temperature as i64)
    }
}
