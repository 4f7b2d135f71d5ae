use std::env;
use std::time::Duration;

/// Chat-completions endpoint used for menu recommendation and dish recognition.
pub const DEFAULT_AI_BASE_URL: &str = "https://open.bigmodel.cn/api/paas/v4/chat/completions";

/// Text model for menu recommendation.
pub const DEFAULT_AI_MODEL: &str = "glm-4-flash";

/// Vision model for dish recognition.
pub const DEFAULT_AI_VISION_MODEL: &str = "glm-4v-flash";

pub const DEFAULT_AI_TIMEOUT_SECS: u64 = 60;

/// Open-Meteo forecast endpoint (free, no key).
pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Kept short: the seasonal fallback is always available.
pub const DEFAULT_WEATHER_TIMEOUT_SECS: u64 = 8;

const AI_BASE_URL_ENV: &str = "MENU_AI_BASE_URL";
const AI_MODEL_ENV: &str = "MENU_AI_MODEL";
const AI_VISION_MODEL_ENV: &str = "MENU_AI_VISION_MODEL";
const AI_API_KEY_ENV: &str = "MENU_AI_API_KEY";
const WEATHER_BASE_URL_ENV: &str = "MENU_WEATHER_BASE_URL";

/// Settings for the language-model provider.
#[derive(Debug, Clone)]
pub struct AiConfig {
    pub base_url: String,
    pub model: String,
    pub vision_model: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_AI_BASE_URL.to_string(),
            model: DEFAULT_AI_MODEL.to_string(),
            vision_model: DEFAULT_AI_VISION_MODEL.to_string(),
            api_key: String::new(),
            timeout: Duration::from_secs(DEFAULT_AI_TIMEOUT_SECS),
        }
    }
}

impl AiConfig {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            base_url: get(AI_BASE_URL_ENV).unwrap_or(defaults.base_url),
            model: get(AI_MODEL_ENV).unwrap_or(defaults.model),
            vision_model: get(AI_VISION_MODEL_ENV).unwrap_or(defaults.vision_model),
            api_key: get(AI_API_KEY_ENV).unwrap_or_default(),
            timeout: defaults.timeout,
        }
    }
}

/// Settings for the weather provider.
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_WEATHER_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_WEATHER_TIMEOUT_SECS),
        }
    }
}

impl WeatherConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            base_url: lookup(WEATHER_BASE_URL_ENV)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.base_url),
            timeout: defaults.timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::from_lookup(|_| None);
        assert_eq!(config.base_url, DEFAULT_AI_BASE_URL);
        assert_eq!(config.model, DEFAULT_AI_MODEL);
        assert!(config.api_key.is_empty());
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_ai_config_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("MENU_AI_MODEL", "glm-4-plus"),
            ("MENU_AI_API_KEY", "secret"),
            ("MENU_AI_BASE_URL", "  "),
        ]);
        let config = AiConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.model, "glm-4-plus");
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.base_url, DEFAULT_AI_BASE_URL);
    }

    #[test]
    fn test_weather_timeout_is_short() {
        let config = WeatherConfig::from_lookup(|_| None);
        assert!(config.timeout < Duration::from_secs(10));
        assert_eq!(config.base_url, DEFAULT_WEATHER_BASE_URL);
    }
}
