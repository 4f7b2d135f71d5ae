pub mod condition;
pub mod provider;

pub use condition::{ConditionType, WeatherCondition};
pub use provider::{
    Coordinates, WeatherProvider, fallback_weather, fallback_weather_on, parse_forecast,
};
