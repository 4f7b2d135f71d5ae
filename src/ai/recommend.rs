use std::collections::HashSet;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::ai::client::{
    ChatMessage, ChatRequest, CompletionClient, ContentPart, HttpCompletionClient, ImageUrl,
};
use crate::ai::prompts::{DISH_RECOGNITION_PROMPT, menu_prompt};
use crate::ai::resolver::{DishResolver, ExactNameResolver};
use crate::config::AiConfig;
use crate::error::{RecommendationError, Result};
use crate::models::{DailyMenu, Dish, PartyConfiguration, describe_dishes, sum_prices};
use crate::planner::MenuRecommendationStrategy;
use crate::planner::generator::dedupe;
use crate::season::SolarTerm;
use crate::weather::WeatherCondition;

type RecResult<T> = std::result::Result<T, RecommendationError>;

/// Structured menu pick returned by the model. Names are unresolved free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuRecommendationResult {
    pub main_dishes: Vec<String>,
    pub side_dishes: Vec<String>,
    pub soups: Vec<String>,
    pub staples: Vec<String>,
    pub reason: String,
}

/// Dish attributes guessed from a photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishRecognition {
    pub name: String,
    pub estimated_price: f64,
    pub spicy_level: u8,
    pub is_hot: bool,
    pub suitable_for_elderly: bool,
    pub suitable_for_children: bool,
    pub tags: Vec<String>,
}

impl DishRecognition {
    pub fn into_dish(self) -> Dish {
        Dish {
            name: self.name,
            price: self.estimated_price.max(0.0),
            tags: self.tags,
            is_hot: self.is_hot,
            spicy_level: self.spicy_level.min(3),
            suitable_for_elderly: self.suitable_for_elderly,
            suitable_for_children: self.suitable_for_children,
            cooking_time: 0,
        }
    }
}

/// Remove ```json / ``` fences the model may add despite instructions.
pub fn strip_markdown(text: &str) -> String {
    text.replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

fn parse_payload<T: for<'de> Deserialize<'de>>(content: &str) -> RecResult<T> {
    let cleaned = strip_markdown(content);
    serde_json::from_str(&cleaned)
        .map_err(|e| RecommendationError::RecommendationParseFailure(e.to_string()))
}

pub fn parse_recommendation(content: &str) -> RecResult<MenuRecommendationResult> {
    parse_payload(content)
}

pub fn parse_recognition(content: &str) -> RecResult<DishRecognition> {
    parse_payload(content)
}

fn resolve_names<'a>(
    resolver: &dyn DishResolver,
    names: &[String],
    dishes: &'a [Dish],
) -> Vec<&'a Dish> {
    let resolved = resolver.resolve_all(names, dishes);
    if resolved.len() < names.len() {
        warn!(
            "Dropped {} recommended dish(es) not found in the catalog",
            names.len() - resolved.len()
        );
    }
    resolved
}

/// Resolve model output against the catalog and build a [`DailyMenu`].
///
/// Unknown names are dropped. Prices come from the catalog, never the model.
pub fn assemble_menu(
    result: MenuRecommendationResult,
    dishes: &[Dish],
    resolver: &dyn DishResolver,
    weather: &WeatherCondition,
    solar_term: SolarTerm,
) -> DailyMenu {
    let mut used = HashSet::new();
    let main_dishes = dedupe(resolve_names(resolver, &result.main_dishes, dishes), &mut used);
    let side_dishes = dedupe(resolve_names(resolver, &result.side_dishes, dishes), &mut used);
    let soups = dedupe(resolve_names(resolver, &result.soups, dishes), &mut used);
    let staples = dedupe(resolve_names(resolver, &result.staples, dishes), &mut used);

    let total_price = sum_prices(
        main_dishes
            .iter()
            .chain(&side_dishes)
            .chain(&soups)
            .chain(&staples),
    );

    DailyMenu {
        date: Local::now().date_naive(),
        main_dishes,
        side_dishes,
        soups,
        staples,
        solar_term,
        solar_term_description: result.reason,
        weather_description: weather.dietary_preference().description,
        total_price,
    }
}

/// Language-model backed menu recommendation and dish recognition.
pub struct AiMenuService {
    client: Box<dyn CompletionClient>,
    resolver: Box<dyn DishResolver>,
    model: String,
    vision_model: String,
}

impl AiMenuService {
    pub fn new(client: Box<dyn CompletionClient>, config: &AiConfig) -> Self {
        Self {
            client,
            resolver: Box::new(ExactNameResolver),
            model: config.model.clone(),
            vision_model: config.vision_model.clone(),
        }
    }

    /// Service over the HTTP endpoint in `config`.
    pub fn from_config(config: &AiConfig) -> Result<Self> {
        let client = HttpCompletionClient::new(config)?;
        Ok(Self::new(Box::new(client), config))
    }

    pub fn with_resolver(mut self, resolver: Box<dyn DishResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Ask the model for a menu drawn from `catalog_text`.
    pub async fn recommend(
        &self,
        catalog_text: &str,
        config: &PartyConfiguration,
        weather: &WeatherCondition,
        solar_term: SolarTerm,
    ) -> RecResult<MenuRecommendationResult> {
        if catalog_text.trim().is_empty() {
            return Err(RecommendationError::EmptyInput);
        }

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(menu_prompt(
                catalog_text,
                config,
                weather,
                solar_term,
            ))],
        };

        let content = self.client.complete(&request).await?;
        parse_recommendation(&content)
    }

    /// Full AI path: describe the catalog, ask the model, resolve names.
    pub async fn generate_via_ai(
        &self,
        dishes: &[Dish],
        config: &PartyConfiguration,
        weather: &WeatherCondition,
        solar_term: SolarTerm,
    ) -> RecResult<DailyMenu> {
        let catalog_text = describe_dishes(dishes);
        let result = self
            .recommend(&catalog_text, config, weather, solar_term)
            .await?;
        info!(
            "Model recommended {} dish name(s)",
            result.main_dishes.len()
                + result.side_dishes.len()
                + result.soups.len()
                + result.staples.len()
        );
        Ok(assemble_menu(
            result,
            dishes,
            self.resolver.as_ref(),
            weather,
            solar_term,
        ))
    }

    /// Guess dish attributes from a JPEG photo.
    pub async fn recognize_dish(&self, image: &[u8]) -> RecResult<DishRecognition> {
        if image.is_empty() {
            return Err(RecommendationError::EmptyInput);
        }

        let data_url = format!("data:image/jpeg;base64,{}", STANDARD.encode(image));
        let request = ChatRequest {
            model: self.vision_model.clone(),
            messages: vec![ChatMessage::user(vec![
                ContentPart::ImageUrl {
                    image_url: ImageUrl { url: data_url },
                },
                ContentPart::Text {
                    text: DISH_RECOGNITION_PROMPT.to_string(),
                },
            ])],
        };

        let content = self.client.complete(&request).await?;
        parse_recognition(&content)
    }
}

/// AI service as a [`MenuRecommendationStrategy`].
pub struct AiStrategy {
    service: AiMenuService,
}

impl AiStrategy {
    pub fn new(service: AiMenuService) -> Self {
        Self { service }
    }
}

#[async_trait]
impl MenuRecommendationStrategy for AiStrategy {
    fn name(&self) -> &'static str {
        "ai"
    }

    async fn recommend(
        &self,
        config: &PartyConfiguration,
        dishes: &[Dish],
        solar_term: SolarTerm,
        weather: Option<&WeatherCondition>,
    ) -> RecResult<DailyMenu> {
        let weather = weather
            .cloned()
            .unwrap_or_else(|| WeatherCondition::from_solar_term(solar_term));
        self.service
            .generate_via_ai(dishes, config, &weather, solar_term)
            .await
    }
}

/// One-shot AI menu over the default endpoint with `api_key`.
pub async fn generate_via_ai(
    dishes: &[Dish],
    config: &PartyConfiguration,
    weather: &WeatherCondition,
    solar_term: SolarTerm,
    api_key: &str,
) -> RecResult<DailyMenu> {
    let ai_config = AiConfig::with_api_key(api_key);
    let service =
        AiMenuService::from_config(&ai_config).map_err(|e| RecommendationError::NetworkFailure {
            status: None,
            body: e.to_string(),
        })?;
    service
        .generate_via_ai(dishes, config, weather, solar_term)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markdown() {
        let fenced = "```json\n{\"a\": 1}\n```";
        assert_eq!(strip_markdown(fenced), "{\"a\": 1}");
        assert_eq!(strip_markdown("  {\"a\": 1}\n"), "{\"a\": 1}");
    }

    #[test]
    fn test_fenced_and_plain_parse_identically() {
        let plain = r#"{"mainDishes": ["红烧肉"], "sideDishes": [], "soups": ["紫菜蛋汤"], "staples": ["蛋炒饭"], "reason": "冬日温补"}"#;
        let fenced = format!("```json\n{plain}\n```");
        assert_eq!(
            parse_recommendation(plain).unwrap(),
            parse_recommendation(&fenced).unwrap()
        );
    }

    #[test]
    fn test_parse_failure_carries_message() {
        let err = parse_recommendation("今天吃红烧肉").unwrap_err();
        match err {
            RecommendationError::RecommendationParseFailure(msg) => assert!(!msg.is_empty()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_recognition_into_dish_clamps() {
        let recognition = parse_recognition(
            r#"```json
            {"name": "水煮鱼", "estimatedPrice": 45, "spicyLevel": 5, "isHot": true,
             "suitableForElderly": false, "suitableForChildren": false, "tags": ["热菜", "海鲜", "辣"]}
            ```"#,
        )
        .unwrap();
        let dish = recognition.into_dish();
        assert_eq!(dish.name, "水煮鱼");
        assert_eq!(dish.spicy_level, 3);
        assert_eq!(dish.price, 45.0);
        assert!(dish.is_hot_dish());
    }
}
