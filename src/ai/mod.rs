pub mod client;
pub mod prompts;
pub mod recommend;
pub mod resolver;

pub use client::{ChatMessage, ChatRequest, CompletionClient, HttpCompletionClient};
pub use recommend::{
    AiMenuService, AiStrategy, DishRecognition, MenuRecommendationResult, assemble_menu,
    generate_via_ai, parse_recommendation, strip_markdown,
};
pub use resolver::{DishResolver, ExactNameResolver, FuzzyNameResolver};
