use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Dish not found: {0}")]
    DishNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Dish catalog is empty")]
    EmptyCatalog,

    #[error("Recommendation failed: {0}")]
    Recommendation(#[from] RecommendationError),
}

/// Failures of the AI-assisted path. The deterministic engine has no error channel.
#[derive(Debug, Error)]
pub enum RecommendationError {
    #[error("Input payload is empty")]
    EmptyInput,

    #[error("Network failure (status {status:?}): {body}")]
    NetworkFailure { status: Option<u16>, body: String },

    #[error("AI returned an invalid response envelope")]
    InvalidResponseEnvelope,

    #[error("Failed to parse recommendation: {0}")]
    RecommendationParseFailure(String),
}

pub type Result<T> = std::result::Result<T, MenuError>;
