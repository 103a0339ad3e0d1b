use thiserror::Error;

use crate::model::RecipeSource;

/// Errors that can occur while fetching and normalizing recipes
#[derive(Error, Debug)]
pub enum AggregatorError {
    /// HTTP request to a recipe source failed
    #[error("Failed to fetch from recipe source: {0}")]
    Fetch(#[from] reqwest::Error),

    /// A payload did not match the expected source shape
    #[error("Failed to decode {source} payload: {error}")]
    Decode {
        source: RecipeSource,
        #[source]
        error: serde_json::Error,
    },

    /// No source could resolve the given recipe id
    #[error("No recipe found for id {0}")]
    RecipeNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
