use std::time::Duration;

use async_trait::async_trait;

use crate::error::AggregatorError;
use crate::model::{NormalizedRecipe, RecipeSource};

pub mod api_ninjas;
pub mod mealdb;
pub mod spoonacular;

pub use self::api_ninjas::{ApiNinjasClient, API_NINJAS_BASE_URL};
pub use self::mealdb::{MealDbClient, MEALDB_BASE_URL};
pub use self::spoonacular::{SpoonacularClient, SPOONACULAR_BASE_URL};

pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub(crate) const USER_AGENT: &str = "Mozilla/5.0 (compatible; RecipeAggregatorBot/1.0)";

/// Unified search seam over the three recipe sources. Detail lookups stay
/// on the concrete clients because their shapes are source-specific.
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    fn source(&self) -> RecipeSource;

    /// Search by free-text query, returning already-normalized records.
    async fn search(&self, query: &str) -> Result<Vec<NormalizedRecipe>, AggregatorError>;
}

pub(crate) fn http_client(timeout: Option<Duration>) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
        .user_agent(USER_AGENT)
        .build()
        .expect("Failed to create HTTP client")
}
