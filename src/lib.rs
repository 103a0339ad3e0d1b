pub mod adapters;
pub mod config;
pub mod error;
pub mod favourites;
pub mod instructions;
pub mod model;
pub mod sources;

use futures::future::join_all;
use log::warn;

pub use crate::adapters::{
    adapt, SourceAdapter, API_NINJAS_ID_PREFIX, SUMMARY_INSTRUCTIONS_FALLBACK,
};
pub use crate::config::SourcesConfig;
pub use crate::error::AggregatorError;
pub use crate::favourites::Favourites;
pub use crate::instructions::parse_instructions;
pub use crate::model::{NormalizedRecipe, RecipeSource};
pub use crate::sources::{ApiNinjasClient, MealDbClient, RecipeProvider, SpoonacularClient};

/// Search every configured source concurrently and merge whichever succeed.
///
/// Sources without a configured key are skipped; failing sources are logged
/// and dropped. Results concatenate in fixed order (TheMealDB, Spoonacular,
/// API-Ninjas) with no deduplication across sources.
pub async fn search_all(query: &str, config: &SourcesConfig) -> Vec<NormalizedRecipe> {
    let mut providers: Vec<Box<dyn RecipeProvider>> =
        vec![Box::new(MealDbClient::from_config(config))];
    if let Some(client) = SpoonacularClient::from_config(config) {
        providers.push(Box::new(client));
    }
    if let Some(client) = ApiNinjasClient::from_config(config) {
        providers.push(Box::new(client));
    }

    let results = join_all(providers.iter().map(|provider| provider.search(query))).await;

    let mut merged = Vec::new();
    for (provider, result) in providers.iter().zip(results) {
        match result {
            Ok(recipes) => merged.extend(recipes),
            Err(e) => warn!("Skipping {} results: {e}", provider.source()),
        }
    }
    merged
}

/// Resolve a persisted recipe id back to a full record.
///
/// Numeric ids try TheMealDB first and fall back to Spoonacular; slug ids
/// under the API-Ninjas namespace are re-queried by title and matched on
/// their regenerated id. A miss on every applicable source yields
/// [`AggregatorError::RecipeNotFound`].
pub async fn fetch_recipe_details(
    id: &str,
    config: &SourcesConfig,
) -> Result<NormalizedRecipe, AggregatorError> {
    if !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()) {
        let mealdb = MealDbClient::from_config(config);
        match mealdb.lookup(id).await {
            Ok(Some(recipe)) => return Ok(recipe),
            Ok(None) => {}
            Err(e) => warn!("TheMealDB lookup for {id} failed: {e}"),
        }

        if let Some(spoonacular) = SpoonacularClient::from_config(config) {
            match spoonacular.information(id).await {
                Ok(recipe) => return Ok(recipe),
                Err(e) => warn!("Spoonacular lookup for {id} failed: {e}"),
            }
        }
    } else if let Some(slug) = id.strip_prefix(API_NINJAS_ID_PREFIX) {
        if let Some(client) = ApiNinjasClient::from_config(config) {
            let query = slug.replace('-', " ");
            match client.search(&query).await {
                Ok(results) => {
                    if let Some(recipe) = results.into_iter().find(|recipe| recipe.id == id) {
                        return Ok(recipe);
                    }
                }
                Err(e) => warn!("API-Ninjas lookup for {id} failed: {e}"),
            }
        }
    }

    Err(AggregatorError::RecipeNotFound(id.to_string()))
}
