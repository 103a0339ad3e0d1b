use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use serde::Deserialize;

use crate::adapters::mealdb::{adapt_meal, MealDbMeal};
use crate::config::SourcesConfig;
use crate::error::AggregatorError;
use crate::model::{NormalizedRecipe, RecipeSource};
use crate::sources::{http_client, RecipeProvider};

pub const MEALDB_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Client for TheMealDB JSON API. The free tier is keyless.
pub struct MealDbClient {
    client: reqwest::Client,
    base_url: String,
}

/// Every meal endpoint wraps its payload the same way; misses are
/// `meals: null` rather than an empty array.
#[derive(Debug, Deserialize)]
struct MealsEnvelope {
    meals: Option<Vec<MealDbMeal>>,
}

#[derive(Debug, Deserialize)]
struct CategoriesEnvelope {
    categories: Vec<CategoryEntry>,
}

#[derive(Debug, Deserialize)]
struct CategoryEntry {
    #[serde(rename = "strCategory")]
    name: String,
}

impl MealDbClient {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self::with_base_url(MEALDB_BASE_URL, timeout)
    }

    pub fn with_base_url(base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: http_client(timeout),
            base_url,
        }
    }

    pub fn from_config(config: &SourcesConfig) -> Self {
        let timeout = Some(config.request_timeout());
        match &config.mealdb_base_url {
            Some(base) => Self::with_base_url(base.clone(), timeout),
            None => Self::new(timeout),
        }
    }

    async fn meals(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<MealDbMeal>, AggregatorError> {
        let envelope: MealsEnvelope = self
            .client
            .get(format!("{}/{path}", self.base_url))
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(envelope.meals.unwrap_or_default())
    }

    /// Search meals by name or ingredient.
    pub async fn search(&self, query: &str) -> Result<Vec<NormalizedRecipe>, AggregatorError> {
        let meals = self.meals("search.php", &[("s", query)]).await?;
        debug!("TheMealDB returned {} meals for {query:?}", meals.len());
        Ok(meals.iter().map(adapt_meal).collect())
    }

    /// List meals whose name starts with the given letter.
    pub async fn search_by_letter(
        &self,
        letter: char,
    ) -> Result<Vec<NormalizedRecipe>, AggregatorError> {
        let letter = letter.to_string();
        let meals = self.meals("search.php", &[("f", letter.as_str())]).await?;
        Ok(meals.iter().map(adapt_meal).collect())
    }

    /// Look up one meal by id. Unknown ids resolve to `None`.
    pub async fn lookup(&self, id: &str) -> Result<Option<NormalizedRecipe>, AggregatorError> {
        let meals = self.meals("lookup.php", &[("i", id)]).await?;
        Ok(meals.first().map(adapt_meal))
    }

    /// Fetch a single random meal.
    pub async fn random(&self) -> Result<Option<NormalizedRecipe>, AggregatorError> {
        let meals = self.meals("random.php", &[]).await?;
        Ok(meals.first().map(adapt_meal))
    }

    /// Names of all meal categories.
    pub async fn categories(&self) -> Result<Vec<String>, AggregatorError> {
        let envelope: CategoriesEnvelope = self
            .client
            .get(format!("{}/categories.php", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(envelope.categories.into_iter().map(|c| c.name).collect())
    }

    /// All meals in a category, resolved to full records.
    ///
    /// The filter endpoint only returns id/title/thumbnail summaries, so
    /// each hit goes through `lookup`; failed lookups are logged and
    /// skipped rather than failing the whole listing.
    pub async fn search_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<NormalizedRecipe>, AggregatorError> {
        let summaries = self.meals("filter.php", &[("c", category)]).await?;
        let mut recipes = Vec::with_capacity(summaries.len());
        for summary in &summaries {
            match self.lookup(&summary.id).await {
                Ok(Some(recipe)) => recipes.push(recipe),
                Ok(None) => {}
                Err(e) => warn!("Skipping meal {}: {e}", summary.id),
            }
        }
        Ok(recipes)
    }
}

#[async_trait]
impl RecipeProvider for MealDbClient {
    fn source(&self) -> RecipeSource {
        RecipeSource::TheMealDb
    }

    async fn search(&self, query: &str) -> Result<Vec<NormalizedRecipe>, AggregatorError> {
        MealDbClient::search(self, query).await
    }
}
