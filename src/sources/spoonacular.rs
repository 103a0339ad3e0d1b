use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use serde::Deserialize;

use crate::adapters::spoonacular::{adapt_recipe, SpoonacularRecipe};
use crate::config::SourcesConfig;
use crate::error::AggregatorError;
use crate::model::{NormalizedRecipe, RecipeSource};
use crate::sources::{http_client, RecipeProvider};

pub const SPOONACULAR_BASE_URL: &str = "https://api.spoonacular.com";

/// Client for the Spoonacular API. Authenticates with an `apiKey` query
/// parameter on every request.
pub struct SpoonacularClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    results: Vec<SpoonacularRecipe>,
}

impl SpoonacularClient {
    pub fn new(api_key: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self::with_base_url(SPOONACULAR_BASE_URL, api_key, timeout)
    }

    pub fn with_base_url(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: http_client(timeout),
            base_url,
            api_key: api_key.into(),
        }
    }

    /// Build a client from configuration; `None` when no key is set.
    pub fn from_config(config: &SourcesConfig) -> Option<Self> {
        let api_key = config.spoonacular_api_key.clone()?;
        let timeout = Some(config.request_timeout());
        Some(match &config.spoonacular_base_url {
            Some(base) => Self::with_base_url(base.clone(), api_key, timeout),
            None => Self::new(api_key, timeout),
        })
    }

    /// Search recipes by free-text query. Results are summary payloads, so
    /// their `instructions` carry the sentinel until `information` is
    /// called for the full detail.
    pub async fn search(&self, query: &str) -> Result<Vec<NormalizedRecipe>, AggregatorError> {
        let envelope: SearchEnvelope = self
            .client
            .get(format!("{}/recipes/complexSearch", self.base_url))
            .query(&[("query", query), ("apiKey", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        debug!(
            "Spoonacular returned {} results for {query:?}",
            envelope.results.len()
        );
        Ok(envelope.results.iter().map(adapt_recipe).collect())
    }

    /// Full detail lookup for one recipe id.
    pub async fn information(&self, id: &str) -> Result<NormalizedRecipe, AggregatorError> {
        let recipe: SpoonacularRecipe = self
            .client
            .get(format!("{}/recipes/{id}/information", self.base_url))
            .query(&[("apiKey", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(adapt_recipe(&recipe))
    }
}

#[async_trait]
impl RecipeProvider for SpoonacularClient {
    fn source(&self) -> RecipeSource {
        RecipeSource::Spoonacular
    }

    async fn search(&self, query: &str) -> Result<Vec<NormalizedRecipe>, AggregatorError> {
        SpoonacularClient::search(self, query).await
    }
}
