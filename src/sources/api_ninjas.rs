use std::time::Duration;

use async_trait::async_trait;
use log::debug;

use crate::adapters::api_ninjas::{adapt_recipe, ApiNinjasRecipe};
use crate::config::SourcesConfig;
use crate::error::AggregatorError;
use crate::model::{NormalizedRecipe, RecipeSource};
use crate::sources::{http_client, RecipeProvider};

pub const API_NINJAS_BASE_URL: &str = "https://api.api-ninjas.com";

/// Client for the API-Ninjas recipe endpoint. Authenticates with the
/// `X-Api-Key` header; responses are a bare JSON array.
pub struct ApiNinjasClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ApiNinjasClient {
    pub fn new(api_key: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self::with_base_url(API_NINJAS_BASE_URL, api_key, timeout)
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
        let api_key = config.api_ninjas_api_key.clone()?;
        let timeout = Some(config.request_timeout());
        Some(match &config.api_ninjas_base_url {
            Some(base) => Self::with_base_url(base.clone(), api_key, timeout),
            None => Self::new(api_key, timeout),
        })
    }

    /// Search recipes by free-text query.
    pub async fn search(&self, query: &str) -> Result<Vec<NormalizedRecipe>, AggregatorError> {
        let recipes: Vec<ApiNinjasRecipe> = self
            .client
            .get(format!("{}/v1/recipe", self.base_url))
            .header("X-Api-Key", self.api_key.as_str())
            .query(&[("query", query)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        debug!("API-Ninjas returned {} recipes for {query:?}", recipes.len());
        Ok(recipes.iter().map(adapt_recipe).collect())
    }
}

#[async_trait]
impl RecipeProvider for ApiNinjasClient {
    fn source(&self) -> RecipeSource {
        RecipeSource::ApiNinjas
    }

    async fn search(&self, query: &str) -> Result<Vec<NormalizedRecipe>, AggregatorError> {
        ApiNinjasClient::search(self, query).await
    }
}
