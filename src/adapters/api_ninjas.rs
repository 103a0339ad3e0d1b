use serde::Deserialize;
use serde_json::Value;

use crate::adapters::{decode_error, non_empty, SourceAdapter};
use crate::error::AggregatorError;
use crate::model::{NormalizedRecipe, RecipeSource};

/// API-Ninjas records have no native id; ids are slugs derived from the
/// title, namespaced so they can never collide with the numeric ids of the
/// other sources.
pub const API_NINJAS_ID_PREFIX: &str = "ninja-";

const FIELD_FALLBACK: &str = "N/A";

pub struct ApiNinjasAdapter;

/// A recipe record as returned by the API-Ninjas recipe endpoint.
/// `ingredients` is a single pipe-delimited string.
#[derive(Debug, Deserialize)]
pub struct ApiNinjasRecipe {
    pub title: String,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub servings: Option<String>,
    #[serde(default)]
    pub instructions: String,
}

/// Deterministic id for a title: whitespace runs become hyphens under the
/// namespace prefix, so the same title always yields the same id.
pub fn slug_id(title: &str) -> String {
    let slug = title.split_whitespace().collect::<Vec<_>>().join("-");
    format!("{API_NINJAS_ID_PREFIX}{slug}")
}

/// Map an API-Ninjas recipe to the canonical recipe shape.
pub fn adapt_recipe(recipe: &ApiNinjasRecipe) -> NormalizedRecipe {
    NormalizedRecipe {
        id: slug_id(&recipe.title),
        title: recipe.title.clone(),
        // The endpoint serves no imagery
        image: None,
        area: FIELD_FALLBACK.to_string(),
        category: non_empty(recipe.servings.as_deref())
            .unwrap_or(FIELD_FALLBACK)
            .to_string(),
        instructions: recipe.instructions.clone(),
        youtube_url: None,
        ingredients_list: recipe
            .ingredients
            .split('|')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect(),
        source: RecipeSource::ApiNinjas,
    }
}

impl SourceAdapter for ApiNinjasAdapter {
    fn source(&self) -> RecipeSource {
        RecipeSource::ApiNinjas
    }

    fn adapt_value(&self, payload: &Value) -> Result<NormalizedRecipe, AggregatorError> {
        let recipe: ApiNinjasRecipe = serde_json::from_value(payload.clone())
            .map_err(|e| decode_error(self.source(), e))?;
        Ok(adapt_recipe(&recipe))
    }
}
