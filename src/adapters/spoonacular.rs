use serde::Deserialize;
use serde_json::Value;

use crate::adapters::{decode_error, non_empty, SourceAdapter};
use crate::error::AggregatorError;
use crate::model::{NormalizedRecipe, RecipeSource};

/// Substituted when a search-result (summary) payload carries no instruction
/// text; the full text is only present on detail lookups.
pub const SUMMARY_INSTRUCTIONS_FALLBACK: &str =
    "Instructions are available in the full recipe view.";

const AREA_FALLBACK: &str = "Various";
const CATEGORY_FALLBACK: &str = "General";

pub struct SpoonacularAdapter;

/// A Spoonacular recipe object. Search results only populate `id`, `title`
/// and `image`; detail lookups fill in the rest.
#[derive(Debug, Deserialize)]
pub struct SpoonacularRecipe {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub cuisines: Vec<String>,
    #[serde(rename = "dishTypes", default)]
    pub dish_types: Vec<String>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(rename = "extendedIngredients", default)]
    pub extended_ingredients: Vec<ExtendedIngredient>,
}

/// One entry of `extendedIngredients`; `original` is the preformatted
/// display line ("2 cups of flour").
#[derive(Debug, Deserialize)]
pub struct ExtendedIngredient {
    pub original: String,
}

/// Map a Spoonacular recipe to the canonical recipe shape.
pub fn adapt_recipe(recipe: &SpoonacularRecipe) -> NormalizedRecipe {
    NormalizedRecipe {
        id: recipe.id.to_string(),
        title: recipe.title.clone(),
        image: non_empty(recipe.image.as_deref()).map(String::from),
        area: join_tags(&recipe.cuisines, AREA_FALLBACK),
        category: join_tags(&recipe.dish_types, CATEGORY_FALLBACK),
        instructions: non_empty(recipe.instructions.as_deref())
            .unwrap_or(SUMMARY_INSTRUCTIONS_FALLBACK)
            .to_string(),
        // Spoonacular details don't carry a direct video link
        youtube_url: None,
        ingredients_list: recipe
            .extended_ingredients
            .iter()
            .map(|ing| ing.original.trim().to_string())
            .collect(),
        source: RecipeSource::Spoonacular,
    }
}

fn join_tags(tags: &[String], fallback: &str) -> String {
    let joined = tags
        .iter()
        .filter_map(|tag| non_empty(Some(tag.as_str())))
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        fallback.to_string()
    } else {
        joined
    }
}

impl SourceAdapter for SpoonacularAdapter {
    fn source(&self) -> RecipeSource {
        RecipeSource::Spoonacular
    }

    fn adapt_value(&self, payload: &Value) -> Result<NormalizedRecipe, AggregatorError> {
        let recipe: SpoonacularRecipe = serde_json::from_value(payload.clone())
            .map_err(|e| decode_error(self.source(), e))?;
        Ok(adapt_recipe(&recipe))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn recipe(payload: Value) -> SpoonacularRecipe {
        serde_json::from_value(payload).unwrap()
    }

    #[test]
    fn test_detail_payload_passes_through() {
        let recipe = recipe(json!({
            "id": 716429,
            "title": "Pasta with Garlic",
            "image": "https://img.spoonacular.com/recipes/716429-556x370.jpg",
            "cuisines": ["Mediterranean", "Italian"],
            "dishTypes": ["lunch", "main course"],
            "instructions": "Boil the pasta. Add the garlic.",
            "extendedIngredients": [
                { "original": "1 lb pasta" },
                { "original": "4 cloves garlic, minced" }
            ]
        }));

        let normalized = adapt_recipe(&recipe);
        assert_eq!(normalized.id, "716429");
        assert_eq!(normalized.source, RecipeSource::Spoonacular);
        assert_eq!(normalized.area, "Mediterranean, Italian");
        assert_eq!(normalized.category, "lunch, main course");
        assert_eq!(normalized.instructions, "Boil the pasta. Add the garlic.");
        assert_eq!(
            normalized.ingredients_list,
            vec!["1 lb pasta", "4 cloves garlic, minced"]
        );
        assert_eq!(normalized.youtube_url, None);
    }

    #[test]
    fn test_summary_payload_gets_sentinel_instructions() {
        let recipe = recipe(json!({
            "id": 642583,
            "title": "Farfalle with Peas",
            "image": "https://img.spoonacular.com/recipes/642583-312x231.jpg"
        }));

        let normalized = adapt_recipe(&recipe);
        assert_eq!(normalized.instructions, SUMMARY_INSTRUCTIONS_FALLBACK);
        assert_ne!(normalized.instructions, "");
    }

    #[test]
    fn test_empty_tag_lists_fall_back() {
        let recipe = recipe(json!({
            "id": 1,
            "title": "Plain",
            "cuisines": [],
            "dishTypes": [""]
        }));

        let normalized = adapt_recipe(&recipe);
        assert_eq!(normalized.area, "Various");
        assert_eq!(normalized.category, "General");
    }

    #[test]
    fn test_ingredient_count_is_preserved() {
        let recipe = recipe(json!({
            "id": 2,
            "title": "Counted",
            "extendedIngredients": [
                { "original": "a" },
                { "original": "b" },
                { "original": "c" }
            ]
        }));

        assert_eq!(adapt_recipe(&recipe).ingredients_list.len(), 3);
    }
}
