use serde_json::Value;

use crate::error::AggregatorError;
use crate::model::{NormalizedRecipe, RecipeSource};

pub mod api_ninjas;
pub mod mealdb;
pub mod spoonacular;

pub use self::api_ninjas::{ApiNinjasAdapter, ApiNinjasRecipe, API_NINJAS_ID_PREFIX};
pub use self::mealdb::{MealDbAdapter, MealDbMeal, INGREDIENT_SLOTS};
pub use self::spoonacular::{
    SpoonacularAdapter, SpoonacularRecipe, SUMMARY_INSTRUCTIONS_FALLBACK,
};

/// A pure mapping from one external payload shape to the canonical recipe.
///
/// Adapting a typed payload never fails; decoding a raw JSON value into the
/// source's payload type is the only fallible step, and a mismatch there is
/// a caller contract violation rather than a condition to recover from.
pub trait SourceAdapter {
    fn source(&self) -> RecipeSource;
    fn adapt_value(&self, payload: &Value) -> Result<NormalizedRecipe, AggregatorError>;
}

/// Dispatch a raw JSON payload to the adapter matching the given source tag.
pub fn adapt(source: RecipeSource, payload: &Value) -> Result<NormalizedRecipe, AggregatorError> {
    match source {
        RecipeSource::TheMealDb => MealDbAdapter.adapt_value(payload),
        RecipeSource::Spoonacular => SpoonacularAdapter.adapt_value(payload),
        RecipeSource::ApiNinjas => ApiNinjasAdapter.adapt_value(payload),
    }
}

/// Treat blank strings the same as absent fields when applying fallbacks.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

pub(crate) fn decode_error(source: RecipeSource, error: serde_json::Error) -> AggregatorError {
    AggregatorError::Decode { source, error }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_adapt_dispatches_by_source_tag() {
        let payload = json!({
            "title": "Pancakes",
            "ingredients": "2 eggs|1 cup flour",
            "servings": "4 Servings",
            "instructions": "Mix. Fry."
        });

        let recipe = adapt(RecipeSource::ApiNinjas, &payload).unwrap();
        assert_eq!(recipe.source, RecipeSource::ApiNinjas);
        assert_eq!(recipe.title, "Pancakes");
    }

    #[test]
    fn test_adapt_rejects_mismatched_shape() {
        let payload = json!({ "unexpected": true });
        let result = adapt(RecipeSource::TheMealDb, &payload);
        assert!(matches!(
            result,
            Err(AggregatorError::Decode {
                source: RecipeSource::TheMealDb,
                ..
            })
        ));
    }

    #[test]
    fn test_non_empty_filters_blank_strings() {
        assert_eq!(non_empty(Some("  ")), None);
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some(" Beef ")), Some("Beef"));
    }
}
