use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::adapters::{decode_error, non_empty, SourceAdapter};
use crate::error::AggregatorError;
use crate::model::{NormalizedRecipe, RecipeSource};

/// TheMealDB stores ingredients in numbered field pairs with no explicit
/// count; `strIngredient1..=20` is the full range the API ever populates.
pub const INGREDIENT_SLOTS: usize = 20;

const AREA_FALLBACK: &str = "International";
const CATEGORY_FALLBACK: &str = "General";

pub struct MealDbAdapter;

/// A meal record as returned by TheMealDB lookup/search endpoints.
///
/// The numbered `strIngredientN`/`strMeasureN` pairs land in `extra` so the
/// adapter can probe the full range without twenty named fields.
#[derive(Debug, Deserialize)]
pub struct MealDbMeal {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub title: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strArea", default)]
    pub area: Option<String>,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strYoutube", default)]
    pub youtube: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl MealDbMeal {
    /// Non-empty string value of a numbered field, if present. The API
    /// pads unused slots with empty strings or nulls.
    fn slot(&self, key: &str) -> Option<&str> {
        non_empty(self.extra.get(key).and_then(Value::as_str))
    }
}

/// Map a TheMealDB meal to the canonical recipe shape.
pub fn adapt_meal(meal: &MealDbMeal) -> NormalizedRecipe {
    NormalizedRecipe {
        id: meal.id.clone(),
        title: meal.title.clone(),
        image: non_empty(meal.thumbnail.as_deref()).map(String::from),
        area: non_empty(meal.area.as_deref())
            .unwrap_or(AREA_FALLBACK)
            .to_string(),
        category: non_empty(meal.category.as_deref())
            .unwrap_or(CATEGORY_FALLBACK)
            .to_string(),
        instructions: meal.instructions.clone().unwrap_or_default(),
        youtube_url: non_empty(meal.youtube.as_deref()).map(String::from),
        ingredients_list: ingredient_lines(meal),
        source: RecipeSource::TheMealDb,
    }
}

/// Probe every numbered slot and skip the empty ones. A blank measure still
/// keeps the entry; only an empty ingredient name drops a slot.
fn ingredient_lines(meal: &MealDbMeal) -> Vec<String> {
    let mut lines = Vec::new();
    for i in 1..=INGREDIENT_SLOTS {
        let Some(name) = meal.slot(&format!("strIngredient{i}")) else {
            continue;
        };
        match meal.slot(&format!("strMeasure{i}")) {
            Some(measure) => lines.push(format!("{measure} {name}")),
            None => lines.push(name.to_string()),
        }
    }
    lines
}

impl SourceAdapter for MealDbAdapter {
    fn source(&self) -> RecipeSource {
        RecipeSource::TheMealDb
    }

    fn adapt_value(&self, payload: &Value) -> Result<NormalizedRecipe, AggregatorError> {
        let meal: MealDbMeal = serde_json::from_value(payload.clone())
            .map_err(|e| decode_error(self.source(), e))?;
        Ok(adapt_meal(&meal))
    }
}
