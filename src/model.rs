use std::fmt;

use serde::{Deserialize, Serialize};

/// Provenance tag for a normalized recipe. Detail lookups are
/// source-specific, so every record carries its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecipeSource {
    #[serde(rename = "TheMealDB")]
    TheMealDb,
    Spoonacular,
    #[serde(rename = "API-Ninjas")]
    ApiNinjas,
}

impl RecipeSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeSource::TheMealDb => "TheMealDB",
            RecipeSource::Spoonacular => "Spoonacular",
            RecipeSource::ApiNinjas => "API-Ninjas",
        }
    }
}

impl fmt::Display for RecipeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The canonical recipe every source adapter converges on.
///
/// `id`, `title` and `source` are always non-empty; `area` and `category`
/// fall back to per-source constants instead of ever being empty.
/// Serialized field names stay camelCase so the JSON shape matches what
/// display layers consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRecipe {
    pub id: String,
    pub title: String,
    pub image: Option<String>,
    pub area: String,
    pub category: String,
    /// Raw instruction text as supplied by the source; run it through
    /// [`crate::instructions::parse_instructions`] for display.
    pub instructions: String,
    pub youtube_url: Option<String>,
    /// Ingredient lines already married to their measurements, in order.
    pub ingredients_list: Vec<String>,
    pub source: RecipeSource,
}
