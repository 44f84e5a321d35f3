use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// The `search.php` response envelope. The service returns `"meals": null`
/// (or omits the key) when nothing matched.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub meals: Option<Vec<RawMeal>>,
}

/// One meal record as returned by the service. Every field may be null or
/// absent; the numbered ingredient/measure pairs are collected loose and
/// read through [`INGREDIENT_SLOTS`].
#[derive(Debug, Clone, Deserialize)]
pub struct RawMeal {
    #[serde(rename = "idMeal")]
    pub id: Option<String>,
    #[serde(rename = "strMeal")]
    pub name: Option<String>,
    #[serde(rename = "strArea")]
    pub area: Option<String>,
    #[serde(rename = "strMealThumb")]
    pub thumbnail: Option<String>,
    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,
    #[serde(rename = "strYoutube")]
    pub youtube: Option<String>,
    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

/// The 20 (ingredient-key, measure-key) pairs the service uses instead of an
/// array. Slot order is the display order.
pub const INGREDIENT_SLOTS: [(&str, &str); 20] = [
    ("strIngredient1", "strMeasure1"),
    ("strIngredient2", "strMeasure2"),
    ("strIngredient3", "strMeasure3"),
    ("strIngredient4", "strMeasure4"),
    ("strIngredient5", "strMeasure5"),
    ("strIngredient6", "strMeasure6"),
    ("strIngredient7", "strMeasure7"),
    ("strIngredient8", "strMeasure8"),
    ("strIngredient9", "strMeasure9"),
    ("strIngredient10", "strMeasure10"),
    ("strIngredient11", "strMeasure11"),
    ("strIngredient12", "strMeasure12"),
    ("strIngredient13", "strMeasure13"),
    ("strIngredient14", "strMeasure14"),
    ("strIngredient15", "strMeasure15"),
    ("strIngredient16", "strMeasure16"),
    ("strIngredient17", "strMeasure17"),
    ("strIngredient18", "strMeasure18"),
    ("strIngredient19", "strMeasure19"),
    ("strIngredient20", "strMeasure20"),
];

impl RawMeal {
    /// Look up a numbered slot field by its exact key. JSON nulls and
    /// non-string values read as absent.
    pub fn slot(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }
}

/// A flattened, display-ready recipe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub country: String,
    pub image: String,
    /// `"<ingredient> - <measure>"` per populated slot, in slot order.
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub youtube: Option<String>,
    /// Embeddable player URL, derived from `youtube` when it carries a
    /// `v` query parameter.
    pub youtube_embed: Option<String>,
}
