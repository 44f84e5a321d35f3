use log::debug;
use url::Url;

use crate::model::{RawMeal, Recipe, INGREDIENT_SLOTS};

/// Flatten one raw meal record into a display-ready [`Recipe`].
///
/// Pure and total: malformed fields degrade to empty or absent values,
/// never to an error.
pub fn normalize(raw: &RawMeal) -> Recipe {
    let mut ingredients = Vec::new();
    for (ingredient_key, measure_key) in INGREDIENT_SLOTS {
        let Some(ingredient) = raw.slot(ingredient_key) else {
            continue;
        };
        if ingredient.trim().is_empty() {
            continue;
        }
        let measure = raw.slot(measure_key).unwrap_or("");
        ingredients.push(format!("{ingredient} - {measure}"));
    }

    let youtube = raw.youtube.clone().filter(|link| !link.is_empty());
    let youtube_embed = youtube.as_deref().and_then(embed_url);

    Recipe {
        id: raw.id.clone().unwrap_or_default(),
        title: raw.name.clone().unwrap_or_default(),
        country: raw.area.clone().unwrap_or_default(),
        image: raw.thumbnail.clone().unwrap_or_default(),
        ingredients,
        instructions: raw.instructions.clone().unwrap_or_default(),
        youtube,
        youtube_embed,
    }
}

/// Normalize a whole result page, preserving service order.
pub fn normalize_all(raws: Vec<RawMeal>) -> Vec<Recipe> {
    let recipes: Vec<Recipe> = raws.iter().map(normalize).collect();
    debug!("normalized {} recipe(s)", recipes.len());
    recipes
}

/// Derive an embeddable player URL from a watch link. A link that does not
/// parse as a URL, or carries no `v` parameter, yields no embed.
fn embed_url(link: &str) -> Option<String> {
    let parsed = Url::parse(link).ok()?;
    parsed
        .query_pairs()
        .find_map(|(key, value)| (key == "v").then(|| value.into_owned()))
        .filter(|video_id| !video_id.is_empty())
        .map(|video_id| format!("https://www.youtube.com/embed/{video_id}"))
}
