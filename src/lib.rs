pub mod client;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod model;
pub mod normalizer;
pub mod render;
pub mod state;

use log::debug;

pub use client::{MealDbClient, DEFAULT_ENDPOINT};
pub use config::LookupConfig;
pub use dispatcher::Dispatcher;
pub use error::LookupError;
pub use model::{RawMeal, Recipe, SearchResponse};
pub use normalizer::{normalize, normalize_all};
pub use render::{render_recipe, render_results};
pub use state::{SearchEvent, SearchState};

/// Search for recipes matching `query` and return them normalized.
///
/// Uses the configured endpoint and timeout (config file / environment,
/// falling back to the public TheMealDB endpoint). Errors propagate to the
/// caller; the swallow-and-log policy belongs to [`Dispatcher`].
pub async fn search_recipes(query: &str) -> Result<Vec<Recipe>, LookupError> {
    let config = LookupConfig::load()?;
    search_recipes_with_config(query, &config).await
}

/// Search for recipes using an explicit configuration.
pub async fn search_recipes_with_config(
    query: &str,
    config: &LookupConfig,
) -> Result<Vec<Recipe>, LookupError> {
    let client = MealDbClient::from_config(config)?;
    let raws = client.search(query).await?;
    let recipes = normalize_all(raws);
    debug!("{recipes:#?}");
    Ok(recipes)
}
