use log::error;

use crate::client::MealDbClient;
use crate::model::Recipe;
use crate::normalizer::normalize_all;
use crate::state::{SearchEvent, SearchState};

/// Drives the search pipeline and owns the UI state slots.
///
/// Lookup failures are logged and swallowed here: the user-visible outcome
/// is an empty result set, indistinguishable from "no matches". Library
/// callers who want the error should use [`MealDbClient::search`] or
/// [`crate::search_recipes`] instead.
pub struct Dispatcher {
    client: MealDbClient,
    state: SearchState,
}

impl Dispatcher {
    pub fn new(client: MealDbClient) -> Self {
        Self {
            client,
            state: SearchState::default(),
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn results(&self) -> &[Recipe] {
        &self.state.results
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    /// Run one search action. A query that is empty after trimming is a
    /// no-op: no request goes out and the state is untouched.
    pub async fn search(&mut self, query: &str) -> &[Recipe] {
        if query.trim().is_empty() {
            return &self.state.results;
        }

        self.state.apply(SearchEvent::Submit {
            query: query.to_string(),
        });

        match self.client.search(query).await {
            Ok(raws) => {
                let recipes = normalize_all(raws);
                self.state.apply(SearchEvent::Success { recipes });
            }
            Err(err) => {
                error!("Error fetching recipes: {err}");
                self.state.apply(SearchEvent::Failure);
            }
        }

        &self.state.results
    }
}
