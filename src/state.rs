use crate::model::Recipe;

/// The three UI slots a search session owns. All mutation goes through
/// [`SearchState::apply`], so overlapping searches resolve by event order
/// (last writer wins).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<Recipe>,
    pub loading: bool,
}

/// Events driving the search state machine.
#[derive(Debug)]
pub enum SearchEvent {
    /// A non-empty query was submitted.
    Submit { query: String },
    /// The lookup resolved; an empty list means "no matches".
    Success { recipes: Vec<Recipe> },
    /// The lookup failed; presented identically to "no matches".
    Failure,
}

impl SearchState {
    pub fn apply(&mut self, event: SearchEvent) {
        match event {
            SearchEvent::Submit { query } => {
                self.query = query;
                self.results.clear();
                self.loading = true;
            }
            SearchEvent::Success { recipes } => {
                self.results = recipes;
                self.loading = false;
            }
            SearchEvent::Failure => {
                self.results.clear();
                self.loading = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: format!("Recipe {id}"),
            country: String::new(),
            image: String::new(),
            ingredients: vec![],
            instructions: String::new(),
            youtube: None,
            youtube_embed: None,
        }
    }

    #[test]
    fn test_submit_clears_results_and_sets_loading() {
        let mut state = SearchState::default();
        state.results = vec![recipe("old")];

        state.apply(SearchEvent::Submit {
            query: "pasta".to_string(),
        });

        assert_eq!(state.query, "pasta");
        assert!(state.results.is_empty());
        assert!(state.loading);
    }

    #[test]
    fn test_success_replaces_results_and_clears_loading() {
        let mut state = SearchState::default();
        state.apply(SearchEvent::Submit {
            query: "soup".to_string(),
        });
        state.apply(SearchEvent::Success {
            recipes: vec![recipe("1"), recipe("2")],
        });

        assert_eq!(state.results.len(), 2);
        assert!(!state.loading);
    }

    #[test]
    fn test_failure_leaves_empty_idle_state() {
        let mut state = SearchState::default();
        state.apply(SearchEvent::Submit {
            query: "soup".to_string(),
        });
        state.apply(SearchEvent::Failure);

        assert!(state.results.is_empty());
        assert!(!state.loading);
    }

    #[test]
    fn test_overlapping_lookups_last_writer_wins() {
        // Two submits, then the first lookup resolves after the second.
        let mut state = SearchState::default();
        state.apply(SearchEvent::Submit {
            query: "first".to_string(),
        });
        state.apply(SearchEvent::Submit {
            query: "second".to_string(),
        });
        state.apply(SearchEvent::Success {
            recipes: vec![recipe("second-hit")],
        });
        state.apply(SearchEvent::Success {
            recipes: vec![recipe("first-hit")],
        });

        // The late resolution owns the slot, query text notwithstanding.
        assert_eq!(state.query, "second");
        assert_eq!(state.results[0].id, "first-hit");
        assert!(!state.loading);
    }
}
