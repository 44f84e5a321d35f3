use thiserror::Error;

/// Errors that can occur during recipe lookup operations
#[derive(Error, Debug)]
pub enum LookupError {
    /// Failed to reach the recipe service or decode its response
    #[error("Failed to query recipe service: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
