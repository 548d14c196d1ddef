// src/infra/errors.rs — Error types for AIChef

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChefError {
    #[error("Recipe '{id}' not found")]
    RecipeNotFound { id: String },

    // Infra
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for ChefError {
    fn from(e: toml::de::Error) -> Self {
        ChefError::Config(e.to_string())
    }
}
