// src/cli/mod.rs — CLI definition (clap derive)

pub mod favorites;
pub mod render;
pub mod search;
pub mod status;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "aichef", about = "Find, refine, and save recipes", version)]
pub struct Cli {
    /// User whose favorites to use (overrides [user] name in config)
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search recipes, then refine the results conversationally
    Search {
        /// What you feel like eating
        #[arg(required = true, trailing_var_arg = true)]
        query: Vec<String>,
    },
    /// Manage saved favorites
    Favorites {
        #[command(subcommand)]
        action: Option<FavoritesAction>,
    },
    /// Check the search service and local favorites
    Status,
}

#[derive(Subcommand, Clone)]
pub enum FavoritesAction {
    /// List saved recipes (default)
    List,
    /// Show one saved recipe
    Show { id: String },
    /// Remove a recipe from favorites
    Remove { id: String },
}
