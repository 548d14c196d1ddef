// src/main.rs — AIChef entry point

use clap::Parser;
use std::sync::Arc;

use aichef::cli::{Cli, Commands};
use aichef::favorites::FavoritesStore;
use aichef::infra::config::Config;
use aichef::infra::logger;
use aichef::search::{HttpSearchService, SearchService};
use aichef::storage::SqliteStore;

#[tokio::main]
async fn main() {
    // Initialize logging (respects RUST_LOG)
    logger::init_logging("warn");

    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load config (falls back to defaults if no config.toml)
    let config = if let Some(ref path) = cli.config {
        Config::load_from(std::path::Path::new(path))?
    } else {
        Config::load()?
    };

    let user = config.identity(cli.user.as_deref());
    let storage = SqliteStore::open(&config.storage.resolved_db_path())?;
    let favorites = FavoritesStore::with_namespace(storage, config.storage.namespace.clone());
    let service = HttpSearchService::new(&config.service);

    match cli.command {
        Commands::Search { query } => {
            let service: Arc<dyn SearchService> = Arc::new(service);
            aichef::cli::search::run_search(service, &favorites, user, &query.join(" ")).await
        }
        Commands::Favorites { action } => {
            aichef::cli::favorites::run_favorites(action, &favorites, &user)?;
            Ok(())
        }
        Commands::Status => {
            aichef::cli::status::show_status(&config, &service, &favorites, &user).await
        }
    }
}
