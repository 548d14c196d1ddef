// src/cli/status.rs — `aichef status`

use crate::core::types::UserIdentity;
use crate::favorites::FavoritesStore;
use crate::infra::config::Config;
use crate::search::HttpSearchService;
use crate::storage::KeyValueStore;

pub async fn show_status<S: KeyValueStore>(
    config: &Config,
    service: &HttpSearchService,
    favorites: &FavoritesStore<S>,
    user: &UserIdentity,
) -> anyhow::Result<()> {
    println!("aichef v{}", env!("CARGO_PKG_VERSION"));

    let health = match service.health().await {
        Ok(true) => "ok".to_string(),
        Ok(false) => "responding with errors".to_string(),
        Err(e) => format!("unreachable ({e})"),
    };
    println!("  Service:   {} [{health}]", service.base_url());
    println!("  User:      {user}");
    println!(
        "  Favorites: {} saved",
        favorites.list_favorites(user).len()
    );
    println!(
        "  Database:  {}",
        config.storage.resolved_db_path().display()
    );
    Ok(())
}
