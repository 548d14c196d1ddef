// src/cli/favorites.rs — `aichef favorites` subcommands

use super::render;
use super::FavoritesAction;
use crate::core::types::{Recipe, UserIdentity};
use crate::favorites::FavoritesStore;
use crate::infra::errors::ChefError;
use crate::storage::KeyValueStore;

pub fn run_favorites<S: KeyValueStore>(
    action: Option<FavoritesAction>,
    favorites: &FavoritesStore<S>,
    user: &UserIdentity,
) -> Result<(), ChefError> {
    match action.unwrap_or(FavoritesAction::List) {
        FavoritesAction::List => {
            let saved = favorites.list_favorites(user);
            if saved.is_empty() {
                println!("No favorites saved for {user}.");
                return Ok(());
            }
            for recipe in &saved {
                println!("{:<12} {}", recipe.id, recipe.name);
            }
        }
        FavoritesAction::Show { id } => {
            let recipe = favorites.get_favorite(&id, user);
            print!("{}", render::render_detail(recipe.as_ref(), recipe.is_some()));
        }
        FavoritesAction::Remove { id } => {
            if !favorites.is_favorite(&id, user) {
                return Err(ChefError::RecipeNotFound { id });
            }
            // A dangling id has no record; a stub is enough to clear it.
            let recipe = favorites
                .get_favorite(&id, user)
                .unwrap_or_else(|| Recipe::new(id.as_str(), ""));
            favorites.toggle_favorite(&recipe, user);
            let label = if recipe.name.is_empty() { &recipe.id } else { &recipe.name };
            println!("Removed {label} from favorites.");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueStore, MemoryStore};

    #[test]
    fn test_remove_missing_is_not_found() {
        let store = FavoritesStore::new(MemoryStore::new());
        let err = run_favorites(
            Some(FavoritesAction::Remove { id: "nope".into() }),
            &store,
            &UserIdentity::Anonymous,
        )
        .unwrap_err();
        assert!(matches!(err, ChefError::RecipeNotFound { ref id } if id == "nope"));
    }

    #[test]
    fn test_remove_unfavorites() {
        let store = FavoritesStore::new(MemoryStore::new());
        let user = UserIdentity::named("ana");
        store.toggle_favorite(&Recipe::new("1", "Laksa"), &user);
        run_favorites(
            Some(FavoritesAction::Remove { id: "1".into() }),
            &store,
            &user,
        )
        .unwrap();
        assert!(!store.is_favorite("1", &user));
        assert!(store.saved_records(&user).is_empty());
    }

    #[test]
    fn test_remove_clears_dangling_id() {
        let store = FavoritesStore::new(MemoryStore::new());
        let user = UserIdentity::named("ana");
        store
            .storage()
            .set("aichef_favorites|ana", r#"["ghost"]"#)
            .unwrap();
        assert!(store.is_favorite("ghost", &user));

        run_favorites(
            Some(FavoritesAction::Remove { id: "ghost".into() }),
            &store,
            &user,
        )
        .unwrap();
        assert!(!store.is_favorite("ghost", &user));
        assert!(store.favorite_ids(&user).is_empty());
        assert!(store.saved_records(&user).is_empty());
    }
}
