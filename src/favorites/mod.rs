// src/favorites/mod.rs — Per-user favorites kept in local storage

pub mod keys;
pub mod store;

pub use keys::{namespaced_key, FavoriteKeys};
pub use store::FavoritesStore;
