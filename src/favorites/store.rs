// src/favorites/store.rs — Favorite ids + saved recipe records
//
// Two values per user: a JSON array of ids and a JSON object mapping id to
// the full recipe. Reads never fail: missing or malformed values read as
// empty. Every toggle writes back a reconciled pair whose key sets match.

use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

use super::keys::FavoriteKeys;
use crate::core::types::{Recipe, UserIdentity};
use crate::storage::KeyValueStore;

pub const DEFAULT_NAMESPACE: &str = "aichef";

pub struct FavoritesStore<S> {
    storage: S,
    namespace: String,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_namespace(storage, DEFAULT_NAMESPACE)
    }

    pub fn with_namespace(storage: S, namespace: impl Into<String>) -> Self {
        Self {
            storage,
            namespace: namespace.into(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn keys(&self, user: &UserIdentity) -> FavoriteKeys {
        FavoriteKeys::for_user(&self.namespace, user)
    }

    pub fn is_favorite(&self, recipe_id: &str, user: &UserIdentity) -> bool {
        self.read_ids(&self.keys(user).ids)
            .iter()
            .any(|id| id == recipe_id)
    }

    /// Favorited with a saved record behind it, i.e. shown in listings. A
    /// dangling id counts as not favorited here.
    pub fn is_listed(&self, recipe_id: &str, user: &UserIdentity) -> bool {
        self.get_favorite(recipe_id, user).is_some()
    }

    /// Flip the favorite state of `recipe` for `user` and return the new state.
    pub fn toggle_favorite(&self, recipe: &Recipe, user: &UserIdentity) -> bool {
        let keys = self.keys(user);
        let mut ids = self.read_ids(&keys.ids);
        let mut records = self.read_records(&keys.records);

        let was_favorite = ids.iter().any(|id| *id == recipe.id);
        if was_favorite {
            ids.retain(|id| *id != recipe.id);
            records.remove(&recipe.id);
        } else {
            ids.push(recipe.id.clone());
            records.insert(recipe.id.clone(), recipe.clone());
        }

        // Drop duplicates, ids without a record, and records without an id.
        let mut kept = HashSet::new();
        ids.retain(|id| records.contains_key(id) && kept.insert(id.clone()));
        records.retain(|id, _| kept.contains(id));

        if let Err(e) = self.write(&keys.ids, &ids) {
            tracing::warn!(user = %user, "Failed to save favorite ids: {e}");
            return was_favorite;
        }
        if let Err(e) = self.write(&keys.records, &records) {
            tracing::warn!(user = %user, "Failed to save favorite recipes: {e}");
        }

        tracing::debug!(
            recipe = %recipe.id,
            user = %user,
            favorite = !was_favorite,
            "Toggled favorite"
        );
        !was_favorite
    }

    /// Saved recipes in the order they were favorited. Ids without a saved
    /// record are skipped.
    pub fn list_favorites(&self, user: &UserIdentity) -> Vec<Recipe> {
        let keys = self.keys(user);
        let records = self.read_records(&keys.records);
        let mut seen = HashSet::new();
        self.read_ids(&keys.ids)
            .into_iter()
            .filter(|id| seen.insert(id.clone()))
            .filter_map(|id| records.get(&id).cloned())
            .collect()
    }

    pub fn get_favorite(&self, recipe_id: &str, user: &UserIdentity) -> Option<Recipe> {
        if !self.is_favorite(recipe_id, user) {
            return None;
        }
        self.read_records(&self.keys(user).records)
            .remove(recipe_id)
    }

    /// The raw id list as stored.
    pub fn favorite_ids(&self, user: &UserIdentity) -> Vec<String> {
        self.read_ids(&self.keys(user).ids)
    }

    /// The raw record map as stored, minus entries that fail to parse.
    pub fn saved_records(&self, user: &UserIdentity) -> BTreeMap<String, Recipe> {
        self.read_records(&self.keys(user).records)
    }

    fn read_raw(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to read '{key}': {e}");
                None
            }
        }
    }

    fn read_ids(&self, key: &str) -> Vec<String> {
        let Some(raw) = self.read_raw(key) else {
            return Vec::new();
        };
        match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
            Ok(values) => values
                .into_iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
            Err(e) => {
                tracing::debug!("Ignoring malformed favorite ids under '{key}': {e}");
                Vec::new()
            }
        }
    }

    fn read_records(&self, key: &str) -> BTreeMap<String, Recipe> {
        let Some(raw) = self.read_raw(key) else {
            return BTreeMap::new();
        };
        let map = match serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(&raw) {
            Ok(map) => map,
            Err(e) => {
                tracing::debug!("Ignoring malformed saved recipes under '{key}': {e}");
                return BTreeMap::new();
            }
        };
        map.into_iter()
            .filter_map(|(id, value)| match serde_json::from_value::<Recipe>(value) {
                Ok(recipe) => Some((id, recipe)),
                Err(e) => {
                    tracing::debug!("Skipping unreadable saved recipe '{id}': {e}");
                    None
                }
            })
            .collect()
    }

    fn write<T: Serialize>(&self, key: &str, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string(value)?;
        self.storage.set(key, &json)
    }
}
