// src/favorites/keys.rs — Storage keys scoped to a user identity
//
// Anonymous data lives under the bare base key; a named user gets
// `<base>|<name>`. The separator never appears in a bare base key, so a
// named user can never land on the anonymous key, and distinct names give
// distinct suffixes.

use crate::core::types::UserIdentity;

const USER_SEPARATOR: char = '|';

pub fn namespaced_key(base: &str, user: &UserIdentity) -> String {
    match user.name() {
        None => base.to_string(),
        Some(name) => format!("{base}{USER_SEPARATOR}{name}"),
    }
}

/// The pair of keys one user's favorites live under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteKeys {
    /// Ordered list of favorite recipe ids.
    pub ids: String,
    /// Map of recipe id to the full saved recipe.
    pub records: String,
}

impl FavoriteKeys {
    pub fn for_user(namespace: &str, user: &UserIdentity) -> Self {
        Self {
            ids: namespaced_key(&format!("{namespace}_favorites"), user),
            records: namespaced_key(&format!("{namespace}_saved_recipes"), user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_uses_base() {
        assert_eq!(
            namespaced_key("aichef_favorites", &UserIdentity::Anonymous),
            "aichef_favorites"
        );
    }

    #[test]
    fn test_named_user_suffix() {
        assert_eq!(
            namespaced_key("aichef_favorites", &UserIdentity::named("ana")),
            "aichef_favorites|ana"
        );
    }

    #[test]
    fn test_deterministic_and_distinct() {
        let a = UserIdentity::named("ana");
        let b = UserIdentity::named("bo");
        assert_eq!(namespaced_key("x", &a), namespaced_key("x", &a));
        assert_ne!(namespaced_key("x", &a), namespaced_key("x", &b));
        assert_ne!(
            namespaced_key("x", &a),
            namespaced_key("x", &UserIdentity::Anonymous)
        );
        // Names that look like separators still stay apart.
        assert_ne!(
            namespaced_key("x", &UserIdentity::named("a|b")),
            namespaced_key("x", &UserIdentity::named("a"))
        );
    }

    #[test]
    fn test_favorite_keys_pair() {
        let keys = FavoriteKeys::for_user("aichef", &UserIdentity::named("ana"));
        assert_eq!(keys.ids, "aichef_favorites|ana");
        assert_eq!(keys.records, "aichef_saved_recipes|ana");
    }
}
