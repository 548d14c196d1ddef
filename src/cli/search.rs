// src/cli/search.rs — Interactive search & refinement REPL

use std::sync::Arc;

use super::render;
use crate::core::session::{SearchSession, SessionState};
use crate::core::types::{Recipe, UserIdentity};
use crate::favorites::FavoritesStore;
use crate::search::SearchService;
use crate::storage::KeyValueStore;

/// Run the initial search, then read refinements until EOF or `/quit`.
pub async fn run_search<S: KeyValueStore>(
    service: Arc<dyn SearchService>,
    favorites: &FavoritesStore<S>,
    user: UserIdentity,
    query: &str,
) -> anyhow::Result<()> {
    let mut session = SearchSession::new(service, user);

    eprintln!("Searching for \"{}\"...", query.trim());
    session.search(query).await;
    print_session(&session, favorites);

    if !matches!(
        session.state(),
        SessionState::Populated(_) | SessionState::Empty
    ) {
        return Ok(());
    }

    eprintln!("Refine with a message, or /fav <n>, /show <n>, /list, /quit.");

    while let Some(input) = read_input() {
        let trimmed = input.trim();

        if trimmed == "quit" || trimmed == "exit" || trimmed == "/quit" {
            break;
        }

        if trimmed.starts_with('/') {
            handle_slash_command(trimmed, &session, favorites);
            continue;
        }

        if trimmed.is_empty() {
            continue;
        }

        if !session.refine(trimmed).await {
            eprintln!("  (refinement ignored)");
            continue;
        }
        if let Some(reply) = session.transcript().last() {
            println!("{}", render::render_message(reply));
        }
        print_results(&session, favorites);
    }

    Ok(())
}

fn print_session<S: KeyValueStore>(session: &SearchSession, favorites: &FavoritesStore<S>) {
    if let Some(line) = render::render_status_line(session.state()) {
        println!("{line}");
        return;
    }
    if let Some(advisory) = session.advisory() {
        println!("chef> {advisory}\n");
    }
    print_results(session, favorites);
}

fn print_results<S: KeyValueStore>(session: &SearchSession, favorites: &FavoritesStore<S>) {
    print!(
        "{}",
        results_text(session.candidates(), favorites, session.user())
    );
}

/// Stars only recipes that would also show up in the favorites listing.
fn results_text<S: KeyValueStore>(
    candidates: &[Recipe],
    favorites: &FavoritesStore<S>,
    user: &UserIdentity,
) -> String {
    render::render_results(candidates, |id| favorites.is_listed(id, user))
}

/// Toggle as the result list shows it: a dangling id renders unstarred, so
/// it is cleared first and the toggle saves the record.
fn toggle_shown<S: KeyValueStore>(
    favorites: &FavoritesStore<S>,
    recipe: &Recipe,
    user: &UserIdentity,
) -> bool {
    if favorites.is_favorite(&recipe.id, user) && !favorites.is_listed(&recipe.id, user) {
        favorites.toggle_favorite(recipe, user);
    }
    favorites.toggle_favorite(recipe, user)
}

fn read_input() -> Option<String> {
    use std::io::{self, BufRead, Write};

    print!("> ");
    io::stdout().flush().ok();

    let stdin = io::stdin();
    let mut line = String::new();
    match stdin.lock().read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line),
        Err(_) => None,
    }
}

/// Parse a 1-based result number.
fn parse_index(arg: &str, len: usize) -> Option<usize> {
    let n: usize = arg.parse().ok()?;
    (1..=len).contains(&n).then(|| n - 1)
}

fn handle_slash_command<S: KeyValueStore>(
    input: &str,
    session: &SearchSession,
    favorites: &FavoritesStore<S>,
) {
    let parts: Vec<&str> = input.splitn(2, ' ').collect();
    let cmd = parts[0];
    let arg = parts.get(1).map(|s| s.trim()).unwrap_or("");
    let candidates = session.candidates();

    match cmd {
        "/fav" => match parse_index(arg, candidates.len()) {
            Some(i) => {
                let recipe = &candidates[i];
                let saved = toggle_shown(favorites, recipe, session.user());
                if saved {
                    eprintln!("  Saved {}", recipe.name);
                } else {
                    eprintln!("  Removed {} from favorites", recipe.name);
                }
            }
            None => eprintln!("  Usage: /fav <1-{}>", candidates.len()),
        },

        "/show" => {
            let recipe = parse_index(arg, candidates.len()).map(|i| &candidates[i]);
            let favorite = recipe
                .map(|r| favorites.is_listed(&r.id, session.user()))
                .unwrap_or(false);
            print!("{}", render::render_detail(recipe, favorite));
        }

        "/list" => print_results(session, favorites),

        "/history" => {
            for message in session.transcript() {
                println!("{}", render::render_message(message));
            }
        }

        "/help" => {
            eprintln!("  /fav <n>    Toggle favorite for result n");
            eprintln!("  /show <n>   Show result n in full");
            eprintln!("  /list       Show current results");
            eprintln!("  /history    Show this conversation");
            eprintln!("  /quit       Leave");
        }

        other => eprintln!("  Unknown command: {other} (try /help)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_dangling_id_not_starred() {
        let favorites = FavoritesStore::new(MemoryStore::new());
        let user = UserIdentity::Anonymous;
        favorites
            .storage()
            .set("aichef_favorites", r#"["ghost"]"#)
            .unwrap();
        let list = vec![Recipe::new("ghost", "Ghost")];

        assert_eq!(results_text(&list, &favorites, &user), "   1. Ghost\n");
        assert!(favorites.list_favorites(&user).is_empty());

        assert!(toggle_shown(&favorites, &list[0], &user));
        assert_eq!(results_text(&list, &favorites, &user), "*  1. Ghost\n");
        assert_eq!(favorites.list_favorites(&user), list);

        assert!(!toggle_shown(&favorites, &list[0], &user));
        assert_eq!(results_text(&list, &favorites, &user), "   1. Ghost\n");
    }

    #[test]
    fn test_parse_index_bounds() {
        assert_eq!(parse_index("1", 3), Some(0));
        assert_eq!(parse_index("3", 3), Some(2));
        assert_eq!(parse_index("0", 3), None);
        assert_eq!(parse_index("4", 3), None);
        assert_eq!(parse_index("x", 3), None);
        assert_eq!(parse_index("1", 0), None);
    }
}
