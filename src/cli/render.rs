// src/cli/render.rs — Plain-text rendering of results, transcript, details

use std::fmt::Write;

use crate::core::session::SessionState;
use crate::core::types::{Recipe, RefinementMessage, Role};

/// Tags shown per result line.
const MAX_LIST_TAGS: usize = 3;

/// Numbered result list. `is_favorite` marks saved entries with a star.
pub fn render_results(candidates: &[Recipe], is_favorite: impl Fn(&str) -> bool) -> String {
    let mut out = String::new();
    for (i, recipe) in candidates.iter().enumerate() {
        let star = if is_favorite(&recipe.id) { "*" } else { " " };
        let _ = write!(out, "{star} {:>2}. {}", i + 1, recipe.name);
        let tags: Vec<&str> = recipe
            .tags()
            .iter()
            .take(MAX_LIST_TAGS)
            .map(String::as_str)
            .collect();
        if !tags.is_empty() {
            let _ = write!(out, "  [{}]", tags.join(", "));
        }
        out.push('\n');
        if let Some(ref message) = recipe.message {
            let _ = writeln!(out, "       {message}");
        }
    }
    out
}

pub fn render_message(message: &RefinementMessage) -> String {
    let who = match message.role {
        Role::User => "you",
        Role::Assistant => "chef",
    };
    format!("{who}> {}", message.content)
}

/// One-line summary of a non-result state, or `None` when results are shown.
pub fn render_status_line(state: &SessionState) -> Option<String> {
    match state {
        SessionState::Idle => Some("Type something to search for.".into()),
        SessionState::Loading => Some("Searching...".into()),
        SessionState::Empty => Some("No recipes found. Try describing it differently.".into()),
        SessionState::Error(message) => Some(message.clone()),
        SessionState::Refining(_) => Some("Updating recipes...".into()),
        SessionState::Populated(_) => None,
    }
}

/// Detail view for a recipe handed over from the result list. A missing
/// handoff renders as not found.
pub fn render_detail(recipe: Option<&Recipe>, favorite: bool) -> String {
    let Some(recipe) = recipe else {
        return "Recipe not found.\n".to_string();
    };

    let mut out = String::new();
    let heart = if favorite { " (saved)" } else { "" };
    let _ = writeln!(out, "{}{heart}", recipe.name);
    let _ = writeln!(out, "id: {}", recipe.id);
    if !recipe.tags().is_empty() {
        let _ = writeln!(out, "tags: {}", recipe.tags().join(", "));
    }
    if let Some(ref cover) = recipe.cover_image {
        let _ = writeln!(out, "image: {cover}");
    }
    if let Some(ref message) = recipe.message {
        let _ = writeln!(out, "\n{message}");
    }
    if !recipe.steps.is_empty() {
        out.push('\n');
        for step in &recipe.steps {
            let _ = writeln!(out, "{:>3}. {}", step.step_index, step.description);
            if let Some(ref image) = step.image_url {
                let _ = writeln!(out, "     image: {image}");
            }
        }
    }
    out
}
