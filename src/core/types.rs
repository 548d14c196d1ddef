// src/core/types.rs — Recipe model, transcript entries, user identity

use serde::{Deserialize, Serialize};

/// One instruction step. `step_index` is 1-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeStep {
    pub step_index: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A recipe as returned by the search service. The same shape is persisted
/// into the favorites store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "recipe_id")]
    pub id: String,
    #[serde(rename = "recipe_name", default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub steps: Vec<RecipeStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Per-recipe advisory from the service (e.g. match score notes).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Recipe {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cover_image: None,
            steps: Vec::new(),
            tags: None,
            message: None,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Append a step, numbering it after the existing ones.
    pub fn with_step(mut self, description: impl Into<String>) -> Self {
        let step_index = self.steps.len() as u32 + 1;
        self.steps.push(RecipeStep {
            step_index,
            description: description.into(),
            image_url: None,
        });
        self
    }

    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One entry of the refinement transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefinementMessage {
    pub role: Role,
    pub content: String,
}

impl RefinementMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Who favorites are stored for. Passed explicitly into every store call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum UserIdentity {
    #[default]
    Anonymous,
    Named(String),
}

impl UserIdentity {
    pub fn named(name: impl Into<String>) -> Self {
        Self::from_name(Some(&name.into()))
    }

    /// An absent or empty name is the anonymous identity.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some(n) if !n.is_empty() => Self::Named(n.to_string()),
            _ => Self::Anonymous,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Anonymous => None,
            Self::Named(n) => Some(n),
        }
    }
}

impl std::fmt::Display for UserIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Anonymous => write!(f, "(anonymous)"),
            Self::Named(n) => write!(f, "{n}"),
        }
    }
}
