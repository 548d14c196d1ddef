// src/search/mod.rs — Recipe search service boundary

pub mod http;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::core::types::{Recipe, UserIdentity};

pub use http::HttpSearchService;

/// Number of candidates requested for both initial and refinement searches.
pub const SEARCH_LIMIT: u32 = 5;

/// The one operation the session needs from the recommendation backend.
#[async_trait]
pub trait SearchService: Send + Sync {
    async fn search(&self, request: SearchRequest) -> Result<SearchOutcome, SearchError>;
}

/// Body of `POST /api/search`. The user travels as a header, not in the body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refinement: Option<String>,
    #[serde(skip)]
    pub user: UserIdentity,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: SEARCH_LIMIT,
            refinement: None,
            user: UserIdentity::Anonymous,
        }
    }

    pub fn with_refinement(mut self, refinement: impl Into<String>) -> Self {
        self.refinement = Some(refinement.into());
        self
    }

    pub fn for_user(mut self, user: UserIdentity) -> Self {
        self.user = user;
        self
    }
}

/// What a successful search produced.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Candidates {
        candidates: Vec<Recipe>,
        advisory: Option<String>,
    },
    /// The service answered with one recipe record instead of a list.
    Single(Recipe),
    Nothing,
}

impl SearchOutcome {
    /// Interpret a 2xx response body.
    pub fn from_body(body: serde_json::Value) -> Result<Self, serde_json::Error> {
        if let Some(list) = body.get("candidates").filter(|v| !v.is_null()) {
            let candidates: Vec<Recipe> = serde_json::from_value(list.clone())?;
            let advisory = body
                .get("ai_message")
                .and_then(|m| m.as_str())
                .filter(|m| !m.is_empty())
                .map(str::to_string);
            return Ok(Self::Candidates {
                candidates,
                advisory,
            });
        }
        if body.get("recipe_id").is_some() {
            return Ok(Self::Single(serde_json::from_value(body)?));
        }
        Ok(Self::Nothing)
    }

    /// Flatten into a candidate list and the advisory that came with it.
    pub fn into_parts(self) -> (Vec<Recipe>, Option<String>) {
        match self {
            Self::Candidates {
                candidates,
                advisory,
            } => (candidates, advisory),
            Self::Single(recipe) => (vec![recipe], None),
            Self::Nothing => (Vec::new(), None),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("Request failed with status code {status}")]
    Status {
        status: u16,
        /// The `detail` member of the service's error envelope.
        detail: Option<serde_json::Value>,
    },

    #[error("{0}")]
    Transport(String),

    #[error("Invalid search response: {0}")]
    Decode(String),
}

impl SearchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn detail(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Status { detail, .. } => detail.as_ref(),
            _ => None,
        }
    }

    /// Text suitable for the session-level error state.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        describe_failure(self.detail(), Some(&message), self.status())
    }
}

/// Build a readable failure line from whichever sources are present:
/// structured detail first, then the error message, then a generic fallback.
pub fn describe_failure(
    detail: Option<&serde_json::Value>,
    message: Option<&str>,
    status: Option<u16>,
) -> String {
    let reason = detail
        .filter(|d| !d.is_null())
        .map(|d| d.to_string())
        .or_else(|| message.filter(|m| !m.is_empty()).map(str::to_string))
        .unwrap_or_else(|| "Unknown error".to_string());

    match status {
        Some(code) => format!("Connection Failed: {reason}. (Status: {code})"),
        None => format!("Connection Failed: {reason}."),
    }
}
