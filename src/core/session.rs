// src/core/session.rs — Search & refinement session
//
// One session per top-level query. The initial search fills the result set;
// each refinement re-runs the *original* query with a refinement parameter
// and replaces the result set. Every call is issued under a ticket stamped
// with the session generation, so a response that arrives after the query
// changed is dropped instead of overwriting newer state.

use std::sync::Arc;

use crate::core::types::{Recipe, RefinementMessage, UserIdentity};
use crate::search::{SearchError, SearchOutcome, SearchRequest, SearchService};

/// Assistant reply when a refinement succeeds without an advisory.
pub const REFINEMENT_ACK: &str = "Recipes updated based on your feedback.";
/// Assistant reply when a refinement call fails.
pub const REFINEMENT_FAILURE: &str = "Sorry, I encountered an error while updating the recipes.";

/// What the session is showing right now.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Idle,
    Loading,
    Populated(Vec<Recipe>),
    Empty,
    Error(String),
    /// A refinement is in flight; the prior results stay visible.
    Refining(Vec<Recipe>),
}

impl SessionState {
    fn from_candidates(candidates: Vec<Recipe>) -> Self {
        if candidates.is_empty() {
            Self::Empty
        } else {
            Self::Populated(candidates)
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Populated(_) => "populated",
            Self::Empty => "empty",
            Self::Error(_) => "error",
            Self::Refining(_) => "refining",
        }
    }

    /// Results currently on screen.
    pub fn candidates(&self) -> &[Recipe] {
        match self {
            Self::Populated(list) | Self::Refining(list) => list,
            _ => &[],
        }
    }
}

/// Proof that an initial search was started for a given generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
}

/// Proof that a refinement was started for a given generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefinementTicket {
    generation: u64,
}

pub struct SearchSession {
    service: Arc<dyn SearchService>,
    user: UserIdentity,
    query: String,
    state: SessionState,
    transcript: Vec<RefinementMessage>,
    advisory: Option<String>,
    generation: u64,
}

impl SearchSession {
    pub fn new(service: Arc<dyn SearchService>, user: UserIdentity) -> Self {
        Self {
            service,
            user,
            query: String::new(),
            state: SessionState::Idle,
            transcript: Vec::new(),
            advisory: None,
            generation: 0,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn candidates(&self) -> &[Recipe] {
        self.state.candidates()
    }

    pub fn transcript(&self) -> &[RefinementMessage] {
        &self.transcript
    }

    /// Advisory that came with the initial search. Not part of the transcript.
    pub fn advisory(&self) -> Option<&str> {
        self.advisory.as_deref()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn user(&self) -> &UserIdentity {
        &self.user
    }

    pub fn is_refining(&self) -> bool {
        matches!(self.state, SessionState::Refining(_))
    }

    /// Run the initial search for a new top-level query.
    pub async fn search(&mut self, query: &str) {
        let Some((ticket, request)) = self.begin_search(query) else {
            return;
        };
        let result = self.service.search(request).await;
        self.finish_search(ticket, result);
    }

    /// Submit a refinement and wait for it. Returns false if it was ignored.
    pub async fn refine(&mut self, text: &str) -> bool {
        let Some((ticket, request)) = self.begin_refinement(text) else {
            return false;
        };
        let result = self.service.search(request).await;
        self.finish_refinement(ticket, result);
        true
    }

    /// Reset for `query` and hand back the request to send. A blank query
    /// resets to idle and issues nothing.
    pub fn begin_search(&mut self, query: &str) -> Option<(SearchTicket, SearchRequest)> {
        self.generation += 1;
        self.transcript.clear();
        self.advisory = None;

        let query = query.trim();
        self.query = query.to_string();
        if query.is_empty() {
            self.state = SessionState::Idle;
            return None;
        }

        tracing::info!(query, user = %self.user, "Starting recipe search");
        self.state = SessionState::Loading;
        let request = SearchRequest::new(query).for_user(self.user.clone());
        Some((
            SearchTicket {
                generation: self.generation,
            },
            request,
        ))
    }

    /// Apply an initial-search response. Returns false if it was stale.
    pub fn finish_search(
        &mut self,
        ticket: SearchTicket,
        result: Result<SearchOutcome, SearchError>,
    ) -> bool {
        if ticket.generation != self.generation || self.state != SessionState::Loading {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                "Dropping stale search response"
            );
            return false;
        }

        match result {
            Ok(outcome) => {
                let (candidates, advisory) = outcome.into_parts();
                tracing::info!(count = candidates.len(), "Search returned");
                self.advisory = advisory;
                self.state = SessionState::from_candidates(candidates);
            }
            Err(e) => {
                tracing::warn!("Search failed: {e}");
                self.state = SessionState::Error(e.user_message());
            }
        }
        true
    }

    /// Record the user's refinement and hand back the request to send.
    ///
    /// Ignored when the text is blank, a refinement is already in flight, or
    /// there is no result view (idle, loading, error) to refine.
    pub fn begin_refinement(&mut self, text: &str) -> Option<(RefinementTicket, SearchRequest)> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let prior = match std::mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::Populated(list) => list,
            SessionState::Empty => Vec::new(),
            other => {
                tracing::debug!(state = other.name(), "Refinement ignored");
                self.state = other;
                return None;
            }
        };

        self.transcript.push(RefinementMessage::user(text));
        self.state = SessionState::Refining(prior);

        let request = SearchRequest::new(self.query.clone())
            .with_refinement(text)
            .for_user(self.user.clone());
        Some((
            RefinementTicket {
                generation: self.generation,
            },
            request,
        ))
    }

    /// Apply a refinement response. Returns false if it was stale.
    pub fn finish_refinement(
        &mut self,
        ticket: RefinementTicket,
        result: Result<SearchOutcome, SearchError>,
    ) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!("Dropping refinement response for a previous query");
            return false;
        }
        let prior = match std::mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::Refining(list) => list,
            other => {
                self.state = other;
                return false;
            }
        };

        match result {
            Ok(outcome) => {
                // Only a non-empty candidate list replaces the results; a bare
                // recipe record or an empty list keeps what is on screen.
                let (candidates, advisory) = match outcome {
                    SearchOutcome::Candidates {
                        candidates,
                        advisory,
                    } => (candidates, advisory),
                    SearchOutcome::Single(_) | SearchOutcome::Nothing => (Vec::new(), None),
                };
                tracing::info!(count = candidates.len(), "Refinement returned");
                self.state = if candidates.is_empty() {
                    SessionState::from_candidates(prior)
                } else {
                    SessionState::Populated(candidates)
                };
                let reply = advisory.unwrap_or_else(|| REFINEMENT_ACK.to_string());
                self.transcript.push(RefinementMessage::assistant(reply));
            }
            Err(e) => {
                tracing::warn!("Refinement failed: {e}");
                self.state = SessionState::from_candidates(prior);
                self.transcript
                    .push(RefinementMessage::assistant(REFINEMENT_FAILURE));
            }
        }
        true
    }
}
