// src/search/http.rs — reqwest client for the AIChef search API

use async_trait::async_trait;
use std::time::Duration;

use super::{SearchError, SearchOutcome, SearchRequest, SearchService};
use crate::infra::config::ServiceConfig;

/// Header the service uses to pick the per-user preference profile.
const USERNAME_HEADER: &str = "X-Username";

pub struct HttpSearchService {
    base_url: String,
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpSearchService {
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
            timeout: config.timeout(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check the service root. `Ok(false)` means it answered with a non-2xx.
    pub async fn health(&self) -> Result<bool, SearchError> {
        let resp = self
            .client
            .get(format!("{}/", self.base_url))
            .timeout(Duration::from_secs(3))
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;
        Ok(resp.status().is_success())
    }
}

#[async_trait]
impl SearchService for HttpSearchService {
    async fn search(&self, request: SearchRequest) -> Result<SearchOutcome, SearchError> {
        tracing::debug!(
            query = %request.query,
            refinement = request.refinement.as_deref().unwrap_or(""),
            limit = request.limit,
            "POST /api/search"
        );

        let mut builder = self
            .client
            .post(format!("{}/api/search", self.base_url))
            .timeout(self.timeout)
            .json(&request);
        if let Some(name) = request.user.name() {
            builder = builder.header(USERNAME_HEADER, name);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("detail").cloned())
                .filter(|d| !d.is_null());
            tracing::warn!(status = status.as_u16(), "Search request failed");
            return Err(SearchError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| SearchError::Decode(e.to_string()))?;

        SearchOutcome::from_body(body).map_err(|e| SearchError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let svc = HttpSearchService::new(&ServiceConfig {
            base_url: "http://localhost:8000/".into(),
            timeout_seconds: 1,
        });
        assert_eq!(svc.base_url(), "http://localhost:8000");
    }
}
