//! HTTP client for the portfolio API.
//!
//! Every call is a single stateless GET. There is no retry, caching or
//! pagination, and error bodies are never parsed: any non-success status is
//! reported as a failure of the operation that issued it.

use std::fmt;
use std::future::Future;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::Config;
use crate::models::*;

/// The API operation a request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Profile,
    Projects,
    Search,
    Health,
    TopSkills,
}

impl Operation {
    /// Fixed user-facing text for a failed call.
    pub fn failure(&self) -> &'static str {
        match self {
            Self::Profile => "Failed to fetch profile",
            Self::Projects => "Failed to fetch projects",
            Self::Search => "Failed to search",
            Self::Health => "Health check failed",
            Self::TopSkills => "Failed to fetch top skills",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Projects => "projects",
            Self::Search => "search",
            Self::Health => "health",
            Self::TopSkills => "top_skills",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTTP client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{}: {source}", .operation.failure())]
    Request {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    #[error("{}: server returned {status}", .operation.failure())]
    Status {
        operation: Operation,
        status: StatusCode,
    },

    #[error("{}: invalid response body: {source}", .operation.failure())]
    Decode {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    pub fn operation(&self) -> Operation {
        match self {
            Self::Request { operation, .. }
            | Self::Status { operation, .. }
            | Self::Decode { operation, .. } => *operation,
        }
    }
}

/// The operations the view controller depends on.
///
/// Implemented by [`PortfolioClient`] over HTTP; tests substitute an
/// in-memory double.
pub trait PortfolioApi: Send + Sync + 'static {
    fn get_profile(&self) -> impl Future<Output = Result<Profile, ClientError>> + Send;

    fn get_projects(
        &self,
        skill: Option<&str>,
    ) -> impl Future<Output = Result<ProjectsResponse, ClientError>> + Send;

    fn search(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<SearchResponse, ClientError>> + Send;

    fn health_check(&self) -> impl Future<Output = Result<HealthStatus, ClientError>> + Send;
}

/// HTTP client for the portfolio API.
#[derive(Debug, Clone)]
pub struct PortfolioClient {
    base_url: String,
    client: Client,
}

impl PortfolioClient {
    /// Create a client for the configured backend.
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.api_url().to_string(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a GET request for `path` with optional query parameters.
    fn get(&self, path: &str, query: &[(&str, String)]) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, ?query, "GET");
        let req = self.client.get(&url);
        if query.is_empty() {
            req
        } else {
            req.query(query)
        }
    }

    /// Send a request and decode its JSON body, collapsing every failure
    /// into a [`ClientError`] tagged with `operation`.
    async fn fetch<T: DeserializeOwned>(
        &self,
        operation: Operation,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request
            .send()
            .await
            .map_err(|source| ClientError::Request { operation, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status { operation, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| ClientError::Request { operation, source })?;
        serde_json::from_slice(&body).map_err(|source| ClientError::Decode { operation, source })
    }

    /// Get the full profile.
    pub async fn get_profile(&self) -> Result<Profile, ClientError> {
        self.fetch(Operation::Profile, self.get("/api/profile", &[]))
            .await
    }

    /// List projects, optionally filtered server-side by exact skill name.
    pub async fn get_projects(&self, skill: Option<&str>) -> Result<ProjectsResponse, ClientError> {
        let query: Vec<(&str, String)> = match skill {
            Some(s) if !s.is_empty() => vec![("skill", s.to_string())],
            _ => vec![],
        };
        self.fetch(Operation::Projects, self.get("/api/projects", &query))
            .await
    }

    /// Search projects and skills for free text.
    pub async fn search(&self, query: &str) -> Result<SearchResponse, ClientError> {
        self.fetch(
            Operation::Search,
            self.get("/api/search", &[("q", query.to_string())]),
        )
        .await
    }

    /// Liveness probe.
    pub async fn health_check(&self) -> Result<HealthStatus, ClientError> {
        self.fetch(Operation::Health, self.get("/health", &[]))
            .await
    }

    /// List the profile's first `limit` skills (backend default: 10).
    pub async fn get_top_skills(&self, limit: Option<u32>) -> Result<SkillsResponse, ClientError> {
        let query: Vec<(&str, String)> = limit
            .map(|l| vec![("limit", l.to_string())])
            .unwrap_or_default();
        self.fetch(Operation::TopSkills, self.get("/api/skills/top", &query))
            .await
    }
}

impl PortfolioApi for PortfolioClient {
    async fn get_profile(&self) -> Result<Profile, ClientError> {
        PortfolioClient::get_profile(self).await
    }

    async fn get_projects(&self, skill: Option<&str>) -> Result<ProjectsResponse, ClientError> {
        PortfolioClient::get_projects(self, skill).await
    }

    async fn search(&self, query: &str) -> Result<SearchResponse, ClientError> {
        PortfolioClient::search(self, query).await
    }

    async fn health_check(&self) -> Result<HealthStatus, ClientError> {
        PortfolioClient::health_check(self).await
    }
}
