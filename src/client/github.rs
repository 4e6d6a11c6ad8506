//! GitHub REST API client implementation

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use log::debug;
use reqwest::{Client as HttpClient, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;

use super::models::{
    CreateRepositoryRequest, CreateTeamRequest, Organization, RepoCollaborator, RepoPermission,
    Repository, Team, TeamMember, TeamRole,
};
use super::GitHubApi;
use crate::error::{ApiError, Result};

/// GitHub API base URL
const API_BASE_URL: &str = "https://api.github.com";

/// GitHub REST API version header value
const API_VERSION: &str = "2022-11-28";

/// Client-side pacing to stay clear of secondary rate limits
const RATE_LIMIT_PER_SECOND: u32 = 8;

/// GitHub API client
///
/// Holds the bearer token explicitly; the token is checked locally before
/// each request and an absent token fails without touching the network.
pub struct GitHubClient {
    http: HttpClient,
    base_url: String,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
    token: Option<String>,
}

impl GitHubClient {
    /// Create a new client against the production API
    pub fn new(token: Option<String>) -> Result<Self> {
        Self::with_host(token, None)
    }

    /// Create a new client with an optional API host override.
    ///
    /// The override exists for tests and GitHub Enterprise hosts; `None`
    /// uses the public API.
    pub fn with_host(token: Option<String>, host: Option<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let quota = Quota::per_second(std::num::NonZeroU32::new(RATE_LIMIT_PER_SECOND).unwrap());
        let rate_limiter = Arc::new(RateLimiter::direct(quota));

        Ok(Self {
            http,
            base_url: host.unwrap_or_else(|| API_BASE_URL.to_string()),
            rate_limiter,
            token,
        })
    }

    /// Get the bearer token, failing locally if none is configured
    fn bearer_token(&self) -> Result<&str> {
        self.token
            .as_deref()
            .ok_or_else(|| ApiError::Unauthorized.into())
    }

    /// Issue a request and map non-success statuses to [`ApiError`]
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<reqwest::Response> {
        self.rate_limiter.until_ready().await;

        let token = self.bearer_token()?;
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method, &url)
            .header("Authorization", format!("Bearer {}", token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
            .header("User-Agent", concat!("orgkit/", env!("CARGO_PKG_VERSION")));

        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        debug!("response status {}", status);
        if status.is_success() {
            return Ok(response);
        }

        match status {
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized.into()),
            StatusCode::FORBIDDEN => Err(ApiError::Forbidden.into()),
            StatusCode::NOT_FOUND => {
                let msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Resource not found".to_string());
                Err(ApiError::NotFound(msg).into())
            }
            // GitHub reports duplicate team/repository names as 422, and
            // some write paths as 409
            StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
                let msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Conflict".to_string());
                Err(ApiError::Conflict(msg).into())
            }
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(60);
                Err(ApiError::RateLimit(Duration::from_secs(retry_after)).into())
            }
            StatusCode::BAD_REQUEST => {
                let msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Bad request".to_string());
                Err(ApiError::BadRequest(msg).into())
            }
            status if status.is_server_error() => {
                let msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("Server error: {}", status));
                Err(ApiError::ServerError(msg).into())
            }
            _ => {
                Err(ApiError::InvalidResponse(format!("Unexpected status code: {}", status)).into())
            }
        }
    }

    /// Issue a request and deserialize the JSON response body
    async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        let response = self.execute(method, path, body).await?;
        let data = response
            .json::<T>()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)))?;
        Ok(data)
    }

    /// Issue a request whose response body is irrelevant (204s and the like)
    async fn request_empty(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<()> {
        self.execute(method, path, body).await?;
        Ok(())
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn get_organization(&self, org: &str) -> Result<Organization> {
        let path = format!("/orgs/{}", org);
        self.request_json(Method::GET, &path, None).await
    }

    async fn list_teams(&self, org: &str) -> Result<Vec<Team>> {
        let path = format!("/orgs/{}/teams", org);
        self.request_json(Method::GET, &path, None).await
    }

    async fn get_team(&self, org: &str, team_slug: &str) -> Result<Team> {
        let path = format!("/orgs/{}/teams/{}", org, team_slug);
        self.request_json(Method::GET, &path, None).await
    }

    async fn create_team(&self, org: &str, request: CreateTeamRequest) -> Result<Team> {
        let path = format!("/orgs/{}/teams", org);
        let body = serde_json::to_value(&request)
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;
        self.request_json(Method::POST, &path, Some(body)).await
    }

    async fn list_team_members(&self, org: &str, team_slug: &str) -> Result<Vec<TeamMember>> {
        let path = format!("/orgs/{}/teams/{}/members", org, team_slug);
        self.request_json(Method::GET, &path, None).await
    }

    async fn add_team_member(
        &self,
        org: &str,
        team_slug: &str,
        username: &str,
        role: TeamRole,
    ) -> Result<()> {
        let path = format!("/orgs/{}/teams/{}/memberships/{}", org, team_slug, username);
        self.request_empty(Method::PUT, &path, Some(json!({ "role": role })))
            .await
    }

    async fn update_team_member_role(
        &self,
        org: &str,
        team_slug: &str,
        username: &str,
        role: TeamRole,
    ) -> Result<()> {
        let path = format!("/orgs/{}/teams/{}/memberships/{}", org, team_slug, username);
        self.request_empty(Method::PATCH, &path, Some(json!({ "role": role })))
            .await
    }

    async fn remove_team_member(&self, org: &str, team_slug: &str, username: &str) -> Result<()> {
        let path = format!("/orgs/{}/teams/{}/memberships/{}", org, team_slug, username);
        self.request_empty(Method::DELETE, &path, None).await
    }

    async fn create_repository(
        &self,
        org: &str,
        request: CreateRepositoryRequest,
    ) -> Result<Repository> {
        let path = format!("/orgs/{}/repos", org);
        let body = serde_json::to_value(&request)
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;
        self.request_json(Method::POST, &path, Some(body)).await
    }

    async fn link_team_to_repository(
        &self,
        org: &str,
        team_slug: &str,
        repo: &str,
        permission: RepoPermission,
    ) -> Result<()> {
        let path = format!("/orgs/{}/teams/{}/repos/{}/{}", org, team_slug, org, repo);
        self.request_empty(Method::PUT, &path, Some(json!({ "permission": permission })))
            .await
    }

    async fn list_team_repositories(&self, org: &str, team_slug: &str) -> Result<Vec<Repository>> {
        let path = format!("/orgs/{}/teams/{}/repos", org, team_slug);
        self.request_json(Method::GET, &path, None).await
    }

    async fn list_repo_collaborators(
        &self,
        org: &str,
        repo: &str,
    ) -> Result<Vec<RepoCollaborator>> {
        let path = format!("/repos/{}/{}/collaborators", org, repo);
        self.request_json(Method::GET, &path, None).await
    }

    async fn add_repo_collaborator(
        &self,
        org: &str,
        repo: &str,
        username: &str,
        permission: RepoPermission,
    ) -> Result<()> {
        let path = format!("/repos/{}/{}/collaborators/{}", org, repo, username);
        self.request_empty(Method::PUT, &path, Some(json!({ "permission": permission })))
            .await
    }

    async fn remove_repo_collaborator(&self, org: &str, repo: &str, username: &str) -> Result<()> {
        let path = format!("/repos/{}/{}/collaborators/{}", org, repo, username);
        self.request_empty(Method::DELETE, &path, None).await
    }
}
