//! # User Sources
//!
//! Where raw user records come from. [`DummyJsonSource`] talks to the
//! public users API; [`StaticSource`] serves an in-memory roster for
//! offline runs and tests.

use std::time::Duration;

use async_trait::async_trait;
use hr_domain::RawUser;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::config::Config;
use crate::error::{LoadError, Result};

/// A provider of raw user records
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetch up to `limit` users in upstream order
    async fn fetch_users(&self, limit: u32) -> Result<Vec<RawUser>>;

    /// Fetch a single user by id
    async fn fetch_user(&self, id: u32) -> Result<RawUser>;
}

/// Envelope of the list endpoint
#[derive(Debug, Deserialize)]
struct UsersPage {
    users: Vec<RawUser>,
}

/// HTTP source for the DummyJSON users API
#[derive(Debug, Clone)]
pub struct DummyJsonSource {
    client: Client,
    base_url: String,
}

impl DummyJsonSource {
    /// Create a source against `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Create a source from client configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.api_base_url.clone(), config.request_timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_body(&self, url: &str, query: &[(&str, String)]) -> Result<(StatusCode, String)> {
        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(url, status = status.as_u16(), bytes = body.len(), "Upstream response");
        Ok((status, body))
    }
}

#[async_trait]
impl UserSource for DummyJsonSource {
    async fn fetch_users(&self, limit: u32) -> Result<Vec<RawUser>> {
        let url = format!("{}/users", self.base_url);
        let (status, body) = self.get_body(&url, &[("limit", limit.to_string())]).await?;
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }
        let page: UsersPage = serde_json::from_str(&body)?;
        Ok(page.users)
    }

    async fn fetch_user(&self, id: u32) -> Result<RawUser> {
        let url = format!("{}/users/{id}", self.base_url);
        let (status, body) = self.get_body(&url, &[]).await?;
        match status {
            StatusCode::NOT_FOUND => Err(LoadError::NotFound(id)),
            s if !s.is_success() => Err(LoadError::Status(s.as_u16())),
            _ => Ok(serde_json::from_str(&body)?),
        }
    }
}

/// In-memory roster
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    users: Vec<RawUser>,
}

impl StaticSource {
    pub fn new(users: Vec<RawUser>) -> Self {
        Self { users }
    }

    /// Parse a roster in either the list-endpoint envelope or as a bare array.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Decode`] if the text is neither shape.
    pub fn from_json(raw: &str) -> Result<Self> {
        if let Ok(page) = serde_json::from_str::<UsersPage>(raw) {
            return Ok(Self::new(page.users));
        }
        let users: Vec<RawUser> = serde_json::from_str(raw)?;
        Ok(Self::new(users))
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserSource for StaticSource {
    async fn fetch_users(&self, limit: u32) -> Result<Vec<RawUser>> {
        Ok(self.users.iter().take(limit as usize).cloned().collect())
    }

    async fn fetch_user(&self, id: u32) -> Result<RawUser> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(LoadError::NotFound(id))
    }
}
